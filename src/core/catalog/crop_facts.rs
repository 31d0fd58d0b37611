//! Static crop cultivation facts, keyed by lowercase crop name.

pub struct CropFacts {
    pub name: &'static str,
    pub season: &'static str,
    pub ideal_temp: &'static str,
    pub ideal_rainfall: &'static str,
    pub soil_type: &'static str,
    pub growth_period: &'static str,
    pub tips: &'static [&'static str],
}

pub fn lookup(crop: &str) -> Option<&'static CropFacts> {
    let key = crop.to_lowercase();
    CROP_FACTS.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

pub fn all() -> impl Iterator<Item = (&'static str, &'static CropFacts)> {
    CROP_FACTS.iter().map(|(k, v)| (*k, v))
}

pub fn keys() -> Vec<&'static str> {
    CROP_FACTS.iter().map(|(k, _)| *k).collect()
}

static CROP_FACTS: &[(&str, CropFacts)] = &[
    (
        "rice",
        CropFacts {
            name: "Rice",
            season: "Kharif (June-November)",
            ideal_temp: "20-37°C",
            ideal_rainfall: "1000-2500mm",
            soil_type: "Clayey loam, Loamy",
            growth_period: "3-6 months",
            tips: &[
                "Requires high water availability",
                "Best grown in flooded conditions",
                "Needs warm and humid climate",
            ],
        },
    ),
    (
        "wheat",
        CropFacts {
            name: "Wheat",
            season: "Rabi (October-April)",
            ideal_temp: "10-25°C",
            ideal_rainfall: "300-800mm",
            soil_type: "Loamy, Clay loam",
            growth_period: "4-5 months",
            tips: &[
                "Requires cool climate during growth",
                "Moderate water requirement",
                "Well-drained soil is essential",
            ],
        },
    ),
    (
        "maize",
        CropFacts {
            name: "Maize",
            season: "Kharif and Rabi",
            ideal_temp: "18-27°C",
            ideal_rainfall: "500-900mm",
            soil_type: "Well-drained loamy",
            growth_period: "3-4 months",
            tips: &[
                "Requires warm weather",
                "Moderate water requirement",
                "Good drainage is important",
            ],
        },
    ),
    (
        "cotton",
        CropFacts {
            name: "Cotton",
            season: "Kharif (April-October)",
            ideal_temp: "21-30°C",
            ideal_rainfall: "500-1000mm",
            soil_type: "Black cotton soil, Alluvial",
            growth_period: "5-6 months",
            tips: &[
                "Requires warm temperature",
                "Needs 200+ frost-free days",
                "Deep black soil is ideal",
            ],
        },
    ),
    (
        "jute",
        CropFacts {
            name: "Jute",
            season: "Kharif (March-June)",
            ideal_temp: "24-37°C",
            ideal_rainfall: "1500-2000mm",
            soil_type: "Alluvial soil",
            growth_period: "4-5 months",
            tips: &[
                "Requires high humidity",
                "Needs plenty of water",
                "Warm and moist climate is ideal",
            ],
        },
    ),
    (
        "coconut",
        CropFacts {
            name: "Coconut",
            season: "Year-round",
            ideal_temp: "20-32°C",
            ideal_rainfall: "1500-2500mm",
            soil_type: "Sandy loam, Laterite",
            growth_period: "5-6 years to first yield",
            tips: &[
                "Requires tropical climate",
                "High humidity needed",
                "Well-distributed rainfall throughout year",
            ],
        },
    ),
    (
        "papaya",
        CropFacts {
            name: "Papaya",
            season: "Year-round (tropical)",
            ideal_temp: "22-26°C",
            ideal_rainfall: "1000-1500mm",
            soil_type: "Well-drained sandy loam",
            growth_period: "9-12 months",
            tips: &[
                "Cannot tolerate waterlogging",
                "Requires warm climate",
                "Good drainage is critical",
            ],
        },
    ),
    (
        "apple",
        CropFacts {
            name: "Apple",
            season: "Year-round (temperate)",
            ideal_temp: "15-25°C",
            ideal_rainfall: "1000-1250mm",
            soil_type: "Well-drained loamy",
            growth_period: "3-4 years to first yield",
            tips: &[
                "Requires cold winter for dormancy",
                "Needs chilling hours (800-1500)",
                "Well-drained soil essential",
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let rice = lookup("Rice").expect("rice should be present");
        assert_eq!(rice.name, "Rice");
        assert_eq!(rice.soil_type, "Clayey loam, Loamy");
        assert!(rice.tips.len() >= 3);
    }

    #[test]
    fn unknown_crop_returns_none() {
        assert!(lookup("durian").is_none());
    }

    #[test]
    fn table_covers_expected_crops() {
        assert_eq!(keys().len(), 8);
        assert!(keys().contains(&"coconut"));
    }
}
