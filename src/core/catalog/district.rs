//! District soil lookup table, keyed by `"District, State"`.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

pub const DEFAULT_SOIL_TYPE: &str = "Alluvial";
pub const DEFAULT_SOIL_QUALITY: f32 = 0.70;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictSoil {
    pub soil_type: String,
    pub soil_quality: f32,
}

impl Default for DistrictSoil {
    fn default() -> Self {
        Self {
            soil_type: DEFAULT_SOIL_TYPE.to_string(),
            soil_quality: DEFAULT_SOIL_QUALITY,
        }
    }
}

/// Soil characteristics per district, loaded from the model artifact
/// directory. Districts missing from the table answer with the default
/// alluvial profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DistrictTable {
    entries: HashMap<String, DistrictSoil>,
}

impl DistrictTable {
    pub fn lookup(&self, district: &str, state: &str) -> DistrictSoil {
        let key = format!("{district}, {state}");
        self.entries.get(&key).cloned().unwrap_or_default()
    }

    /// Sorted, de-duplicated district names (the part before the comma).
    pub fn district_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .entries
            .keys()
            .filter_map(|key| key.split(',').next())
            .map(|name| name.trim().to_string())
            .collect();
        names.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> DistrictTable {
        serde_json::from_value(json!({
            "Ludhiana, Punjab": { "soil_type": "Alluvial", "soil_quality": 0.82 },
            "Nagpur, Maharashtra": { "soil_type": "Black", "soil_quality": 0.74 }
        }))
        .unwrap()
    }

    #[test]
    fn lookup_returns_stored_profile() {
        let table = sample_table();
        let soil = table.lookup("Nagpur", "Maharashtra");
        assert_eq!(soil.soil_type, "Black");
        assert_eq!(soil.soil_quality, 0.74);
    }

    #[test]
    fn unknown_district_falls_back_to_alluvial_default() {
        let table = sample_table();
        let soil = table.lookup("Shimla", "Himachal Pradesh");
        assert_eq!(soil.soil_type, DEFAULT_SOIL_TYPE);
        assert_eq!(soil.soil_quality, DEFAULT_SOIL_QUALITY);
    }

    #[test]
    fn district_names_are_sorted_and_stripped() {
        let table = sample_table();
        assert_eq!(table.district_names(), vec!["Ludhiana", "Nagpur"]);
    }
}
