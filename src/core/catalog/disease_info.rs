//! CNN output classes and the disease description table.
//!
//! `CLASS_NAMES` order must match the training label order of the disease
//! model; the index of the argmax probability is resolved through it.

pub struct DiseaseInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub treatment: &'static [&'static str],
}

pub const CLASS_NAMES: [&str; 15] = [
    "Pepper__bell___Bacterial_spot",
    "Pepper__bell___healthy",
    "Potato___Early_blight",
    "Potato___healthy",
    "Potato___Late_blight",
    "Tomato__Target_Spot",
    "Tomato__Tomato_mosaic_virus",
    "Tomato__Tomato_YellowLeaf__Curl_Virus",
    "Tomato_Bacterial_spot",
    "Tomato_Early_blight",
    "Tomato_healthy",
    "Tomato_Late_blight",
    "Tomato_Leaf_Mold",
    "Tomato_Septoria_leaf_spot",
    "Tomato_Spider_mites_Two_spotted_spider_mite",
];

pub fn class_name(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}

/// Case-insensitive lookup of the description entry for a class label.
pub fn lookup(class: &str) -> Option<&'static DiseaseInfo> {
    DISEASE_INFO
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(class))
        .map(|(_, v)| v)
}

static DISEASE_INFO: &[(&str, DiseaseInfo)] = &[
    (
        "Pepper__bell___Bacterial_spot",
        DiseaseInfo {
            name: "Bell Pepper Bacterial Spot",
            description: "Bacterial infection causing small, water-soaked lesions on leaves and fruit that turn brown and scabby. Spreads rapidly in warm, wet weather.",
            treatment: &[
                "Remove and destroy infected plants",
                "Apply copper-based bactericides early",
                "Use certified disease-free seed",
                "Rotate away from peppers and tomatoes for 2-3 years",
            ],
        },
    ),
    (
        "Pepper__bell___healthy",
        DiseaseInfo {
            name: "Healthy Bell Pepper",
            description: "No disease symptoms detected. The leaf shows normal coloration and structure.",
            treatment: &[
                "Continue regular watering and fertilization",
                "Monitor for early signs of bacterial spot",
            ],
        },
    ),
    (
        "Potato___Early_blight",
        DiseaseInfo {
            name: "Potato Early Blight",
            description: "Fungal disease (Alternaria solani) producing dark concentric-ring lesions on older leaves, leading to defoliation and reduced tuber size.",
            treatment: &[
                "Apply protectant fungicides at first sign",
                "Remove infected plant debris after harvest",
                "Maintain adequate nitrogen fertility",
                "Avoid overhead irrigation late in the day",
            ],
        },
    ),
    (
        "Potato___healthy",
        DiseaseInfo {
            name: "Healthy Potato",
            description: "No disease symptoms detected. Foliage appears vigorous and uniformly green.",
            treatment: &[
                "Maintain hilling and irrigation schedule",
                "Scout weekly for blight symptoms",
            ],
        },
    ),
    (
        "Potato___Late_blight",
        DiseaseInfo {
            name: "Potato Late Blight",
            description: "Aggressive oomycete disease (Phytophthora infestans) causing dark, water-soaked leaf patches with white mold at the margins. Can destroy a field within days in cool, wet weather.",
            treatment: &[
                "Apply systemic fungicides immediately",
                "Destroy infected plants and volunteer potatoes",
                "Harvest tubers only after vines are fully dead",
                "Plant certified seed potatoes next season",
            ],
        },
    ),
    (
        "Tomato__Target_Spot",
        DiseaseInfo {
            name: "Tomato Target Spot",
            description: "Fungal disease producing circular lesions with concentric rings on leaves, stems and fruit, causing premature leaf drop.",
            treatment: &[
                "Improve air circulation by staking and pruning",
                "Apply chlorothalonil or mancozeb fungicides",
                "Avoid working plants when foliage is wet",
            ],
        },
    ),
    (
        "Tomato__Tomato_mosaic_virus",
        DiseaseInfo {
            name: "Tomato Mosaic Virus",
            description: "Viral infection causing mottled light and dark green leaf patterns, leaf curling and reduced fruit set. Spread mechanically and by contaminated tools.",
            treatment: &[
                "Remove and destroy infected plants",
                "Disinfect tools and hands after handling",
                "Plant resistant varieties",
                "Control weed hosts around the field",
            ],
        },
    ),
    (
        "Tomato__Tomato_YellowLeaf__Curl_Virus",
        DiseaseInfo {
            name: "Tomato Yellow Leaf Curl Virus",
            description: "Whitefly-transmitted virus causing upward leaf curling, yellowing and severe stunting. Infected young plants may set no fruit at all.",
            treatment: &[
                "Control whitefly populations with sticky traps and insecticides",
                "Remove infected plants promptly",
                "Use reflective mulches to repel whiteflies",
                "Grow resistant hybrids where available",
            ],
        },
    ),
    (
        "Tomato_Bacterial_spot",
        DiseaseInfo {
            name: "Tomato Bacterial Spot",
            description: "Bacterial disease causing small, greasy-looking leaf spots and raised scabby lesions on fruit, favored by warm, splashing rain.",
            treatment: &[
                "Apply copper sprays preventively",
                "Avoid overhead irrigation",
                "Rotate crops for at least one year",
                "Use pathogen-free transplants",
            ],
        },
    ),
    (
        "Tomato_Early_blight",
        DiseaseInfo {
            name: "Tomato Early Blight",
            description: "Fungal disease causing brown lesions with target-like rings on lower leaves first, progressing upward and weakening the plant.",
            treatment: &[
                "Remove affected lower leaves",
                "Mulch to prevent soil splash",
                "Apply fungicides on a 7-10 day schedule",
                "Rotate away from solanaceous crops",
            ],
        },
    ),
    (
        "Tomato_healthy",
        DiseaseInfo {
            name: "Healthy Tomato",
            description: "No disease symptoms detected. The leaf shows normal color and turgor.",
            treatment: &[
                "Keep consistent watering at the base",
                "Monitor regularly during humid periods",
            ],
        },
    ),
    (
        "Tomato_Late_blight",
        DiseaseInfo {
            name: "Tomato Late Blight",
            description: "Fast-moving oomycete disease causing large, dark, greasy blotches on leaves and firm brown rot on fruit. Thrives in cool, wet conditions.",
            treatment: &[
                "Apply systemic fungicides at first detection",
                "Remove and bag infected plants",
                "Increase plant spacing for airflow",
                "Avoid evening overhead watering",
            ],
        },
    ),
    (
        "Tomato_Leaf_Mold",
        DiseaseInfo {
            name: "Tomato Leaf Mold",
            description: "Fungal disease of humid greenhouses causing pale yellow spots on upper leaf surfaces with olive-green mold underneath.",
            treatment: &[
                "Reduce humidity and improve ventilation",
                "Water at the base, never on foliage",
                "Remove infected leaves promptly",
                "Grow resistant varieties in protected culture",
            ],
        },
    ),
    (
        "Tomato_Septoria_leaf_spot",
        DiseaseInfo {
            name: "Tomato Septoria Leaf Spot",
            description: "Fungal disease producing many small circular spots with dark borders and gray centers, starting on the oldest leaves after fruit set.",
            treatment: &[
                "Remove infected lower foliage",
                "Apply protectant fungicides",
                "Mulch and stake to keep leaves off the soil",
                "Destroy crop debris at season end",
            ],
        },
    ),
    (
        "Tomato_Spider_mites_Two_spotted_spider_mite",
        DiseaseInfo {
            name: "Two-Spotted Spider Mite",
            description: "Mite infestation causing fine stippling, bronzing and webbing on leaves, worst in hot, dry, dusty conditions.",
            treatment: &[
                "Spray undersides of leaves with water to dislodge mites",
                "Apply horticultural oil or insecticidal soap",
                "Introduce predatory mites for biological control",
                "Keep plants well irrigated to reduce stress",
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_a_description_entry() {
        for class in CLASS_NAMES {
            let info = lookup(class).unwrap_or_else(|| panic!("missing entry for {class}"));
            assert!(!info.description.is_empty());
            assert!(!info.treatment.is_empty());
        }
    }

    #[test]
    fn class_name_resolves_in_label_order() {
        assert_eq!(class_name(0), Some("Pepper__bell___Bacterial_spot"));
        assert_eq!(class_name(14), Some("Tomato_Spider_mites_Two_spotted_spider_mite"));
        assert_eq!(class_name(15), None);
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(lookup("tomato_late_blight").is_some());
        assert!(lookup("not_a_class").is_none());
    }
}
