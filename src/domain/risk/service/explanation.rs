//! Human-readable risk explanations and tiered recommendation lists.

use super::RiskLevel;

const RAINFALL_DEVIATION_THRESHOLD: f32 = 25.0;
const TEMPERATURE_DEVIATION_THRESHOLD: f32 = 15.0;
const SOIL_QUALITY_FLOOR: f32 = 0.65;

/// Summarize which factors drove the score. Factors below their thresholds
/// stay silent; no triggered factor at all reads as favorable conditions.
pub fn generate(
    rainfall_deviation: f32,
    temperature_deviation: f32,
    soil_quality: f32,
    disaster_occurred: u8,
) -> String {
    let mut factors: Vec<&str> = Vec::new();

    if rainfall_deviation.abs() > RAINFALL_DEVIATION_THRESHOLD {
        if rainfall_deviation > 0.0 {
            factors.push("Rainfall is significantly higher than the seasonal average for this region");
        } else {
            factors.push("Rainfall deficit detected - below the seasonal average for this region");
        }
    }

    if temperature_deviation.abs() > TEMPERATURE_DEVIATION_THRESHOLD {
        if temperature_deviation > 0.0 {
            factors.push("Temperature is higher than the seasonal average");
        } else {
            factors.push("Temperature is lower than the seasonal average");
        }
    }

    if soil_quality < SOIL_QUALITY_FLOOR {
        factors.push("Soil quality is below optimal for this region");
    }

    if disaster_occurred == 1 {
        factors.push("Recent disaster event reported in this region");
    }

    if factors.is_empty() {
        return "Weather and soil conditions appear favorable for crop growth in this region."
            .to_string();
    }

    format!("Risk factors identified:\n• {}", factors.join("\n• "))
}

/// Actionable recommendations for a risk tier, with the crop and season
/// interpolated into the headline.
pub fn recommendations(level: RiskLevel, crop: &str, season: &str) -> Vec<String> {
    match level {
        RiskLevel::Low => vec![
            format!("Conditions are favorable for {crop} cultivation in the {season} season"),
            "Continue with planned cultivation practices".to_string(),
            "Monitor weather forecasts regularly".to_string(),
            "Maintain proper irrigation schedule based on rainfall".to_string(),
            "Follow standard fertilizer application guidelines".to_string(),
            "Keep pest and disease control measures ready".to_string(),
        ],
        RiskLevel::Medium => vec![
            format!("Moderate risk detected for {crop} in the {season} season"),
            "Consider purchasing crop insurance for financial protection".to_string(),
            "Prepare for potential adverse weather conditions".to_string(),
            "Ensure adequate water storage and drainage systems are in place".to_string(),
            "Monitor crop health closely and take preventive measures".to_string(),
            "Consult the local agricultural extension officer for guidance".to_string(),
            "Consider intercropping or mixed cropping strategies to reduce risk".to_string(),
            "Keep emergency funds ready for contingencies".to_string(),
        ],
        RiskLevel::High => vec![
            format!("High risk for {crop} cultivation detected in the {season} season"),
            "Strongly consider alternative crops suitable for current conditions".to_string(),
            "If proceeding with cultivation, invest in comprehensive crop insurance".to_string(),
            "Implement advanced risk mitigation strategies immediately".to_string(),
            "Consider delaying planting if the weather forecast shows improvement".to_string(),
            "Consult agricultural experts and extension officers before making decisions".to_string(),
            "Prepare detailed financial contingency plans".to_string(),
            "Explore government assistance and subsidy programs".to_string(),
            "Document all farming activities thoroughly for insurance claims".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_factors_read_as_favorable() {
        let text = generate(10.0, 5.0, 0.8, 0);
        assert!(text.contains("favorable"));
    }

    #[test]
    fn triggered_factors_are_listed_as_bullets() {
        let text = generate(-40.0, 20.0, 0.5, 1);
        assert!(text.starts_with("Risk factors identified:"));
        assert!(text.contains("Rainfall deficit"));
        assert!(text.contains("Temperature is higher"));
        assert!(text.contains("Soil quality is below optimal"));
        assert!(text.contains("disaster event"));
        assert_eq!(text.matches('•').count(), 4);
    }

    #[test]
    fn deviation_sign_picks_the_wording() {
        assert!(generate(40.0, 0.0, 0.8, 0).contains("significantly higher"));
        assert!(generate(0.0, -20.0, 0.8, 0).contains("Temperature is lower"));
    }

    #[test]
    fn recommendation_lists_grow_with_risk() {
        let low = recommendations(RiskLevel::Low, "Rice", "Kharif");
        let medium = recommendations(RiskLevel::Medium, "Rice", "Kharif");
        let high = recommendations(RiskLevel::High, "Rice", "Kharif");

        assert_eq!(low.len(), 6);
        assert_eq!(medium.len(), 8);
        assert_eq!(high.len(), 9);
        assert!(low[0].contains("Rice") && low[0].contains("Kharif"));
        assert!(high[0].contains("High risk"));
    }
}
