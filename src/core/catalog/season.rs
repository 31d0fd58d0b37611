//! Season encoding and seasonal climate baselines.
//!
//! Codes and baselines must match the values the risk model was trained
//! with. Unknown season names fall back to the whole-year code and the
//! all-season averages.

/// Ordinal season code used as a model feature.
pub fn encode(season: &str) -> u8 {
    match season {
        "Kharif" => 1,
        "Rabi" => 2,
        "Summer" | "Zaid" => 3,
        "Whole Year" => 4,
        "Autumn" => 5,
        "Winter" => 6,
        _ => 4,
    }
}

/// Expected total rainfall (mm) for the season.
pub fn rainfall_baseline(season: &str) -> f32 {
    match season {
        "Kharif" => 1200.0,
        "Rabi" => 60.0,
        "Summer" => 100.0,
        "Whole Year" => 800.0,
        _ => 600.0,
    }
}

/// Expected average temperature (°C) for the season.
pub fn temperature_baseline(season: &str) -> f32 {
    match season {
        "Kharif" => 28.0,
        "Rabi" => 20.0,
        "Summer" => 35.0,
        _ => 27.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_codes() {
        assert_eq!(encode("Kharif"), 1);
        assert_eq!(encode("Rabi"), 2);
        assert_eq!(encode("Summer"), 3);
        assert_eq!(encode("Zaid"), 3);
        assert_eq!(encode("Whole Year"), 4);
        assert_eq!(encode("Autumn"), 5);
        assert_eq!(encode("Winter"), 6);
        assert_eq!(encode("Monsoon"), 4);
    }

    #[test]
    fn baselines_fall_back_for_unmapped_seasons() {
        // Zaid shares the Summer code but has no baseline row of its own.
        assert_eq!(rainfall_baseline("Zaid"), 600.0);
        assert_eq!(temperature_baseline("Zaid"), 27.0);
        assert_eq!(rainfall_baseline("Kharif"), 1200.0);
        assert_eq!(temperature_baseline("Summer"), 35.0);
    }
}
