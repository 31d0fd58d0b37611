pub struct FeatureUtil;

impl FeatureUtil {
    /// Percentage deviation of an observed value from a seasonal baseline.
    /// The `+ 1` in the denominator matches the training-time derivation.
    #[inline]
    pub fn deviation_pct(value: f32, baseline: f32) -> f32 {
        (value - baseline) / (baseline + 1.0) * 100.0
    }

    #[inline]
    pub fn severity_score(disaster_occurred: u8) -> f32 {
        f32::from(disaster_occurred) * 2.0
    }

    /// Round to two decimal places, as presented to clients.
    #[inline]
    pub fn round2(value: f32) -> f32 {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureUtil;

    #[test]
    fn deviation_uses_baseline_plus_one_denominator() {
        // 1200mm observed against the 1200mm Kharif baseline is a 0% deviation.
        assert_eq!(FeatureUtil::deviation_pct(1200.0, 1200.0), 0.0);
        // 61mm against a 60mm baseline: 1/61 * 100
        let dev = FeatureUtil::deviation_pct(61.0, 60.0);
        assert!((dev - 100.0 / 61.0).abs() < 1e-4);
    }

    #[test]
    fn severity_doubles_the_disaster_flag() {
        assert_eq!(FeatureUtil::severity_score(0), 0.0);
        assert_eq!(FeatureUtil::severity_score(1), 2.0);
    }

    #[test]
    fn round2_matches_presentation_precision() {
        assert_eq!(FeatureUtil::round2(37.2349), 37.23);
        assert_eq!(FeatureUtil::round2(37.2361), 37.24);
    }
}
