/// Marker radius per unit of magnitude
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Radius for zero and negative magnitudes, which would otherwise be invisible.
pub const MIN_RADIUS: f64 = 1.0;

/// Marker radius for an event of the given magnitude.
///
/// `magnitude * 4`, or [`MIN_RADIUS`] when the magnitude is zero or negative.
/// NaN stays NaN.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude <= 0.0 {
        MIN_RADIUS
    } else {
        magnitude * RADIUS_PER_MAGNITUDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(5.0, 20.0)]
    #[case(2.5, 10.0)]
    #[case(7.8, 31.2)]
    #[case(-0.0, 1.0)]
    #[case(-1.3, 1.0)]
    #[case(0.1, 0.4)]
    #[case(0.2, 0.8)]
    fn test_radius(#[case] magnitude: f64, #[case] expected: f64) {
        assert_approx_eq!(f64, radius_for_magnitude(magnitude), expected);
    }

    #[test]
    fn test_radius_nan() {
        assert!(radius_for_magnitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_micro_events_keep_proportional_size() {
        for m in 1..=100 {
            let magnitude = m as f64 / 100.0;
            assert_approx_eq!(f64, radius_for_magnitude(magnitude), magnitude * 4.0);
        }
    }

    #[test]
    fn test_non_positive_magnitudes_use_minimum() {
        for m in -40..=0 {
            let magnitude = m as f64 / 10.0;
            assert_approx_eq!(f64, radius_for_magnitude(magnitude), MIN_RADIUS);
        }
    }
}
