use lazy_static::lazy_static;
use quakemap_scales::threshold::ThresholdScale;

/// A depth band starts just above `threshold_km`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    pub threshold_km: f64,
    pub color: &'static str,
}

/// Color for depths of 10 km or less, negative depths included.
pub const SHALLOW_COLOR: &str = "#6aff00";

/// Depth bands in ascending threshold order, coolest to hottest.
///
/// Both the depth color function and the legend are derived from this table.
pub const DEPTH_BANDS: [DepthBand; 5] = [
    DepthBand {
        threshold_km: 10.0,
        color: "#e5ff00",
    },
    DepthBand {
        threshold_km: 30.0,
        color: "#ffdd00",
    },
    DepthBand {
        threshold_km: 50.0,
        color: "#ff8000",
    },
    DepthBand {
        threshold_km: 70.0,
        color: "#ff4800",
    },
    DepthBand {
        threshold_km: 90.0,
        color: "#ff0000",
    },
];

lazy_static! {
    static ref DEPTH_SCALE: ThresholdScale<&'static str> = make_depth_scale();
}

fn make_depth_scale() -> ThresholdScale<&'static str> {
    let thresholds = DEPTH_BANDS.iter().map(|b| b.threshold_km).collect();
    let range = std::iter::once(SHALLOW_COLOR)
        .chain(DEPTH_BANDS.iter().map(|b| b.color))
        .collect();
    // DEPTH_BANDS is a constant, ascending table with one color per threshold
    ThresholdScale::try_new(range, thresholds, SHALLOW_COLOR)
        .expect("DEPTH_BANDS must be ascending")
}

/// The threshold scale behind [`color_for_depth`]
pub fn depth_scale() -> &'static ThresholdScale<&'static str> {
    &DEPTH_SCALE
}

/// Hex fill color for an event at `depth_km`.
///
/// A depth equal to a threshold belongs to the shallower band. NaN gets the
/// shallow color.
pub fn color_for_depth(depth_km: f64) -> &'static str {
    DEPTH_SCALE.scale(depth_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0001, "#ff0000")]
    #[case(90.0, "#ff4800")]
    #[case(70.0001, "#ff4800")]
    #[case(70.0, "#ff8000")]
    #[case(50.0, "#ffdd00")]
    #[case(30.0, "#e5ff00")]
    #[case(10.0001, "#e5ff00")]
    #[case(10.0, "#6aff00")]
    #[case(0.0, "#6aff00")]
    #[case(-5.0, "#6aff00")]
    #[case(650.0, "#ff0000")]
    fn test_boundaries(#[case] depth: f64, #[case] expected: &str) {
        assert_eq!(color_for_depth(depth), expected);
    }

    #[test]
    fn test_non_finite_depths() {
        assert_eq!(color_for_depth(f64::NAN), SHALLOW_COLOR);
        assert_eq!(color_for_depth(f64::INFINITY), "#ff0000");
        assert_eq!(color_for_depth(f64::NEG_INFINITY), SHALLOW_COLOR);
    }

    #[test]
    fn test_heat_is_monotonic() {
        let palette = depth_scale().range();
        assert_eq!(palette.len(), 6);

        let mut last_idx = 0;
        let mut depth = -50.0;
        while depth < 200.0 {
            let color = color_for_depth(depth);
            let idx = palette.iter().position(|c| *c == color).unwrap();
            assert!(idx >= last_idx, "heat decreased at depth {depth}");
            last_idx = idx;
            depth += 0.25;
        }
        assert_eq!(last_idx, 5);
    }

    #[test]
    fn test_scale_matches_table() {
        let scale = depth_scale();
        let thresholds = DEPTH_BANDS.map(|b| b.threshold_km);
        assert_eq!(scale.thresholds(), &thresholds);
        assert_eq!(scale.range()[0], SHALLOW_COLOR);
        assert_eq!(scale.range()[5], "#ff0000");
    }
}
