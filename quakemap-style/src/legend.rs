use serde::Serialize;

use crate::depth::depth_scale;

/// Lower bound shown for the shallowest legend bucket. Shallower events still
/// take that bucket's color.
pub const LEGEND_FLOOR_KM: f64 = -10.0;

/// One labeled, colored range of the depth scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendBucket {
    pub lower_bound_km: f64,
    /// `None` for the open-ended deepest bucket
    pub upper_bound_km: Option<f64>,
    pub color: &'static str,
}

impl LegendBucket {
    pub fn label(&self) -> String {
        match self.upper_bound_km {
            Some(upper) => format!("{}&ndash;{} km", self.lower_bound_km, upper),
            None => format!("{}+ km", self.lower_bound_km),
        }
    }

    /// Plain-text label for terminals
    pub fn text_label(&self) -> String {
        match self.upper_bound_km {
            Some(upper) => format!("{} - {} km", self.lower_bound_km, upper),
            None => format!("{}+ km", self.lower_bound_km),
        }
    }
}

/// The six depth legend buckets in ascending order.
///
/// Bounds and colors come from the depth scale, so the legend cannot drift
/// from [`crate::color_for_depth`].
pub fn build_legend_buckets() -> Vec<LegendBucket> {
    depth_scale()
        .bins()
        .map(|bin| LegendBucket {
            lower_bound_km: bin.lower.unwrap_or(LEGEND_FLOOR_KM),
            upper_bound_km: bin.upper,
            color: *bin.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_for_depth;

    #[test]
    fn test_six_ascending_buckets() {
        let buckets = build_legend_buckets();
        assert_eq!(buckets.len(), 6);

        let lowers = buckets.iter().map(|b| b.lower_bound_km).collect::<Vec<_>>();
        assert_eq!(lowers, vec![-10.0, 10.0, 30.0, 50.0, 70.0, 90.0]);

        for pair in buckets.windows(2) {
            assert_eq!(pair[0].upper_bound_km, Some(pair[1].lower_bound_km));
        }
        assert_eq!(buckets[5].upper_bound_km, None);
    }

    #[test]
    fn test_bucket_colors_match_depth_colors() {
        for bucket in build_legend_buckets() {
            let upper = bucket.upper_bound_km.unwrap_or(bucket.lower_bound_km + 100.0);
            for frac in [0.01, 0.5, 0.99] {
                let depth = bucket.lower_bound_km + (upper - bucket.lower_bound_km) * frac;
                assert_eq!(color_for_depth(depth), bucket.color, "depth {depth}");
            }
            assert_eq!(color_for_depth(upper), bucket.color);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(build_legend_buckets(), build_legend_buckets());
    }

    #[test]
    fn test_labels() {
        let buckets = build_legend_buckets();
        assert_eq!(buckets[0].label(), "-10&ndash;10 km");
        assert_eq!(buckets[5].label(), "90+ km");
        assert_eq!(buckets[2].text_label(), "30 - 50 km");
    }

    #[test]
    fn test_serialize_open_bucket() {
        let buckets = build_legend_buckets();
        let value = serde_json::to_value(&buckets[5]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"lowerBoundKm": 90.0, "upperBoundKm": null, "color": "#ff0000"})
        );
    }
}
