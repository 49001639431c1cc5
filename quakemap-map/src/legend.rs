use quakemap_style::{build_legend_buckets, LegendBucket};

use crate::config::ControlPosition;

/// The depth color legend docked to a corner of the map
#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    pub position: ControlPosition,
    pub buckets: Vec<LegendBucket>,
}

impl LegendControl {
    pub fn new(position: ControlPosition) -> Self {
        Self {
            position,
            buckets: build_legend_buckets(),
        }
    }

    /// One colored swatch and label per bucket
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"info legend\">");
        for bucket in &self.buckets {
            html.push_str(&format!(
                "<i style=\"background: {}\"></i> {}<br>",
                bucket.color,
                bucket.label()
            ));
        }
        html.push_str("</div>");
        html
    }
}
