//! Maps earthquake depth and magnitude to marker style, and describes the
//! depth color scale as legend buckets.
//!
//! Every function here is pure: same input, same output, no shared state.

pub mod depth;
pub mod descriptor;
pub mod legend;
pub mod magnitude;

pub use depth::color_for_depth;
pub use descriptor::{style_for, StyleDescriptor};
pub use legend::{build_legend_buckets, LegendBucket};
pub use magnitude::radius_for_magnitude;
