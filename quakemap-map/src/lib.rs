pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod layers;
pub mod legend;
pub mod popup;
pub mod styled;

pub use config::MapConfig;
pub use context::{init_map, MapContext};
