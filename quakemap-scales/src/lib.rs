pub mod error;
pub mod threshold;
