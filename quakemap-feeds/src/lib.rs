pub mod error;
pub mod fetcher;
pub mod loader;
pub mod plates;
pub mod quake;
pub mod reqwest_fetcher;
pub mod source;

pub use fetcher::{load_document, make_feed_fetcher, FeedFetcher};
pub use loader::{load_feeds, FeedResults};
