use crate::{
    error::FeedError,
    fetcher::{load_document, FeedFetcher},
    plates::PlateBoundaries,
    quake::EarthquakeFeed,
    source::FeedSources,
};

/// Outcome of loading both feeds. Each side succeeds or fails on its own.
#[derive(Debug)]
pub struct FeedResults {
    pub plates: Result<PlateBoundaries, FeedError>,
    pub earthquakes: Result<EarthquakeFeed, FeedError>,
}

impl FeedResults {
    pub fn all_failed(&self) -> bool {
        self.plates.is_err() && self.earthquakes.is_err()
    }
}

/// Fetch and parse the plate boundary and earthquake documents concurrently
pub async fn load_feeds(fetcher: &dyn FeedFetcher, sources: &FeedSources) -> FeedResults {
    let plates = async {
        let doc = load_document(fetcher, &sources.plates).await?;
        PlateBoundaries::from_geojson(doc)
    };
    let earthquakes = async {
        let doc = load_document(fetcher, &sources.earthquakes).await?;
        EarthquakeFeed::from_geojson(doc)
    };
    let (plates, earthquakes) = futures::join!(plates, earthquakes);

    match &plates {
        Ok(plates) => log::info!("Loaded {} plate boundaries", plates.len()),
        Err(err) => log::warn!("Failed to load plate boundaries from {}: {err}", sources.plates),
    }
    match &earthquakes {
        Ok(feed) => log::info!(
            "Loaded {} earthquakes ({} skipped)",
            feed.len(),
            feed.skipped
        ),
        Err(err) => log::warn!(
            "Failed to load earthquakes from {}: {err}",
            sources.earthquakes
        ),
    }

    FeedResults {
        plates,
        earthquakes,
    }
}
