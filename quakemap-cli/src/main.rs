use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};
use quakemap_feeds::{
    error::FeedError, fetcher::DEFAULT_TIMEOUT, load_document, make_feed_fetcher,
    quake::EarthquakeFeed, source::FeedSource,
};
use quakemap_map::{error::QuakemapMapError, init_map, styled::styled_earthquakes, MapConfig};
use quakemap_style::build_legend_buckets;
use thiserror::Error;

/// Earthquake and tectonic plate map builder
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the depth color legend
    Legend {
        #[arg(short, long, value_enum, default_value_t = LegendFormat::Text)]
        format: LegendFormat,
    },

    /// Attach marker styles and popups to an earthquake GeoJSON feed
    Style {
        /// Feed file path or http(s) URL
        input: String,

        /// Output path for the styled GeoJSON (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fetch timeout in seconds for URL inputs
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Fetch both feeds and write the full map document
    Build {
        /// JSON map config; defaults are used for anything it leaves out
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the map document (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fetch timeout in seconds, overriding the config
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LegendFormat {
    Text,
    Json,
    Html,
}

#[derive(Error, Debug)]
enum QuakemapCliError {
    #[error(transparent)]
    Map(#[from] QuakemapMapError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("No feed could be loaded")]
    AllFeedsFailed,
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), QuakemapCliError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|source| QuakemapCliError::Write {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                }
            }
            fs::write(path, content).map_err(|source| QuakemapCliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn print_legend(format: LegendFormat) -> Result<(), QuakemapCliError> {
    let buckets = build_legend_buckets();
    let content = match format {
        LegendFormat::Text => buckets
            .iter()
            .map(|bucket| format!("{}  {}", bucket.color, bucket.text_label()))
            .collect::<Vec<_>>()
            .join("\n"),
        LegendFormat::Json => serde_json::to_string_pretty(&buckets)?,
        LegendFormat::Html => {
            quakemap_map::legend::LegendControl::new(Default::default()).to_html()
        }
    };
    write_output(None, &content)
}

async fn style_feed(
    input: &str,
    output: Option<&Path>,
    timeout: Duration,
) -> Result<(), QuakemapCliError> {
    let fetcher = make_feed_fetcher(timeout)?;
    let source = FeedSource::from(input);
    let feed = EarthquakeFeed::from_geojson(load_document(fetcher.as_ref(), &source).await?)?;
    if feed.skipped > 0 {
        warn!("Skipped {} invalid features from {}", feed.skipped, source);
    }

    let collection = styled_earthquakes(&feed.features)?;
    info!("Styled {} earthquakes", collection.features.len());
    write_output(output, &serde_json::to_string_pretty(&collection)?)
}

async fn build_map(
    config_path: Option<&Path>,
    output: Option<&Path>,
    timeout: Option<u64>,
) -> Result<(), QuakemapCliError> {
    let mut config = match config_path {
        Some(path) => MapConfig::from_path(path)?,
        None => MapConfig::default(),
    };
    if let Some(timeout) = timeout {
        config.feeds.timeout_secs = timeout;
    }

    let fetcher = make_feed_fetcher(config.feeds.timeout())?;
    let mut map = init_map(config)?;
    map.load_overlays(fetcher.as_ref()).await?;

    for notice in map.notices() {
        error!("{notice}");
    }
    let all_failed = map.notices().len() == map.layers().overlays().count();

    write_output(output, &map.document().to_json(true)?)?;

    if all_failed {
        return Err(QuakemapCliError::AllFeedsFailed);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), QuakemapCliError> {
    match cli.command {
        Commands::Legend { format } => print_legend(format),
        Commands::Style {
            input,
            output,
            timeout,
        } => {
            let timeout = timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT);
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(QuakemapCliError::Runtime)?;
            rt.block_on(style_feed(&input, output.as_deref(), timeout))
        }
        Commands::Build {
            config,
            output,
            timeout,
        } => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(QuakemapCliError::Runtime)?;
            rt.block_on(build_map(config.as_deref(), output.as_deref(), timeout))
        }
    }
}

fn main() -> Result<(), QuakemapCliError> {
    // Setup logger
    env_logger::init();

    // Parse command line arguments with clap
    run(Cli::parse())
}
