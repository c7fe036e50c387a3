//! quakemap - render the USGS earthquake feed as a standalone web map

use anyhow::{Context, Result};
use clap::Parser;
use quakemap::{
    constants::ACCESS_TOKEN_ENV,
    core::config::{FeedLevel, FeedWindow},
    FeedSource, HtmlExporter, HttpFeedSource, Orchestrator, QuakeMapConfig, StaticFeedSource,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "quakemap-app")]
#[command(author, version, about = "Map recent earthquakes from the USGS feed", long_about = None)]
struct Cli {
    /// Where to write the HTML page
    #[arg(short, long, default_value = "quakemap.html")]
    output: PathBuf,

    /// Magnitude threshold: all, significant, 4.5, 2.5, 1.0
    #[arg(long)]
    feed: Option<FeedLevel>,

    /// Time window: hour, day, week, month
    #[arg(long)]
    window: Option<FeedWindow>,

    /// Fetch from this URL instead of the USGS summary feed
    #[arg(long)]
    feed_url: Option<String>,

    /// Read a GeoJSON document from disk instead of fetching
    #[arg(short, long, conflicts_with = "feed_url")]
    input: Option<PathBuf>,

    /// Mapbox access token for the base layers
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    access_token: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Feed request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<QuakeMapConfig> {
        let mut config = match &self.config {
            Some(path) => QuakeMapConfig::read_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => QuakeMapConfig::default(),
        };

        if let Some(level) = self.feed {
            config.feed.level = level;
        }
        if let Some(window) = self.window {
            config.feed.window = window;
        }
        if let Some(url) = &self.feed_url {
            config = config.with_feed_url(url.clone());
        }
        if let Some(token) = &self.access_token {
            config = config.with_access_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.feed.timeout_secs = secs;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn source(&self, config: &QuakeMapConfig) -> Result<Box<dyn FeedSource>> {
        Ok(match &self.input {
            Some(path) => Box::new(
                StaticFeedSource::from_file(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            ),
            None => Box::new(HttpFeedSource::new(
                config.feed.resolved_url(),
                Duration::from_secs(config.feed.timeout_secs),
            )),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = cli.load_config()?;
    let source = cli.source(&config)?;
    log::info!("fetching earthquakes from {}", source.describe());

    let outcome = Orchestrator::new(config).run(source.as_ref()).await?;
    let map = outcome.map();
    if outcome.is_loaded() {
        log::info!("{} earthquakes mapped, feed {}", map.marker_count(), map.status);
    } else {
        log::warn!("writing map without earthquakes: feed {}", map.status);
    }

    HtmlExporter::default()
        .write_to(map, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("{}", cli.output.display());
    Ok(())
}
