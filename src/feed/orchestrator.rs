use crate::{
    core::{
        config::QuakeMapConfig,
        map::{MapComposer, QuakeMap},
    },
    data::{geojson::GeoJson, quake::QuakeEvent},
    feed::{source::FeedSource, FeedOutcome, FeedStatus},
    render::features::FeatureRenderer,
    Result,
};
use chrono::{TimeZone, Utc};
use std::time::Instant;

/// Runs the single-shot pipeline: fetch, render each event, compose the map
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    renderer: FeatureRenderer,
    composer: MapComposer,
}

impl Orchestrator {
    pub fn new(config: QuakeMapConfig) -> Self {
        Self {
            renderer: FeatureRenderer::new(config.markers.clone()),
            composer: MapComposer::new(config),
        }
    }

    /// Fetches from `source` and builds the map.
    ///
    /// A failed fetch still yields a map: empty overlay, unchanged base
    /// layers and legend, and an `Unavailable` status for the page banner.
    pub async fn run(&self, source: &dyn FeedSource) -> Result<FeedOutcome> {
        let started = Instant::now();
        let outcome = match source.fetch().await {
            Ok(document) => FeedOutcome::new(self.build(document)?),
            Err(e) => {
                log::error!("earthquake feed unavailable from {}: {}", source.describe(), e);
                FeedOutcome::new(self.build_unavailable(e.to_string())?)
            }
        };
        log::debug!("pipeline finished in {:?}", started.elapsed());
        Ok(outcome)
    }

    /// Renders a fetched document, skipping features that cannot be placed
    pub fn build(&self, document: GeoJson) -> Result<QuakeMap> {
        if let Some(metadata) = document.metadata() {
            log::info!(
                "feed: {} ({} events, generated {})",
                metadata.title.as_deref().unwrap_or("untitled"),
                metadata.count.unwrap_or(document.feature_count() as u64),
                metadata
                    .generated
                    .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "at an unknown time".to_string())
            );
        }

        let features = document.into_features();
        let mut events = Vec::with_capacity(features.len());
        let mut skipped = 0;
        for feature in features {
            match feature.and_then(|f| QuakeEvent::from_feature(&f)) {
                Ok(event) => events.push(event),
                Err(e) => {
                    log::warn!("skipping feature: {}", e);
                    skipped += 1;
                }
            }
        }

        let overlay = self.renderer.render(&events);
        let status = FeedStatus::Loaded {
            rendered: overlay.len(),
            skipped,
        };
        self.composer.compose(overlay, status)
    }

    /// Map shown when the feed cannot be fetched
    pub fn build_unavailable(&self, reason: String) -> Result<QuakeMap> {
        self.composer
            .compose(self.renderer.render(&[]), FeedStatus::Unavailable { reason })
    }
}
