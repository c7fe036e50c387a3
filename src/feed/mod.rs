//! Feed retrieval and the fetch → render → compose pipeline

pub mod orchestrator;
pub mod source;

pub use orchestrator::Orchestrator;
pub use source::{FeedSource, HttpFeedSource, StaticFeedSource};

use crate::core::map::QuakeMap;
use serde::Serialize;

/// What the page should say about the earthquake data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedStatus {
    Loaded { rendered: usize, skipped: usize },
    Unavailable { reason: String },
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedStatus::Loaded { rendered, skipped } => {
                write!(f, "loaded ({} rendered, {} skipped)", rendered, skipped)
            }
            FeedStatus::Unavailable { reason } => write!(f, "unavailable ({})", reason),
        }
    }
}

/// Result of one pipeline run; always carries a renderable map
#[derive(Debug)]
pub struct FeedOutcome {
    map: QuakeMap,
}

impl FeedOutcome {
    pub fn new(map: QuakeMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &QuakeMap {
        &self.map
    }

    pub fn into_map(self) -> QuakeMap {
        self.map
    }

    /// Whether the feed was fetched, even if some features were skipped
    pub fn is_loaded(&self) -> bool {
        matches!(self.map.status, FeedStatus::Loaded { .. })
    }
}
