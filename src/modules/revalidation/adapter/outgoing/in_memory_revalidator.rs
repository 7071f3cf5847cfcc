use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::revalidation::application::ports::outgoing::{PathRevalidator, RevalidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StalePath {
    #[schema(example = "/projects")]
    pub path: String,
    pub marked_at: DateTime<Utc>,
}

/// Remembers when each path was last marked stale so a rendering front end
/// can poll for routes to rebuild.
#[derive(Debug, Default)]
pub struct InMemoryRevalidator {
    entries: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRevalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths marked at or after `since` (all when `None`), newest first.
    pub async fn stale_since(&self, since: Option<DateTime<Utc>>) -> Vec<StalePath> {
        let entries = self.entries.read().await;

        let mut out: Vec<StalePath> = entries
            .iter()
            .filter(|(_, at)| since.map_or(true, |s| **at >= s))
            .map(|(path, at)| StalePath {
                path: path.clone(),
                marked_at: *at,
            })
            .collect();

        out.sort_by(|a, b| {
            b.marked_at
                .cmp(&a.marked_at)
                .then_with(|| a.path.cmp(&b.path))
        });
        out
    }
}

#[async_trait]
impl PathRevalidator for InMemoryRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<(), RevalidationError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        for path in paths {
            entries.insert(path.clone(), now);
        }
        tracing::debug!(count = paths.len(), "Marked paths stale");
        Ok(())
    }
}
