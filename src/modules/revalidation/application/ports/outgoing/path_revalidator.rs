use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevalidationError {
    #[error("Revalidation request failed: {0}")]
    Transport(String),

    #[error("Revalidation endpoint answered with status {0}")]
    Rejected(u16),
}

/// Marks rendered public routes as stale.
#[async_trait]
pub trait PathRevalidator: Send + Sync {
    async fn revalidate(&self, paths: &[String]) -> Result<(), RevalidationError>;
}

/// Runs after a committed write. A failed invalidation is logged and
/// swallowed; the write has already happened.
pub async fn mark_stale(revalidator: &dyn PathRevalidator, paths: Vec<String>) {
    if let Err(e) = revalidator.revalidate(&paths).await {
        tracing::warn!(error = %e, paths = ?paths, "Cache invalidation failed");
    }
}
