use std::sync::Arc;

use async_trait::async_trait;

use crate::revalidation::application::ports::outgoing::{PathRevalidator, RevalidationError};

/// Forwards every invalidation to each target, reporting the first failure
/// after all targets were tried.
#[derive(Clone)]
pub struct FanoutRevalidator {
    targets: Vec<Arc<dyn PathRevalidator>>,
}

impl FanoutRevalidator {
    pub fn new(targets: Vec<Arc<dyn PathRevalidator>>) -> Self {
        Self { targets }
    }
}

#[async_trait]
impl PathRevalidator for FanoutRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<(), RevalidationError> {
        let mut first_error = None;
        for target in &self.targets {
            if let Err(e) = target.revalidate(paths).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
