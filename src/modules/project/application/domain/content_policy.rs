use crate::project::application::ports::outgoing::DeletePolicy;

/// Deployment-level content rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentPolicy {
    pub delete_policy: DeletePolicy,
}

impl ContentPolicy {
    /// Reads `PROJECT_DELETE_POLICY` (`cascade` when unset).
    pub fn from_env() -> Self {
        let delete_policy = match std::env::var("PROJECT_DELETE_POLICY") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<DeletePolicy>()
                .unwrap_or_else(|e| panic!("Invalid PROJECT_DELETE_POLICY: {e}")),
            _ => DeletePolicy::default(),
        };
        Self { delete_policy }
    }
}
