//! Configuration source port

use crate::config::{ConfigError, RunConfig};
use async_trait::async_trait;

/// Produces the [`RunConfig`] for a run.
///
/// Loading is async because validating backend credentials may touch the
/// network.
#[async_trait]
pub trait RunConfigSource: Send + Sync {
    async fn load(&self) -> Result<RunConfig, ConfigError>;
}
