//! Optional `.env` import

use quote_sender_application::ConfigError;
use std::path::Path;
use tracing::debug;

/// Import variables from `path` into the process environment.
///
/// Variables already present in the environment are not overridden. A
/// missing file is not an error and returns `Ok(false)`.
///
/// Call this before any other thread is started: it mutates the process
/// environment.
pub fn load_dotenv(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "no .env file found, using environment variables");
            Ok(false)
        }
        Err(e) => Err(ConfigError::Invalid(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
