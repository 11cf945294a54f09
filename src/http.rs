//! Shared HTTP client construction for Finding API requests.

use crate::config::FindingConfig;
use crate::error::FindingError;
use std::time::Duration;

/// User-Agent sent when the config does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] with the configured timeout and User-Agent.
///
/// # Errors
///
/// Returns [`FindingError::Config`] if the client cannot be constructed.
pub fn build_client(config: &FindingConfig) -> Result<reqwest::Client, FindingError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .build()
        .map_err(|e| FindingError::Config(format!("failed to build HTTP client: {e}")))
}
