//! Shared HTTP client for catalog requests.
//!
//! Provides a configured [`reqwest::Client`] with the configured timeout,
//! gzip decompression and an identifying User-Agent.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("bookshelf-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for catalog requests.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("bookshelf-search/"));
    }

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&SearchConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = SearchConfig {
            user_agent: Some("ShelfBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
