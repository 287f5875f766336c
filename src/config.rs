//! Configuration types for itemfeed

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint serving the item list payload
pub const DEFAULT_ENDPOINT: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Timeout applied to the single fetch request (default: 30 seconds)
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Loader configuration
///
/// The defaults point at the fixed production endpoint; the override exists
/// for embedding and tests, not as a general configuration surface — there
/// is no CLI and no environment-variable handling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Absolute URL of the endpoint serving the JSON item list
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Timeout for the fetch request
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_production_endpoint() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
