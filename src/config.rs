//! Profile configuration
//!
//! A profile is a YAML file carrying the endpoint, credentials and
//! transport settings. Command-line flags override environment
//! variables, which override the file.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "STRATUS_ENDPOINT";

/// Environment variable providing an API key
pub const ENV_API_KEY: &str = "STRATUS_API_KEY";

/// A loaded profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Base URL of the control-plane API
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

/// Transport settings from the profile file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of transport retries
    pub max_retries: u32,
    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,
    /// Maximum backoff delay in seconds
    pub max_backoff_secs: u64,
    /// Backoff strategy
    pub backoff: BackoffType,
    /// Client-side rate limit; absent disables it
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            initial_backoff_ms: 100,
            max_backoff_secs: 60,
            backoff: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
        }
    }
}

impl Profile {
    /// Load a profile from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read profile {}: {e}", path.display()))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse a profile from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let profile: Profile = serde_yaml::from_str(yaml)?;
        Ok(profile)
    }

    /// Fold in environment overrides
    ///
    /// `STRATUS_ENDPOINT` replaces the endpoint; `STRATUS_API_KEY`
    /// replaces the auth section with a default-header API key.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            if !endpoint.is_empty() {
                self.endpoint = Some(endpoint);
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                self.auth = AuthConfig::api_key(key);
            }
        }
    }

    /// Resolve the endpoint, preferring an explicit flag value
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<String> {
        let endpoint = flag
            .map(str::to_owned)
            .or_else(|| self.endpoint.clone())
            .ok_or_else(|| {
                Error::config("No endpoint configured (use --endpoint, STRATUS_ENDPOINT, or a profile file)")
            })?;

        url::Url::parse(&endpoint)?;
        Ok(endpoint)
    }

    /// Build the HTTP client configuration for the given endpoint
    pub fn client_config(&self, endpoint: &str) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(endpoint)
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_secs(self.http.max_backoff_secs),
            );

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        builder.build()
    }

    /// Build the authenticator for this profile
    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.auth.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::from_yaml("{}").unwrap();
        assert!(profile.endpoint.is_none());
        assert!(matches!(profile.auth, AuthConfig::None));
        assert_eq!(profile.http.timeout_secs, 30);
        assert_eq!(profile.http.max_retries, 3);
        assert!(profile.http.rate_limit.is_some());
    }

    #[test]
    fn test_profile_from_yaml() {
        let yaml = r"
endpoint: https://api.stratus.example
auth:
  type: api_key
  key: k-123
http:
  timeout_secs: 10
  max_retries: 1
  backoff: constant
";
        let profile = Profile::from_yaml(yaml).unwrap();
        assert_eq!(
            profile.endpoint,
            Some("https://api.stratus.example".to_string())
        );
        assert!(matches!(profile.auth, AuthConfig::ApiKey { .. }));
        assert_eq!(profile.http.timeout_secs, 10);
        assert_eq!(profile.http.max_retries, 1);
        assert_eq!(profile.http.backoff, BackoffType::Constant);
    }

    #[test]
    fn test_resolve_endpoint_prefers_flag() {
        let profile = Profile {
            endpoint: Some("https://from-profile.example".to_string()),
            ..Default::default()
        };

        let endpoint = profile
            .resolve_endpoint(Some("https://from-flag.example"))
            .unwrap();
        assert_eq!(endpoint, "https://from-flag.example");

        let endpoint = profile.resolve_endpoint(None).unwrap();
        assert_eq!(endpoint, "https://from-profile.example");
    }

    #[test]
    fn test_resolve_endpoint_missing() {
        let profile = Profile::default();
        assert!(profile.resolve_endpoint(None).is_err());
    }

    #[test]
    fn test_resolve_endpoint_rejects_invalid_url() {
        let profile = Profile {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            profile.resolve_endpoint(None),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_client_config_from_profile() {
        let yaml = r"
endpoint: https://api.stratus.example
http:
  timeout_secs: 5
  rate_limit: null
";
        let profile = Profile::from_yaml(yaml).unwrap();
        let config = profile.client_config("https://api.stratus.example");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.rate_limit.is_none());
        assert_eq!(
            config.base_url,
            Some("https://api.stratus.example".to_string())
        );
    }

    #[test]
    fn test_profile_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, "endpoint: https://api.stratus.example\n").unwrap();

        let profile = Profile::load(&path).unwrap();
        assert_eq!(
            profile.endpoint,
            Some("https://api.stratus.example".to_string())
        );

        assert!(Profile::load(dir.path().join("missing.yaml")).is_err());
    }
}
