//! Request authentication
//!
//! Applies profile-configured credentials to outgoing requests.
//! Credential vending and signing beyond header material is out of
//! scope; the service side owns those semantics.

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Authentication configuration, as written in the profile file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Static API key sent in a header
    ApiKey {
        /// Header name carrying the key
        #[serde(default = "default_api_key_header")]
        header: String,
        /// The key value
        key: String,
    },

    /// Bearer token
    Bearer {
        /// The token value
        token: String,
    },

    /// HTTP basic auth
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

fn default_api_key_header() -> String {
    "X-Api-Key".to_string()
}

impl AuthConfig {
    /// Create an API key config with the default header
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            header: default_api_key_header(),
            key: key.into(),
        }
    }

    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }
}

/// Applies authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::ApiKey { header, key } => req.header(header.as_str(), key.as_str()),
            AuthConfig::Bearer { token } => req.bearer_auth(token),
            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default_is_none() {
        assert!(matches!(AuthConfig::default(), AuthConfig::None));
    }

    #[test]
    fn test_api_key_default_header() {
        let config = AuthConfig::api_key("k-123");
        match config {
            AuthConfig::ApiKey { header, key } => {
                assert_eq!(header, "X-Api-Key");
                assert_eq!(key, "k-123");
            }
            other => panic!("expected ApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_auth_config_from_yaml() {
        let config: AuthConfig = serde_yaml::from_str("type: bearer\ntoken: tok-1").unwrap();
        assert!(matches!(config, AuthConfig::Bearer { token } if token == "tok-1"));

        let config: AuthConfig =
            serde_yaml::from_str("type: api_key\nkey: abc\nheader: X-Service-Key").unwrap();
        assert!(
            matches!(config, AuthConfig::ApiKey { header, key } if header == "X-Service-Key" && key == "abc")
        );

        let config: AuthConfig = serde_yaml::from_str("type: none").unwrap();
        assert!(matches!(config, AuthConfig::None));
    }
}
