//! Secrets service operations

use crate::error::Result;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request for UpdateSecret
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecretRequest {
    /// Name or identifier of the secret
    pub secret_id: String,

    /// Idempotency token; repeated calls with the same token create a
    /// single new version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    /// Replacement description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Key used to encrypt the new version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// Replacement secret value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<String>,
}

/// Response for UpdateSecret
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSecretResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
}

/// Client for the secrets service
#[derive(Debug, Clone)]
pub struct SecretsClient {
    http: Arc<HttpClient>,
}

impl SecretsClient {
    /// Create a new secrets client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call UpdateSecret
    pub async fn update_secret(&self, request: &UpdateSecretRequest) -> Result<UpdateSecretResponse> {
        self.http.post_json("/v1/secrets/UpdateSecret", request).await
    }
}
