//! Translation service operations

use crate::error::Result;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where the documents to translate live
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDataConfig {
    /// URI of the input folder
    pub uri: String,
    /// MIME type of the documents
    pub content_type: String,
}

/// Where translated documents are written
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDataConfig {
    /// URI of the output folder
    pub uri: String,
}

/// Request for StartTranslationJob
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTranslationJobRequest {
    /// Name shown in job listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,

    /// Language of the input documents
    pub source_language_code: String,

    /// Languages to translate into
    pub target_language_codes: Vec<String>,

    /// Input location
    pub input_data_config: InputDataConfig,

    /// Output location
    pub output_data_config: OutputDataConfig,

    /// Role the service assumes to read input and write output
    pub data_access_role: String,

    /// Idempotency token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Response for StartTranslationJob
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartTranslationJobResponse {
    pub job_id: Option<String>,
    pub job_status: Option<String>,
}

/// Client for the translation service
#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: Arc<HttpClient>,
}

impl TranslateClient {
    /// Create a new translate client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call StartTranslationJob
    pub async fn start_translation_job(
        &self,
        request: &StartTranslationJobRequest,
    ) -> Result<StartTranslationJobResponse> {
        self.http
            .post_json("/v1/translate/StartTranslationJob", request)
            .await
    }
}
