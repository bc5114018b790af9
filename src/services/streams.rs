//! Data streams service operations

use crate::error::Result;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How shards are redistributed during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalingType {
    /// Distribute the target count evenly across the key space
    #[default]
    UniformScaling,
}

/// Request for UpdateShardCount
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShardCountRequest {
    /// The stream to scale
    pub stream_name: String,
    /// Desired number of shards
    pub target_shard_count: u32,
    /// Scaling strategy
    pub scaling_type: ScalingType,
}

/// Response for UpdateShardCount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateShardCountResponse {
    pub stream_name: Option<String>,
    pub current_shard_count: Option<u32>,
    pub target_shard_count: Option<u32>,
}

/// Client for the streams service
#[derive(Debug, Clone)]
pub struct StreamsClient {
    http: Arc<HttpClient>,
}

impl StreamsClient {
    /// Create a new streams client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call UpdateShardCount
    pub async fn update_shard_count(
        &self,
        request: &UpdateShardCountRequest,
    ) -> Result<UpdateShardCountResponse> {
        self.http
            .post_json("/v1/streams/UpdateShardCount", request)
            .await
    }
}
