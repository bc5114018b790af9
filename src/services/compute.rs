//! Compute service operations

use crate::error::Result;
use crate::http::HttpClient;
use crate::paginate::{PageFetcher, PageRequest, PagedResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest page size MatchInstanceTypes accepts
pub const MATCH_INSTANCE_TYPES_PAGE_MAX: u32 = 100;

/// An inclusive min/max requirement on a numeric attribute
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRequirement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl RangeRequirement {
    /// Build a range from optional bounds
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }
}

/// Hardware requirements an instance type must satisfy
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRequirements {
    /// Required virtual CPU range
    pub vcpu_count: RangeRequirement,
    /// Required memory range, in MiB
    pub memory_mib: RangeRequirement,
    /// Acceptable CPU architectures; empty means any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub architectures: Vec<String>,
    /// Acceptable virtualization types; empty means any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub virtualization_types: Vec<String>,
}

/// Request for MatchInstanceTypes
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInstanceTypesRequest {
    /// The requirements to match against
    pub requirements: InstanceRequirements,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One matching instance type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTypeMatch {
    /// Instance type name (e.g. "m5.large")
    pub instance_type: String,
}

/// Response for MatchInstanceTypes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInstanceTypesResponse {
    /// Matches in this page
    pub instance_types: Vec<InstanceTypeMatch>,
    /// Continuation token, absent on the last page
    pub next_token: Option<String>,
}

impl PagedResponse for MatchInstanceTypesResponse {
    type Item = InstanceTypeMatch;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[InstanceTypeMatch] {
        &self.instance_types
    }
}

/// Client for the compute service
#[derive(Debug, Clone)]
pub struct ComputeClient {
    http: Arc<HttpClient>,
}

impl ComputeClient {
    /// Create a new compute client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call MatchInstanceTypes once
    pub async fn match_instance_types(
        &self,
        request: &MatchInstanceTypesRequest,
    ) -> Result<MatchInstanceTypesResponse> {
        self.http
            .post_json("/v1/compute/MatchInstanceTypes", request)
            .await
    }

    /// Page over MatchInstanceTypes with the requirements held invariant
    pub fn match_instance_types_pages(
        &self,
        request: MatchInstanceTypesRequest,
    ) -> MatchInstanceTypesPages<'_> {
        MatchInstanceTypesPages {
            client: self,
            request,
        }
    }
}

/// Page fetcher over MatchInstanceTypes
pub struct MatchInstanceTypesPages<'a> {
    client: &'a ComputeClient,
    request: MatchInstanceTypesRequest,
}

#[async_trait]
impl PageFetcher for MatchInstanceTypesPages<'_> {
    type Response = MatchInstanceTypesResponse;

    async fn fetch_page(&self, page: PageRequest) -> Result<MatchInstanceTypesResponse> {
        let mut request = self.request.clone();
        request.next_token = page.token;
        request.max_results = page.page_size;
        self.client.match_instance_types(&request).await
    }
}
