//! Studio sessions service operations

use crate::error::Result;
use crate::http::HttpClient;
use crate::paginate::{PageFetcher, PageRequest, PagedResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest page size ListStreamingSessions accepts
pub const LIST_STREAMING_SESSIONS_PAGE_MAX: u32 = 100;

/// Request for ListStreamingSessions
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStreamingSessionsRequest {
    /// The studio to list sessions for
    pub studio_id: String,

    /// Only sessions created by this principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Only sessions owned by this principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One streaming session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingSession {
    /// Session identifier
    pub session_id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub owned_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub terminate_at: Option<DateTime<Utc>>,
}

/// Response for ListStreamingSessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListStreamingSessionsResponse {
    /// Sessions in this page
    pub sessions: Vec<StreamingSession>,
    /// Continuation token, absent on the last page
    pub next_token: Option<String>,
}

impl PagedResponse for ListStreamingSessionsResponse {
    type Item = StreamingSession;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[StreamingSession] {
        &self.sessions
    }
}

/// Kind of principal a session mapping applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityType {
    /// A single user
    User,
    /// A group of users
    Group,
}

/// Request for CreateSessionMapping
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionMappingRequest {
    /// The studio the mapping belongs to
    pub studio_id: String,
    /// Name of the user or group
    pub identity_name: String,
    /// Whether the identity is a user or a group
    pub identity_type: IdentityType,
    /// Access policy applied to the identity's sessions
    pub session_policy: String,
}

/// Response for CreateSessionMapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSessionMappingResponse {
    pub studio_id: Option<String>,
    pub identity_name: Option<String>,
    pub identity_type: Option<String>,
    pub session_policy: Option<String>,
}

/// Client for the sessions service
#[derive(Debug, Clone)]
pub struct SessionsClient {
    http: Arc<HttpClient>,
}

impl SessionsClient {
    /// Create a new sessions client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call ListStreamingSessions once
    pub async fn list_streaming_sessions(
        &self,
        request: &ListStreamingSessionsRequest,
    ) -> Result<ListStreamingSessionsResponse> {
        self.http
            .post_json("/v1/sessions/ListStreamingSessions", request)
            .await
    }

    /// Page over ListStreamingSessions with the filters held invariant
    pub fn list_streaming_sessions_pages(
        &self,
        request: ListStreamingSessionsRequest,
    ) -> ListStreamingSessionsPages<'_> {
        ListStreamingSessionsPages {
            client: self,
            request,
        }
    }

    /// Call CreateSessionMapping
    pub async fn create_session_mapping(
        &self,
        request: &CreateSessionMappingRequest,
    ) -> Result<CreateSessionMappingResponse> {
        self.http
            .post_json("/v1/sessions/CreateSessionMapping", request)
            .await
    }
}

/// Page fetcher over ListStreamingSessions
pub struct ListStreamingSessionsPages<'a> {
    client: &'a SessionsClient,
    request: ListStreamingSessionsRequest,
}

#[async_trait]
impl PageFetcher for ListStreamingSessionsPages<'_> {
    type Response = ListStreamingSessionsResponse;

    async fn fetch_page(&self, page: PageRequest) -> Result<ListStreamingSessionsResponse> {
        let mut request = self.request.clone();
        request.next_token = page.token;
        request.max_results = page.page_size;
        self.client.list_streaming_sessions(&request).await
    }
}
