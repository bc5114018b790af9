//! Backup service operations

use crate::error::Result;
use crate::http::HttpClient;
use crate::paginate::{PageFetcher, PageRequest, PagedResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest page size ListRestoreJobs accepts
pub const LIST_RESTORE_JOBS_PAGE_MAX: u32 = 1000;

/// Request for ListRestoreJobs
///
/// All filters are conjunctive; unset filters are omitted from the
/// wire body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRestoreJobsRequest {
    /// Only jobs belonging to this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_account_id: Option<String>,

    /// Only jobs in this status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_status: Option<String>,

    /// Only jobs created after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_created_after: Option<DateTime<Utc>>,

    /// Only jobs created before this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_created_before: Option<DateTime<Utc>>,

    /// Only jobs completed after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_complete_after: Option<DateTime<Utc>>,

    /// Only jobs completed before this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_complete_before: Option<DateTime<Utc>>,

    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    /// Continuation token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One restore job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreJob {
    /// Job identifier
    pub restore_job_id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub percent_done: Option<String>,
    #[serde(default)]
    pub backup_size_bytes: Option<u64>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_resource_id: Option<String>,
}

/// Response for ListRestoreJobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRestoreJobsResponse {
    /// Jobs in this page
    pub restore_jobs: Vec<RestoreJob>,
    /// Continuation token, absent on the last page
    pub next_token: Option<String>,
}

impl PagedResponse for ListRestoreJobsResponse {
    type Item = RestoreJob;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[RestoreJob] {
        &self.restore_jobs
    }
}

/// Client for the backup service
#[derive(Debug, Clone)]
pub struct BackupClient {
    http: Arc<HttpClient>,
}

impl BackupClient {
    /// Create a new backup client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call ListRestoreJobs once
    pub async fn list_restore_jobs(
        &self,
        request: &ListRestoreJobsRequest,
    ) -> Result<ListRestoreJobsResponse> {
        self.http
            .post_json("/v1/backup/ListRestoreJobs", request)
            .await
    }

    /// Page over ListRestoreJobs with the given filters held invariant
    pub fn list_restore_jobs_pages(
        &self,
        request: ListRestoreJobsRequest,
    ) -> ListRestoreJobsPages<'_> {
        ListRestoreJobsPages {
            client: self,
            request,
        }
    }
}

/// Page fetcher over ListRestoreJobs
pub struct ListRestoreJobsPages<'a> {
    client: &'a BackupClient,
    request: ListRestoreJobsRequest,
}

#[async_trait]
impl PageFetcher for ListRestoreJobsPages<'_> {
    type Response = ListRestoreJobsResponse;

    async fn fetch_page(&self, page: PageRequest) -> Result<ListRestoreJobsResponse> {
        let mut request = self.request.clone();
        request.next_token = page.token;
        request.max_results = page.page_size;
        self.client.list_restore_jobs(&request).await
    }
}
