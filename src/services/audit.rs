//! Audit service operations

use crate::error::Result;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request for DeleteAuditConfiguration
///
/// Restores the account's audit settings to their defaults. Destructive:
/// the command surface gates this behind a confirmation prompt.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAuditConfigurationRequest {
    /// Also delete any scheduled audits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_scheduled_audits: Option<bool>,
}

/// Response for DeleteAuditConfiguration (empty on success)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAuditConfigurationResponse {}

/// Client for the audit service
#[derive(Debug, Clone)]
pub struct AuditClient {
    http: Arc<HttpClient>,
}

impl AuditClient {
    /// Create a new audit client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Call DeleteAuditConfiguration
    pub async fn delete_audit_configuration(
        &self,
        request: &DeleteAuditConfigurationRequest,
    ) -> Result<DeleteAuditConfigurationResponse> {
        self.http
            .post_json("/v1/audit/DeleteAuditConfiguration", request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = DeleteAuditConfigurationRequest {
            delete_scheduled_audits: Some(true),
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire, json!({"deleteScheduledAudits": true}));

        let empty = DeleteAuditConfigurationRequest::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
    }
}
