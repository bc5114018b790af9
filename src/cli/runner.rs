//! CLI runner - executes commands

use crate::cli::commands::{
    AuditCommand, BackupCommand, Cli, Commands, ComputeCommand, CreateSessionMappingArgs,
    DeleteAuditConfigurationArgs, InstanceTypesSelect, ListRestoreJobsArgs,
    ListStreamingSessionsArgs, MatchInstanceTypesArgs, RestoreJobsSelect, SecretsCommand,
    SessionsCommand, ShardCountSelect, StartTranslationJobArgs, StreamingSessionsSelect,
    StreamsCommand, TranslateCommand, TranslationJobSelect, UpdateSecretArgs, UpdateSecretSelect,
    UpdateShardCountArgs,
};
use crate::config::Profile;
use crate::confirm;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output;
use crate::paginate::{Paged, PagedResponse, Pager};
use crate::services::audit::{AuditClient, DeleteAuditConfigurationRequest};
use crate::services::backup::{BackupClient, ListRestoreJobsRequest, LIST_RESTORE_JOBS_PAGE_MAX};
use crate::services::compute::{
    ComputeClient, InstanceRequirements, MatchInstanceTypesRequest, RangeRequirement,
    MATCH_INSTANCE_TYPES_PAGE_MAX,
};
use crate::services::secrets::{SecretsClient, UpdateSecretRequest};
use crate::services::sessions::{
    CreateSessionMappingRequest, ListStreamingSessionsRequest, SessionsClient,
    LIST_STREAMING_SESSIONS_PAGE_MAX,
};
use crate::services::streams::{StreamsClient, UpdateShardCountRequest};
use crate::services::translate::{
    InputDataConfig, OutputDataConfig, StartTranslationJobRequest, TranslateClient,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// How a paginated result is projected to the output pipeline
enum ListProjection {
    /// The concatenated items
    Items,
    /// The final continuation token
    NextToken,
    /// Each full service response
    Whole,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Backup(BackupCommand::ListRestoreJobs(args)) => {
                self.backup_list_restore_jobs(args).await
            }
            Commands::Compute(ComputeCommand::MatchInstanceTypes(args)) => {
                self.compute_match_instance_types(args).await
            }
            Commands::Sessions(SessionsCommand::ListStreamingSessions(args)) => {
                self.sessions_list_streaming_sessions(args).await
            }
            Commands::Sessions(SessionsCommand::CreateSessionMapping(args)) => {
                self.sessions_create_session_mapping(args).await
            }
            Commands::Streams(StreamsCommand::UpdateShardCount(args)) => {
                self.streams_update_shard_count(args).await
            }
            Commands::Secrets(SecretsCommand::UpdateSecret(args)) => {
                self.secrets_update_secret(args).await
            }
            Commands::Audit(AuditCommand::DeleteAuditConfiguration(args)) => {
                self.audit_delete_audit_configuration(args).await
            }
            Commands::Translate(TranslateCommand::StartTranslationJob(args)) => {
                self.translate_start_translation_job(args).await
            }
        }
    }

    /// Load the profile, folding in environment overrides
    fn load_profile(&self) -> Result<Profile> {
        let mut profile = match &self.cli.config {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };
        profile.apply_env();
        Ok(profile)
    }

    /// Build the shared HTTP client from the profile
    fn http_client(&self) -> Result<Arc<HttpClient>> {
        let profile = self.load_profile()?;
        let endpoint = profile.resolve_endpoint(self.cli.endpoint.as_deref())?;
        debug!("using endpoint {endpoint}");
        let config = profile.client_config(&endpoint);
        Ok(Arc::new(HttpClient::with_auth(
            config,
            profile.authenticator(),
        )))
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn emit_value<T: Serialize>(&self, value: &T) -> Result<()> {
        output::write_value(self.cli.format, &serde_json::to_value(value)?)
    }

    fn emit_items<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let values = items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        output::write_items(self.cli.format, &values)
    }

    fn emit_paged<R>(&self, result: &Paged<R>, projection: &ListProjection) -> Result<()>
    where
        R: PagedResponse + Serialize,
        R::Item: Serialize,
    {
        match projection {
            ListProjection::Items => self.emit_items(&result.items),
            ListProjection::NextToken => self.emit_value(&result.next_token),
            ListProjection::Whole => self.emit_items(&result.responses),
        }
    }

    // ========================================================================
    // Backup
    // ========================================================================

    async fn backup_list_restore_jobs(&self, args: &ListRestoreJobsArgs) -> Result<()> {
        let client = BackupClient::new(self.http_client()?);

        let request = ListRestoreJobsRequest {
            by_account_id: args.by_account_id.clone(),
            by_status: args.by_status.clone(),
            by_created_after: args.by_created_after,
            by_created_before: args.by_created_before,
            by_complete_after: args.by_complete_after,
            by_complete_before: args.by_complete_before,
            ..Default::default()
        };

        let pager = Pager::new(
            client.list_restore_jobs_pages(request),
            args.paging.pager_config(LIST_RESTORE_JOBS_PAGE_MAX),
        );
        let result = pager.run().await?;

        let projection = match args.select {
            RestoreJobsSelect::RestoreJobs => ListProjection::Items,
            RestoreJobsSelect::NextToken => ListProjection::NextToken,
            RestoreJobsSelect::Whole => ListProjection::Whole,
        };
        self.emit_paged(&result, &projection)
    }

    // ========================================================================
    // Compute
    // ========================================================================

    async fn compute_match_instance_types(&self, args: &MatchInstanceTypesArgs) -> Result<()> {
        if let (Some(min), Some(max)) = (args.vcpu_min, args.vcpu_max) {
            if min > max {
                return Err(Error::invalid_parameter("vcpu-min", "exceeds --vcpu-max"));
            }
        }
        if let (Some(min), Some(max)) = (args.memory_min, args.memory_max) {
            if min > max {
                return Err(Error::invalid_parameter("memory-min", "exceeds --memory-max"));
            }
        }

        let client = ComputeClient::new(self.http_client()?);

        let request = MatchInstanceTypesRequest {
            requirements: InstanceRequirements {
                vcpu_count: RangeRequirement::new(args.vcpu_min, args.vcpu_max),
                memory_mib: RangeRequirement::new(args.memory_min, args.memory_max),
                architectures: args.architectures.clone(),
                virtualization_types: args.virtualization_types.clone(),
            },
            ..Default::default()
        };

        let pager = Pager::new(
            client.match_instance_types_pages(request),
            args.paging.pager_config(MATCH_INSTANCE_TYPES_PAGE_MAX),
        );
        let result = pager.run().await?;

        let projection = match args.select {
            InstanceTypesSelect::InstanceTypes => ListProjection::Items,
            InstanceTypesSelect::NextToken => ListProjection::NextToken,
            InstanceTypesSelect::Whole => ListProjection::Whole,
        };
        self.emit_paged(&result, &projection)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    async fn sessions_list_streaming_sessions(
        &self,
        args: &ListStreamingSessionsArgs,
    ) -> Result<()> {
        let client = SessionsClient::new(self.http_client()?);

        let request = ListStreamingSessionsRequest {
            studio_id: args.studio_id.clone(),
            created_by: args.created_by.clone(),
            owned_by: args.owned_by.clone(),
            ..Default::default()
        };

        let pager = Pager::new(
            client.list_streaming_sessions_pages(request),
            args.paging.pager_config(LIST_STREAMING_SESSIONS_PAGE_MAX),
        );
        let result = pager.run().await?;

        let projection = match args.select {
            StreamingSessionsSelect::Sessions => ListProjection::Items,
            StreamingSessionsSelect::NextToken => ListProjection::NextToken,
            StreamingSessionsSelect::Whole => ListProjection::Whole,
        };
        self.emit_paged(&result, &projection)
    }

    async fn sessions_create_session_mapping(
        &self,
        args: &CreateSessionMappingArgs,
    ) -> Result<()> {
        let target = confirm::describe_target(&[
            ("studio-id", &args.studio_id),
            ("identity-name", &args.identity_name),
        ]);
        if !confirm::confirm_proceed(args.force, &target, "sessions create-session-mapping")? {
            return Ok(());
        }

        let client = SessionsClient::new(self.http_client()?);
        let request = CreateSessionMappingRequest {
            studio_id: args.studio_id.clone(),
            identity_name: args.identity_name.clone(),
            identity_type: args.identity_type,
            session_policy: args.session_policy.clone(),
        };

        let response = client.create_session_mapping(&request).await?;
        self.emit_value(&response)
    }

    // ========================================================================
    // Streams
    // ========================================================================

    async fn streams_update_shard_count(&self, args: &UpdateShardCountArgs) -> Result<()> {
        if args.target_shard_count == 0 {
            return Err(Error::invalid_parameter(
                "target-shard-count",
                "must be at least 1",
            ));
        }

        let target = confirm::describe_target(&[
            ("stream-name", &args.stream_name),
            ("target-shard-count", &args.target_shard_count.to_string()),
        ]);
        if !confirm::confirm_proceed(args.force, &target, "streams update-shard-count")? {
            return Ok(());
        }

        let client = StreamsClient::new(self.http_client()?);
        let request = UpdateShardCountRequest {
            stream_name: args.stream_name.clone(),
            target_shard_count: args.target_shard_count,
            scaling_type: args.scaling_type,
        };

        let response = client.update_shard_count(&request).await?;
        match args.select {
            ShardCountSelect::Whole => self.emit_value(&response),
            ShardCountSelect::StreamName => self.emit_value(&response.stream_name),
            ShardCountSelect::CurrentShardCount => self.emit_value(&response.current_shard_count),
            ShardCountSelect::TargetShardCount => self.emit_value(&response.target_shard_count),
        }
    }

    // ========================================================================
    // Secrets
    // ========================================================================

    async fn secrets_update_secret(&self, args: &UpdateSecretArgs) -> Result<()> {
        if !confirm::confirm_proceed(
            args.force,
            &confirm::describe_target(&[("secret-id", &args.secret_id)]),
            "secrets update-secret",
        )? {
            return Ok(());
        }

        let client = SecretsClient::new(self.http_client()?);
        let request = UpdateSecretRequest {
            secret_id: args.secret_id.clone(),
            client_request_token: args.client_request_token.clone(),
            description: args.description.clone(),
            kms_key_id: args.kms_key_id.clone(),
            secret_string: args.secret_string.clone(),
        };

        let response = client.update_secret(&request).await?;
        match args.select {
            UpdateSecretSelect::Whole => self.emit_value(&response),
            UpdateSecretSelect::Arn => self.emit_value(&response.arn),
            UpdateSecretSelect::Name => self.emit_value(&response.name),
            UpdateSecretSelect::VersionId => self.emit_value(&response.version_id),
        }
    }

    // ========================================================================
    // Audit
    // ========================================================================

    async fn audit_delete_audit_configuration(
        &self,
        args: &DeleteAuditConfigurationArgs,
    ) -> Result<()> {
        let target = if args.delete_scheduled_audits {
            confirm::describe_target(&[("delete-scheduled-audits", "true")])
        } else {
            String::new()
        };
        if !confirm::confirm_proceed(args.force, &target, "audit delete-audit-configuration")? {
            return Ok(());
        }

        let client = AuditClient::new(self.http_client()?);
        let request = DeleteAuditConfigurationRequest {
            delete_scheduled_audits: args.delete_scheduled_audits.then_some(true),
        };

        let response = client.delete_audit_configuration(&request).await?;
        self.emit_value(&response)
    }

    // ========================================================================
    // Translate
    // ========================================================================

    async fn translate_start_translation_job(
        &self,
        args: &StartTranslationJobArgs,
    ) -> Result<()> {
        let target = confirm::describe_target(&[
            ("source-language", &args.source_language),
            ("input-uri", &args.input_uri),
        ]);
        if !confirm::confirm_proceed(args.force, &target, "translate start-translation-job")? {
            return Ok(());
        }

        let client = TranslateClient::new(self.http_client()?);
        let request = StartTranslationJobRequest {
            job_name: args.job_name.clone(),
            source_language_code: args.source_language.clone(),
            target_language_codes: args.target_languages.clone(),
            input_data_config: InputDataConfig {
                uri: args.input_uri.clone(),
                content_type: args.content_type.clone(),
            },
            output_data_config: OutputDataConfig {
                uri: args.output_uri.clone(),
            },
            data_access_role: args.data_access_role.clone(),
            client_token: args.client_token.clone(),
        };

        let response = client.start_translation_job(&request).await?;
        match args.select {
            TranslationJobSelect::Whole => self.emit_value(&response),
            TranslationJobSelect::JobId => self.emit_value(&response.job_id),
            TranslationJobSelect::JobStatus => self.emit_value(&response.job_status),
        }
    }
}
