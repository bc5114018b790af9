//! CLI commands and argument parsing

use crate::output::OutputFormat;
use crate::paginate::PagerConfig;
use crate::services::sessions::IdentityType;
use crate::services::streams::ScalingType;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stratus control-plane CLI
#[derive(Parser, Debug)]
#[command(name = "stratus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API endpoint (overrides the profile and STRATUS_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Profile file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level service groups
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Backup service
    #[command(subcommand)]
    Backup(BackupCommand),

    /// Compute service
    #[command(subcommand)]
    Compute(ComputeCommand),

    /// Studio sessions service
    #[command(subcommand)]
    Sessions(SessionsCommand),

    /// Data streams service
    #[command(subcommand)]
    Streams(StreamsCommand),

    /// Secrets service
    #[command(subcommand)]
    Secrets(SecretsCommand),

    /// Audit service
    #[command(subcommand)]
    Audit(AuditCommand),

    /// Translation service
    #[command(subcommand)]
    Translate(TranslateCommand),
}

// ============================================================================
// Shared paging flags
// ============================================================================

/// Flags shared by every paginated operation
#[derive(Args, Debug, Clone, Default)]
pub struct PagingArgs {
    /// Cap on total items returned across all pages
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Continuation token to resume from
    #[arg(long)]
    pub starting_token: Option<String>,

    /// Page size hint for each service call
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Fetch a single page instead of auto-iterating
    #[arg(long)]
    pub no_paginate: bool,
}

impl PagingArgs {
    /// Build the pager configuration for an operation
    pub fn pager_config(&self, server_page_max: u32) -> PagerConfig {
        PagerConfig::new(server_page_max)
            .with_starting_token(self.starting_token.clone())
            .with_max_items(self.max_items)
            .with_page_size(self.page_size)
            .with_manual_paging(self.no_paginate)
    }
}

// ============================================================================
// Backup
// ============================================================================

/// Backup operations
#[derive(Subcommand, Debug)]
pub enum BackupCommand {
    /// List restore jobs, with optional filters
    ListRestoreJobs(ListRestoreJobsArgs),
}

/// Arguments for `backup list-restore-jobs`
#[derive(Args, Debug)]
pub struct ListRestoreJobsArgs {
    /// Only jobs belonging to this account
    #[arg(long)]
    pub by_account_id: Option<String>,

    /// Only jobs in this status
    #[arg(long)]
    pub by_status: Option<String>,

    /// Only jobs created after this instant (RFC 3339)
    #[arg(long)]
    pub by_created_after: Option<DateTime<Utc>>,

    /// Only jobs created before this instant (RFC 3339)
    #[arg(long)]
    pub by_created_before: Option<DateTime<Utc>>,

    /// Only jobs completed after this instant (RFC 3339)
    #[arg(long)]
    pub by_complete_after: Option<DateTime<Utc>>,

    /// Only jobs completed before this instant (RFC 3339)
    #[arg(long)]
    pub by_complete_before: Option<DateTime<Utc>>,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = RestoreJobsSelect::RestoreJobs)]
    pub select: RestoreJobsSelect,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Projections for `backup list-restore-jobs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RestoreJobsSelect {
    /// The restore jobs themselves
    RestoreJobs,
    /// The final continuation token
    NextToken,
    /// Each full service response
    Whole,
}

// ============================================================================
// Compute
// ============================================================================

/// Compute operations
#[derive(Subcommand, Debug)]
pub enum ComputeCommand {
    /// List instance types matching a set of hardware requirements
    MatchInstanceTypes(MatchInstanceTypesArgs),
}

/// Arguments for `compute match-instance-types`
///
/// The nested requirements structure is flattened into prefixed flags.
#[derive(Args, Debug)]
pub struct MatchInstanceTypesArgs {
    /// Minimum number of virtual CPUs
    #[arg(long)]
    pub vcpu_min: Option<u32>,

    /// Maximum number of virtual CPUs
    #[arg(long)]
    pub vcpu_max: Option<u32>,

    /// Minimum memory, in MiB
    #[arg(long)]
    pub memory_min: Option<u32>,

    /// Maximum memory, in MiB
    #[arg(long)]
    pub memory_max: Option<u32>,

    /// Acceptable CPU architecture (repeatable)
    #[arg(long = "architecture")]
    pub architectures: Vec<String>,

    /// Acceptable virtualization type (repeatable)
    #[arg(long = "virtualization-type")]
    pub virtualization_types: Vec<String>,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = InstanceTypesSelect::InstanceTypes)]
    pub select: InstanceTypesSelect,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Projections for `compute match-instance-types`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstanceTypesSelect {
    /// The matching instance types
    InstanceTypes,
    /// The final continuation token
    NextToken,
    /// Each full service response
    Whole,
}

// ============================================================================
// Sessions
// ============================================================================

/// Studio session operations
#[derive(Subcommand, Debug)]
pub enum SessionsCommand {
    /// List streaming sessions in a studio
    ListStreamingSessions(ListStreamingSessionsArgs),

    /// Map a user or group to a session access policy
    CreateSessionMapping(CreateSessionMappingArgs),
}

/// Arguments for `sessions list-streaming-sessions`
#[derive(Args, Debug)]
pub struct ListStreamingSessionsArgs {
    /// The studio to list sessions for
    #[arg(long)]
    pub studio_id: String,

    /// Only sessions created by this principal
    #[arg(long)]
    pub created_by: Option<String>,

    /// Only sessions owned by this principal
    #[arg(long)]
    pub owned_by: Option<String>,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = StreamingSessionsSelect::Sessions)]
    pub select: StreamingSessionsSelect,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Projections for `sessions list-streaming-sessions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StreamingSessionsSelect {
    /// The sessions themselves
    Sessions,
    /// The final continuation token
    NextToken,
    /// Each full service response
    Whole,
}

/// Arguments for `sessions create-session-mapping`
#[derive(Args, Debug)]
pub struct CreateSessionMappingArgs {
    /// The studio the mapping belongs to
    #[arg(long)]
    pub studio_id: String,

    /// Name of the user or group
    #[arg(long)]
    pub identity_name: String,

    /// Whether the identity is a user or a group
    #[arg(long, value_enum)]
    pub identity_type: IdentityType,

    /// Access policy applied to the identity's sessions
    #[arg(long)]
    pub session_policy: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Streams
// ============================================================================

/// Data stream operations
#[derive(Subcommand, Debug)]
pub enum StreamsCommand {
    /// Change the shard count of a stream
    UpdateShardCount(UpdateShardCountArgs),
}

/// Arguments for `streams update-shard-count`
#[derive(Args, Debug)]
pub struct UpdateShardCountArgs {
    /// The stream to scale
    #[arg(long)]
    pub stream_name: String,

    /// Desired number of shards
    #[arg(long)]
    pub target_shard_count: u32,

    /// Scaling strategy
    #[arg(long, value_enum, default_value_t = ScalingType::UniformScaling)]
    pub scaling_type: ScalingType,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = ShardCountSelect::Whole)]
    pub select: ShardCountSelect,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Projections for `streams update-shard-count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShardCountSelect {
    /// The full service response
    Whole,
    /// The stream name
    StreamName,
    /// The shard count before the update
    CurrentShardCount,
    /// The requested shard count
    TargetShardCount,
}

// ============================================================================
// Secrets
// ============================================================================

/// Secret operations
#[derive(Subcommand, Debug)]
pub enum SecretsCommand {
    /// Update a secret's value or metadata
    UpdateSecret(UpdateSecretArgs),
}

/// Arguments for `secrets update-secret`
#[derive(Args, Debug)]
pub struct UpdateSecretArgs {
    /// Name or identifier of the secret
    #[arg(long)]
    pub secret_id: String,

    /// Replacement secret value
    #[arg(long)]
    pub secret_string: Option<String>,

    /// Replacement description
    #[arg(long)]
    pub description: Option<String>,

    /// Key used to encrypt the new version
    #[arg(long)]
    pub kms_key_id: Option<String>,

    /// Idempotency token
    #[arg(long)]
    pub client_request_token: Option<String>,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = UpdateSecretSelect::Whole)]
    pub select: UpdateSecretSelect,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Projections for `secrets update-secret`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UpdateSecretSelect {
    /// The full service response
    Whole,
    /// The secret's resource name
    Arn,
    /// The secret's friendly name
    Name,
    /// The new version identifier
    VersionId,
}

// ============================================================================
// Audit
// ============================================================================

/// Audit operations
#[derive(Subcommand, Debug)]
pub enum AuditCommand {
    /// Restore the account audit configuration to its defaults
    DeleteAuditConfiguration(DeleteAuditConfigurationArgs),
}

/// Arguments for `audit delete-audit-configuration`
#[derive(Args, Debug)]
pub struct DeleteAuditConfigurationArgs {
    /// Also delete any scheduled audits
    #[arg(long)]
    pub delete_scheduled_audits: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Translate
// ============================================================================

/// Translation operations
#[derive(Subcommand, Debug)]
pub enum TranslateCommand {
    /// Start an asynchronous batch translation job
    StartTranslationJob(StartTranslationJobArgs),
}

/// Arguments for `translate start-translation-job`
///
/// Input and output locations are nested structures on the wire,
/// flattened here into prefixed flags.
#[derive(Args, Debug)]
pub struct StartTranslationJobArgs {
    /// Name shown in job listings
    #[arg(long)]
    pub job_name: Option<String>,

    /// Language of the input documents
    #[arg(long)]
    pub source_language: String,

    /// Language to translate into (repeatable)
    #[arg(long = "target-language", required = true)]
    pub target_languages: Vec<String>,

    /// URI of the input folder
    #[arg(long)]
    pub input_uri: String,

    /// MIME type of the input documents
    #[arg(long, default_value = "text/plain")]
    pub content_type: String,

    /// URI of the output folder
    #[arg(long)]
    pub output_uri: String,

    /// Role the service assumes to read input and write output
    #[arg(long)]
    pub data_access_role: String,

    /// Idempotency token
    #[arg(long)]
    pub client_token: Option<String>,

    /// Response field to emit
    #[arg(long, value_enum, default_value_t = TranslationJobSelect::Whole)]
    pub select: TranslationJobSelect,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Projections for `translate start-translation-job`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TranslationJobSelect {
    /// The full service response
    Whole,
    /// The job identifier
    JobId,
    /// The job status
    JobStatus,
}
