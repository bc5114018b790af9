//! # stratus-cli
//!
//! Command-line toolkit for the Stratus control-plane API.
//!
//! Each subcommand maps one API operation 1:1: typed flags mirror the
//! request shape, the command marshals them into a typed request,
//! invokes the service client, auto-paginates where applicable, and
//! emits the response (or a selected field of it) to stdout.
//!
//! ## Features
//!
//! - **Auto-pagination**: cursor-driven iteration with an optional item
//!   budget and a single-page mode
//! - **Typed operations**: request/response records per operation, no
//!   runtime reflection
//! - **Confirmation gating**: mutating commands prompt before any
//!   request is issued
//! - **Profiles**: endpoint, credentials and transport settings from a
//!   YAML file, overridable by environment and flags
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stratus_cli::paginate::{Pager, PagerConfig};
//! use stratus_cli::services::backup::{BackupClient, ListRestoreJobsRequest};
//!
//! # async fn example(client: BackupClient) -> stratus_cli::Result<()> {
//! let fetcher = client.list_restore_jobs_pages(ListRestoreJobsRequest::default());
//! let config = PagerConfig::new(1000).with_max_items(Some(200));
//! let result = Pager::new(fetcher, config).run().await?;
//! for job in &result.items {
//!     println!("{}", job.restore_job_id);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request authentication
pub mod auth;

/// Profile configuration
pub mod config;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Cursor-based auto-pagination
pub mod paginate;

/// Confirmation gating for mutating operations
pub mod confirm;

/// Output rendering
pub mod output;

/// Typed service clients
pub mod services;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
