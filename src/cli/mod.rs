//! Command-line interface
//!
//! One subcommand per service operation; flags mirror the request
//! fields 1:1, with the shared paging flags flattened into every
//! paginated command.

mod commands;
mod runner;

pub use commands::{Cli, Commands, PagingArgs};
pub use runner::Runner;
