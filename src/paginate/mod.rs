//! Cursor-based auto-pagination
//!
//! Drives repeated calls against a paged operation until the service
//! stops returning a continuation token, an item budget is exhausted,
//! or the caller asked for a single page only.
//!
//! # Overview
//!
//! The paginate module provides:
//! - `PageFetcher` / `PagedResponse` - the seam between the loop and a
//!   typed service operation
//! - `PagerConfig` - budget, starting token and manual-paging settings
//! - `Pager` - the loop itself, exposed as a lazy stream of pages or
//!   items, or collected into a `Paged` result
//!
//! The pager never retries; retry and backoff belong to the HTTP
//! client underneath the fetcher.

mod pager;
mod types;

pub use pager::Pager;
pub use types::{Page, PageOutput, PageRequest, Paged, PagedResponse, PageFetcher, PagerConfig};

#[cfg(test)]
mod tests;
