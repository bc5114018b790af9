//! Pagination types and traits
//!
//! Defines the seam between the auto-pagination loop and the typed
//! service operations that feed it.

use crate::error::Result;
use async_trait::async_trait;

/// Request for a single page of results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token from the previous page, if any
    pub token: Option<String>,
    /// Page size hint forwarded to the service
    pub page_size: Option<u32>,
}

impl PageRequest {
    /// Create a page request with a continuation token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            page_size: None,
        }
    }
}

/// A plain page of items, for fetchers without a richer response type
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
    /// Items in this page
    pub items: Vec<T>,
    /// Continuation token for the next page, if any
    pub next_token: Option<String>,
}

impl<T: Clone + std::fmt::Debug> PagedResponse for Page<T> {
    type Item = T;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

/// A typed service response carrying a page of items
///
/// Responses stay opaque to the loop apart from their collection field
/// and continuation token.
pub trait PagedResponse {
    /// The item type carried in the collection field
    type Item: Clone + std::fmt::Debug;

    /// Continuation token for the next page, if any
    fn next_token(&self) -> Option<&str>;

    /// The items received in this page
    fn items(&self) -> &[Self::Item];
}

/// Capability to fetch one page of results
///
/// Implemented by each paginated service operation. All failures
/// surface here; the pager itself never retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Response type returned by the operation
    type Response: PagedResponse + Send;

    /// Fetch a single page
    async fn fetch_page(&self, request: PageRequest) -> Result<Self::Response>;
}

/// Configuration for the auto-pagination loop
#[derive(Debug, Clone)]
pub struct PagerConfig {
    /// Continuation token to resume from
    pub starting_token: Option<String>,
    /// Cap on total items emitted across all pages
    pub max_items: Option<usize>,
    /// Caller-provided page size hint, used when no budget is set
    pub page_size: Option<u32>,
    /// Largest page size the service accepts for this operation
    pub server_page_max: u32,
    /// Fetch exactly one page and stop
    pub manual: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            starting_token: None,
            max_items: None,
            page_size: None,
            server_page_max: 100,
            manual: false,
        }
    }
}

impl PagerConfig {
    /// Create a config for an operation with the given maximum page size
    pub fn new(server_page_max: u32) -> Self {
        Self {
            server_page_max,
            ..Default::default()
        }
    }

    /// Resume from a continuation token
    #[must_use]
    pub fn with_starting_token(mut self, token: Option<String>) -> Self {
        self.starting_token = token;
        self
    }

    /// Cap the total number of items emitted
    #[must_use]
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.max_items = max_items;
        self
    }

    /// Hint the per-call page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetch a single page instead of auto-iterating
    #[must_use]
    pub fn with_manual_paging(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }
}

/// One page produced by the loop
#[derive(Debug)]
pub struct PageOutput<R: PagedResponse> {
    /// Items emitted for this page, already capped to the remaining budget
    pub items: Vec<R::Item>,
    /// Continuation token returned by this page
    pub next_token: Option<String>,
    /// The full service response
    pub response: R,
}

/// Collected result of a pagination run
#[derive(Debug)]
pub struct Paged<R: PagedResponse> {
    /// All emitted items, in page order
    pub items: Vec<R::Item>,
    /// Every service response received
    pub responses: Vec<R>,
    /// Token to resume from, if the result is partial
    pub next_token: Option<String>,
}

impl<R: PagedResponse> Paged<R> {
    /// Number of pages fetched
    pub fn page_count(&self) -> usize {
        self.responses.len()
    }
}
