//! HTTP transport for service operations
//!
//! The client underneath every service call. Handles:
//! - Automatic retries with configurable backoff
//! - Rate limiting to stay under API throttling limits
//! - Decoding the service error envelope into typed errors
//!
//! Timeouts and retry policy live here; the pagination loop above
//! never retries.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
