//! Typed service clients
//!
//! One sub-module per control-plane service. Each operation is a typed
//! request/response pair POSTed to `/v1/{service}/{Operation}`; the
//! records mirror the wire shape (camelCase fields, optional fields
//! omitted when unset). Requests are created, populated from caller
//! options, sent, and discarded. Paginated operations additionally
//! implement `PageFetcher` so the auto-pagination loop can drive them.

pub mod audit;
pub mod backup;
pub mod compute;
pub mod secrets;
pub mod sessions;
pub mod streams;
pub mod translate;
