//! MCP tool implementations.
//!
//! This module contains all tools exposed by the perf-plugin server.

pub mod cache_ops;
pub mod optimize_query;

pub use cache_ops::{CacheOpsParams, cache_ops_impl};
pub use optimize_query::{OptimizeQueryParams, optimize_query_impl};
