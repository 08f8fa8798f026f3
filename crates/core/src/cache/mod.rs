//! In-memory key/value cache shared by every tool invocation.
//!
//! This module provides:
//!
//! - A lock-guarded map from string keys to opaque JSON values
//! - Strict overwrite-on-set semantics
//! - The validated request model behind the `cache_ops` tool

pub mod ops;
pub mod store;

pub use crate::Error;

pub use ops::{CacheOp, CacheResponse};
pub use store::{CacheEntry, KeyValueCache};
