//! Core types and shared functionality for perf-plugin.
//!
//! This crate provides:
//! - In-memory key/value cache and its request model
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, CacheOp, CacheResponse, KeyValueCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
