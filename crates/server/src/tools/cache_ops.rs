//! cache_ops tool implementation.
//!
//! Sets or gets a value in the shared in-memory cache. Caller mistakes are
//! reported as an error payload in the tool result, never as a crash.

use perf_core::{CacheOp, Error, KeyValueCache};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the cache_ops tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheOpsParams {
    /// The operation to perform: "set" or "get".
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub operation: Option<Value>,

    /// The cache key. Required for both operations.
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub key: Option<Value>,

    /// Any JSON value to store (set only). Defaults to null.
    #[serde(default)]
    pub value: Option<Value>,
}

/// Implementation of the cache_ops tool.
pub async fn cache_ops_impl(cache: &KeyValueCache, params: CacheOpsParams) -> Result<CallToolResult, McpError> {
    let op = match CacheOp::parse(params.operation, params.key, params.value) {
        Ok(op) => op,
        Err(err) => {
            tracing::warn!(error = %err, "rejected cache request");
            return error_result(&err);
        }
    };

    let response = cache.apply(op);
    let json = serde_json::to_string_pretty(&response).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_result(err: &Error) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(&err.to_payload()).map_err(Error::from)?;
    Ok(CallToolResult::error(vec![Content::text(json)]))
}
