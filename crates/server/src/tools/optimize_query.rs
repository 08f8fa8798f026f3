//! optimize_query tool implementation.
//!
//! Passthrough only: the query is returned unchanged as its own optimized form.
//! No rewriting is performed and no gain is reported.

use perf_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the optimize_query tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptimizeQueryParams {
    /// The SQL query text.
    pub query: String,
}

/// Output from the optimize_query tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptimizeQueryOutput {
    pub original: String,
    pub optimized: String,
}

/// Implementation of the optimize_query tool.
pub async fn optimize_query_impl(params: OptimizeQueryParams) -> Result<CallToolResult, McpError> {
    if params.query.trim().is_empty() {
        let err = Error::InvalidArgument("query cannot be empty".into());
        let json = serde_json::to_string_pretty(&err.to_payload()).map_err(Error::from)?;
        return Ok(CallToolResult::error(vec![Content::text(json)]));
    }

    tracing::debug!(len = params.query.len(), "optimize_query passthrough");

    let query = params.query;
    let output = OptimizeQueryOutput { original: query.clone(), optimized: query };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
