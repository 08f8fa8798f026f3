//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{CacheOpsParams, OptimizeQueryParams, cache_ops_impl, optimize_query_impl};

use perf_core::{AppConfig, KeyValueCache};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for perf-plugin.
///
/// Clones share one cache, so every concurrent tool call sees the same entries.
#[derive(Clone)]
pub struct PerfPluginServer {
    cache: KeyValueCache,
    server_name: String,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
#[tool_router]
impl PerfPluginServer {
    /// Create a new server handler with an empty cache.
    pub fn new(config: &AppConfig) -> Self {
        Self { cache: KeyValueCache::new(), server_name: config.server_name.clone(), tool_router: Self::tool_router() }
    }

    /// Set or get a value in the shared in-memory cache.
    #[tool(description = "In-memory key/value cache. operation \"set\" stores value under key (overwriting); \
                          operation \"get\" returns {found, value} for key.")]
    async fn cache_ops(&self, params: Parameters<CacheOpsParams>) -> Result<CallToolResult, McpError> {
        cache_ops_impl(&self.cache, params.0).await
    }

    /// Return the query unchanged.
    #[tool(description = "Query optimization passthrough. Returns the query unchanged as both original and optimized.")]
    async fn optimize_query(&self, params: Parameters<OptimizeQueryParams>) -> Result<CallToolResult, McpError> {
        optimize_query_impl(params.0).await
    }
}

impl ServerHandler for PerfPluginServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registers_both_tools() {
        let server = PerfPluginServer::new(&AppConfig::default());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["cache_ops", "optimize_query"]);
    }

    #[test]
    fn test_server_info_uses_configured_name() {
        let config = AppConfig { server_name: "cache-plugin".into(), ..Default::default() };
        let info = PerfPluginServer::new(&config).get_info();
        assert_eq!(info.server_info.name, "cache-plugin");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let server = PerfPluginServer::new(&AppConfig::default());
        let other = server.clone();

        let set = CacheOpsParams { operation: Some(json!("set")), key: Some(json!("a")), value: Some(json!(1)) };
        other.cache_ops(Parameters(set)).await.unwrap();

        assert_eq!(server.cache.get("a").unwrap().value, json!(1));
    }
}
