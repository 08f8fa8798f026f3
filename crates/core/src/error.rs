//! Unified error types for perf-plugin.
//!
//! Caller mistakes are rendered as data payloads for the host; only
//! internal failures become JSON-RPC errors.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use serde_json::{Value, json};

/// Unified error types for the perf-plugin server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed tool arguments.
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),

    /// Operation name not recognized by `cache_ops`.
    #[error("UNKNOWN_OPERATION: {0}")]
    UnknownOperation(String),

    /// A response could not be encoded.
    #[error("SERIALIZATION_FAILED: {0}")]
    Serialization(String),
}

impl Error {
    /// Render the error as the payload returned to the host.
    pub fn to_payload(&self) -> Value {
        match self {
            Error::InvalidArgument(msg) => json!({ "error": "invalid argument", "message": msg }),
            Error::UnknownOperation(op) => json!({ "error": "unknown operation", "operation": op }),
            Error::Serialization(msg) => json!({ "error": "serialization failed", "message": msg }),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidArgument(msg) => (-32602, msg.clone()),
            Error::UnknownOperation(op) => (-32601, format!("unknown operation: {op}")),
            Error::Serialization(msg) => (-32603, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: Some(err.to_payload()) }
    }
}
