//! Validated `cache_ops` requests and their responses.

use serde::Serialize;
use serde_json::Value;

use super::store::KeyValueCache;
use crate::Error;

/// A parsed cache request.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
}

impl CacheOp {
    /// Validate raw request fields.
    ///
    /// Fields arrive as untyped JSON so that missing or mistyped arguments
    /// surface as `InvalidArgument` instead of a deserialization failure.
    /// The operation name is checked before any other argument, so an unknown
    /// operation is reported as such even when the key is missing too.
    /// A `set` without a value stores JSON `null`.
    pub fn parse(operation: Option<Value>, key: Option<Value>, value: Option<Value>) -> Result<Self, Error> {
        let operation = match operation {
            None | Some(Value::Null) => return Err(Error::InvalidArgument("operation is required".into())),
            Some(Value::String(operation)) => operation,
            Some(_) => return Err(Error::InvalidArgument("operation must be a string".into())),
        };

        let require_key = |key: Option<Value>| match key {
            None | Some(Value::Null) => Err(Error::InvalidArgument(format!("key is required for '{operation}'"))),
            Some(Value::String(key)) => Ok(key),
            Some(_) => Err(Error::InvalidArgument("key must be a string".into())),
        };

        match operation.as_str() {
            "set" => Ok(CacheOp::Set { key: require_key(key)?, value: value.unwrap_or(Value::Null) }),
            "get" => Ok(CacheOp::Get { key: require_key(key)? }),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }

    /// Operation name as the host spells it.
    pub fn name(&self) -> &'static str {
        match self {
            CacheOp::Set { .. } => "set",
            CacheOp::Get { .. } => "get",
        }
    }
}

/// Response body for a cache operation.
///
/// An absent key serializes with `found: false` and no `value` field,
/// which keeps it distinct from a stored `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CacheResponse {
    Set {
        success: bool,
    },
    Get {
        key: String,
        found: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stored_at: Option<String>,
    },
}

impl KeyValueCache {
    /// Execute a parsed request against the cache.
    pub fn apply(&self, op: CacheOp) -> CacheResponse {
        let operation = op.name();
        match op {
            CacheOp::Set { key, value } => {
                let replaced = self.set(key.as_str(), value).is_some();
                tracing::debug!(operation, key = %key, replaced, entries = self.len(), "cache set");
                CacheResponse::Set { success: true }
            }
            CacheOp::Get { key } => {
                let entry = self.get(&key);
                tracing::debug!(operation, key = %key, found = entry.is_some(), "cache get");
                match entry {
                    Some(entry) => CacheResponse::Get {
                        key,
                        found: true,
                        value: Some(entry.value),
                        stored_at: Some(entry.stored_at),
                    },
                    None => CacheResponse::Get { key, found: false, value: None, stored_at: None },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_set() {
        let op = CacheOp::parse(Some(json!("set")), Some(json!("a")), Some(json!(1))).unwrap();
        assert_eq!(op, CacheOp::Set { key: "a".into(), value: json!(1) });
        assert_eq!(op.name(), "set");
    }

    #[test]
    fn test_parse_set_without_value_stores_null() {
        let op = CacheOp::parse(Some(json!("set")), Some(json!("a")), None).unwrap();
        assert_eq!(op, CacheOp::Set { key: "a".into(), value: Value::Null });
    }

    #[test]
    fn test_parse_missing_key() {
        let err = CacheOp::parse(Some(json!("get")), None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("'get'")));
    }

    #[test]
    fn test_parse_missing_operation() {
        let err = CacheOp::parse(None, Some(json!("a")), None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg == "operation is required"));
    }

    #[test]
    fn test_parse_non_string_operation() {
        let err = CacheOp::parse(Some(json!(["get"])), Some(json!("a")), None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg == "operation must be a string"));
    }

    #[test]
    fn test_parse_non_string_key() {
        let err = CacheOp::parse(Some(json!("get")), Some(json!(7)), None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg == "key must be a string"));
    }

    #[test]
    fn test_parse_unknown_operation_checked_first() {
        let err = CacheOp::parse(Some(json!("frobnicate")), Some(json!(7)), None).unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(op) if op == "frobnicate"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = CacheOp::parse(Some(json!("SET")), Some(json!("a")), None);
        assert!(matches!(result, Err(Error::UnknownOperation(_))));
    }

    #[test]
    fn test_apply_scenario() {
        let cache = KeyValueCache::new();

        let set = cache.apply(CacheOp::Set { key: "a".into(), value: json!(1) });
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({"success": true}));

        let got = serde_json::to_value(cache.apply(CacheOp::Get { key: "a".into() })).unwrap();
        assert_eq!(got["found"], true);
        assert_eq!(got["value"], 1);

        cache.apply(CacheOp::Set { key: "a".into(), value: json!(2) });
        let got = serde_json::to_value(cache.apply(CacheOp::Get { key: "a".into() })).unwrap();
        assert_eq!(got["value"], 2);

        let missing = serde_json::to_value(cache.apply(CacheOp::Get { key: "b".into() })).unwrap();
        assert_eq!(missing, json!({"key": "b", "found": false}));
    }

    #[test]
    fn test_stored_null_is_distinct_from_absent() {
        let cache = KeyValueCache::new();
        cache.apply(CacheOp::Set { key: "n".into(), value: Value::Null });

        let got = serde_json::to_value(cache.apply(CacheOp::Get { key: "n".into() })).unwrap();
        assert_eq!(got["found"], true);
        assert!(got.as_object().unwrap().contains_key("value"));
        assert!(got["value"].is_null());
    }
}
