//! Shared helpers for integration tests.

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};

/// Convert a `json!` literal into a mapping.
pub fn object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(mapping) => Ok(mapping),
        other => Err(anyhow!("expected object fixture, got {other}")),
    }
}
