//! Per-field merge strategies.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Binary combinator applied to `(current, update)` when both sides supply a
/// field.
pub type MergeFn = dyn Fn(&Value, &Value) -> Value + Send + Sync;

/// Table of merge strategies keyed by field name.
///
/// The table is flat: a strategy registered for `"tags"` applies to every
/// field named `tags`, whatever its depth in the merged mapping.
///
/// # Examples
///
/// ```
/// use fuso::merge::MergeFunctions;
/// use serde_json::{Value, json};
///
/// let functions = MergeFunctions::new().with("total", |current, update| {
///     json!(current.as_i64().unwrap_or(0) + update.as_i64().unwrap_or(0))
/// });
/// let add = functions.get("total").expect("registered above");
/// assert_eq!(add(&json!(1), &json!(2)), json!(3));
/// assert!(functions.get("other").is_none());
/// ```
#[derive(Clone, Default)]
pub struct MergeFunctions {
    functions: HashMap<String, Arc<MergeFn>>,
}

impl MergeFunctions {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` for `field`, returning the updated table.
    #[must_use]
    pub fn with<F>(mut self, field: impl Into<String>, function: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.insert(field, function);
        self
    }

    /// Register `function` for `field`, replacing any earlier strategy.
    pub fn insert<F>(&mut self, field: impl Into<String>, function: F)
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.functions.insert(field.into(), Arc::new(function));
    }

    /// Strategy registered for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&MergeFn> {
        self.functions.get(field).map(|function| &**function)
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` when no strategy is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for MergeFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&String> = self.functions.keys().collect();
        fields.sort();
        f.debug_struct("MergeFunctions")
            .field("fields", &fields)
            .finish()
    }
}
