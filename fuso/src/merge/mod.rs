//! Deep and shallow merging of mappings.
//!
//! [`merge()`] combines two mappings recursively: nested mappings merge key by
//! key, while scalars and sequences from the updates replace what was there.
//! A null update never overwrites anything, and a null original accepts any
//! update. [`merge_dict`] is the shallow variant, and
//! [`merge_list_of_dicts_by_key`] merges keyed collections row by row.
//!
//! Per-field strategies, key ordering and a post-processing hook are supplied
//! through [`MergeOptions`].
//!
//! # Example
//!
//! ```rust
//! use fuso::merge::{MergeOptions, merge, merge_with};
//! use serde_json::{Value, json};
//!
//! let original = json!({"a": {"x": 1, "y": 2}, "b": [1, 2]});
//! let updates = json!({"a": {"y": 3, "z": 4}, "b": [3, 4]});
//! let (original, updates) = (original.as_object().unwrap(), updates.as_object().unwrap());
//!
//! let replaced = merge(original, updates);
//! assert_eq!(Value::Object(replaced), json!({"a": {"x": 1, "y": 3, "z": 4}, "b": [3, 4]}));
//!
//! let options = MergeOptions::new().with_merge_function("b", |current, update| {
//!     let mut joined = current.as_array().cloned().unwrap_or_default();
//!     joined.extend(update.as_array().cloned().unwrap_or_default());
//!     Value::Array(joined)
//! });
//! let appended = merge_with(original, updates, &options);
//! assert_eq!(appended["b"], json!([1, 2, 3, 4]));
//! ```

mod functions;
mod keyed;
mod options;
mod post_process;
mod typed;

use serde_json::{Map, Value};

use crate::keyed::sort_by_key_order;

pub use functions::{MergeFn, MergeFunctions};
pub use keyed::merge_list_of_dicts_by_key;
pub use options::MergeOptions;
pub use post_process::PostProcessor;
pub use typed::merge_typed;

/// Deep merge `updates` into a copy of `original` with default options.
///
/// See [`merge_with`] for the rules applied to each key.
#[must_use]
pub fn merge(original: &Map<String, Value>, updates: &Map<String, Value>) -> Map<String, Value> {
    merge_with(original, updates, &MergeOptions::default())
}

/// Deep merge `updates` into a copy of `original`.
///
/// For every key of `updates`:
/// - a null update is ignored and the original value, if any, is kept;
/// - a key that is absent or null in `original` takes the update;
/// - a field with a registered merge function gets `f(original, update)`;
/// - two mappings merge recursively with the same strategy table;
/// - anything else is replaced by the update.
///
/// The post-processor, when configured, runs once on the top-level result.
/// Neither input is modified.
#[must_use]
pub fn merge_with(
    original: &Map<String, Value>,
    updates: &Map<String, Value>,
    options: &MergeOptions,
) -> Map<String, Value> {
    let merged = deep_merge(original, updates, options.merge_functions());
    match options.post_processor() {
        Some(post_processor) => post_processor.post_process(merged),
        None => merged,
    }
}

/// Shallow merge `updates` over `base` with default options.
#[must_use]
pub fn merge_dict(base: &Map<String, Value>, updates: &Map<String, Value>) -> Map<String, Value> {
    merge_dict_with(base, updates, &MergeOptions::default())
}

/// Shallow merge `updates` over `base`.
///
/// Keys present on one side only are kept. Keys present on both sides take
/// the registered merge function's result, or the update value outright;
/// nested mappings are not merged. The output lists the configured key order
/// first, followed by the remaining keys in first-seen order.
///
/// # Examples
///
/// ```
/// use fuso::merge::{MergeOptions, merge_dict_with};
/// use serde_json::json;
///
/// let base = json!({"b": 2, "a": 1, "c": 3});
/// let updates = json!({"c": 4, "a": 5});
/// let merged = merge_dict_with(
///     base.as_object().unwrap(),
///     updates.as_object().unwrap(),
///     &MergeOptions::new().with_key_order(["a", "c"]),
/// );
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "c", "b"]);
/// assert_eq!(merged["a"], 5);
/// ```
#[must_use]
pub fn merge_dict_with(
    base: &Map<String, Value>,
    updates: &Map<String, Value>,
    options: &MergeOptions,
) -> Map<String, Value> {
    let merged = shallow_merge(base, updates, options.merge_functions());
    if options.key_order().is_empty() {
        merged
    } else {
        sort_by_key_order(&merged, options.key_order())
    }
}

pub(crate) fn shallow_merge(
    base: &Map<String, Value>,
    updates: &Map<String, Value>,
    functions: &MergeFunctions,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, update) in updates {
        let combined = match (merged.get(key), functions.get(key)) {
            (Some(current), Some(function)) => {
                tracing::trace!(field = %key, "applying merge function");
                function(current, update)
            }
            _ => update.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

fn deep_merge(
    original: &Map<String, Value>,
    updates: &Map<String, Value>,
    functions: &MergeFunctions,
) -> Map<String, Value> {
    let mut merged = original.clone();
    for (key, update) in updates {
        if update.is_null() {
            continue;
        }
        let combined = match merged.get(key) {
            None | Some(Value::Null) => update.clone(),
            Some(current) => merge_field(key, current, update, functions),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

fn merge_field(key: &str, current: &Value, update: &Value, functions: &MergeFunctions) -> Value {
    if let Some(function) = functions.get(key) {
        tracing::trace!(field = %key, "applying merge function");
        return function(current, update);
    }
    match (current, update) {
        (Value::Object(current_map), Value::Object(update_map)) => {
            tracing::trace!(field = %key, "merging nested mapping");
            Value::Object(deep_merge(current_map, update_map, functions))
        }
        _ => update.clone(),
    }
}
