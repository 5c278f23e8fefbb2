//! Merging of keyed collections.

use serde_json::{Map, Value};

use super::{MergeOptions, shallow_merge};
use crate::{FusoResult, KeyOrigin, keyed::collect_keyed};

/// Merge two sequences of mappings that share the identity field `key`.
///
/// Rows are matched by identity. A matched update is shallow merged into the
/// existing row using the configured merge functions; an unmatched update is
/// appended. When `default_key` names an identity present in `updates`, that
/// row is a default patch: it is merged into every row of `values` before the
/// specific updates and is not emitted itself.
///
/// The result lists existing identities in their original order followed by
/// new identities in update order, with the identity as each row's first
/// field.
///
/// # Errors
///
/// Returns [`crate::FusoError::MissingKey`] when a row in `values` or
/// `updates` lacks `key`; the message says which side the row came from.
///
/// # Examples
///
/// ```
/// use fuso::merge::{MergeOptions, merge_list_of_dicts_by_key};
/// use serde_json::{Map, Value, json};
///
/// let values: Vec<Map<String, Value>> = serde_json::from_value(json!([
///     {"id": 1, "name": "Alice", "age": 30},
///     {"id": 2, "name": "Bob", "age": 25},
/// ]))?;
/// let updates: Vec<Map<String, Value>> = serde_json::from_value(json!([
///     {"id": "default", "age": 35},
///     {"id": 2, "name": "Robert"},
/// ]))?;
///
/// let merged = merge_list_of_dicts_by_key(
///     &values,
///     &updates,
///     "id",
///     Some(&json!("default")),
///     &MergeOptions::default(),
/// )?;
/// assert_eq!(
///     Value::from(merged),
///     json!([
///         {"id": 1, "name": "Alice", "age": 35},
///         {"id": 2, "name": "Robert", "age": 35},
///     ])
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn merge_list_of_dicts_by_key(
    values: &[Map<String, Value>],
    updates: &[Map<String, Value>],
    key: &str,
    default_key: Option<&Value>,
    options: &MergeOptions,
) -> FusoResult<Vec<Map<String, Value>>> {
    let mut merged = collect_keyed(values, key, KeyOrigin::Value)?;
    let mut incoming = collect_keyed(updates, key, KeyOrigin::Update)?;
    let functions = options.merge_functions();

    if let Some(patch) = default_key.and_then(|identity| incoming.remove(identity)) {
        tracing::debug!(key, rows = merged.len(), "applying default patch to keyed rows");
        for fields in merged.values_mut() {
            *fields = shallow_merge(fields, &patch, functions);
        }
    }

    let existing = merged.len();
    for (identity, fields) in incoming {
        if let Some(current) = merged.get_mut(&identity) {
            *current = shallow_merge(current, &fields, functions);
        } else {
            merged.insert(identity, fields);
        }
    }
    tracing::debug!(
        key,
        existing,
        added = merged.len() - existing,
        "merged keyed rows"
    );

    Ok(merged.into_sequence(key))
}
