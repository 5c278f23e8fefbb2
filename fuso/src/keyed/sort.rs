//! Ordering helpers for mappings and sequences of mappings.

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

use crate::{FusoError, FusoResult, KeyOrigin};

/// Reorder `mapping` so the keys named in `key_order` come first.
///
/// Listed keys appear in the order given; names absent from `mapping` are
/// skipped. All remaining keys follow in their original order.
///
/// # Examples
///
/// ```
/// use fuso::keyed::sort_by_key_order;
/// use serde_json::json;
///
/// let value = json!({"b": 2, "a": 1, "c": 3});
/// let sorted = sort_by_key_order(value.as_object().unwrap(), &["a", "b"]);
/// assert_eq!(sorted.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
#[must_use]
pub fn sort_by_key_order<S: AsRef<str>>(
    mapping: &Map<String, Value>,
    key_order: &[S],
) -> Map<String, Value> {
    let mut sorted = Map::new();
    for name in key_order.iter().map(AsRef::as_ref) {
        if let Some(value) = mapping.get(name) {
            sorted.insert(name.to_owned(), value.clone());
        }
    }
    for (name, value) in mapping {
        if !sorted.contains_key(name) {
            sorted.insert(name.clone(), value.clone());
        }
    }
    sorted
}

/// Stable sort of `values` by the value of their `key` field.
///
/// With `reverse` the order is descending; rows with equal fields keep their
/// original relative order either way. Field values compare with
/// [`compare_values`].
///
/// # Errors
///
/// Returns [`FusoError::MissingKey`] naming the first row without `key`.
///
/// # Examples
///
/// ```
/// use fuso::keyed::sort_sequence_by_field;
/// use serde_json::{Map, Value, json};
///
/// let rows: Vec<Map<String, Value>> = serde_json::from_value(json!([
///     {"name": "Alice", "age": 30},
///     {"name": "Bob", "age": 25},
/// ]))?;
/// let sorted = sort_sequence_by_field(&rows, "age", false)?;
/// assert_eq!(sorted[0]["name"], "Bob");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn sort_sequence_by_field(
    values: &[Map<String, Value>],
    key: &str,
    reverse: bool,
) -> FusoResult<Vec<Map<String, Value>>> {
    let mut decorated = values
        .iter()
        .map(|row| {
            row.get(key)
                .map(|field| (field, row))
                .ok_or_else(|| FusoError::missing_key(key, KeyOrigin::Value, row))
        })
        .collect::<FusoResult<Vec<_>>>()?;
    decorated.sort_by(|(left, _), (right, _)| {
        let ordering = compare_values(left, right);
        if reverse { ordering.reverse() } else { ordering }
    });
    Ok(decorated.into_iter().map(|(_, row)| row.clone()).collect())
}

/// Total order over generic values.
///
/// Values of different kinds order as null, booleans, numbers, strings,
/// sequences, then mappings. Numbers compare numerically, strings
/// lexicographically, and sequences and mappings element by element.
#[must_use]
pub fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::Number(l), Value::Number(r)) => compare_numbers(l, r),
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Array(l), Value::Array(r)) => l
            .iter()
            .zip(r)
            .map(|(a, b)| compare_values(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| l.len().cmp(&r.len())),
        (Value::Object(l), Value::Object(r)) => l
            .iter()
            .zip(r)
            .map(|((lk, lv), (rk, rv))| lk.cmp(rk).then_with(|| compare_values(lv, rv)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| l.len().cmp(&r.len())),
        _ => kind_rank(left).cmp(&kind_rank(right)),
    }
}

const fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l.cmp(&r);
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l.cmp(&r);
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l.total_cmp(&r),
        (l, r) => l.is_some().cmp(&r.is_some()),
    }
}
