//! Reshaping between sequences of mappings and keyed collections.
//!
//! A keyed collection is a sequence of mappings in which one field carries a
//! unique identity. [`to_keyed_mapping`] lifts that field out of every row so
//! rows can be addressed by identity, and [`from_keyed_mapping`] puts it back.
//! Identities may be any scalar, so `{"id": 1}` and `{"id": "default"}` can
//! live in the same collection.
//!
//! # Examples
//!
//! ```
//! use fuso::keyed::{from_keyed_mapping, to_keyed_mapping};
//! use serde_json::{Map, Value, json};
//!
//! let rows: Vec<Map<String, Value>> = serde_json::from_value(json!([
//!     {"name": "Alice", "age": 30},
//!     {"name": "Bob", "age": 25},
//! ]))?;
//!
//! let keyed = to_keyed_mapping(&rows, "name")?;
//! assert_eq!(keyed.get(&json!("Bob")), json!({"age": 25}).as_object());
//! assert_eq!(from_keyed_mapping(&keyed, "name"), rows);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod sort;

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{FusoError, FusoResult, KeyOrigin};

pub use sort::{compare_values, sort_by_key_order, sort_sequence_by_field};

/// Ordered collection of rows addressed by their identity value.
///
/// Entries keep the order in which their identity was first seen. Inserting
/// an identity that already exists replaces its fields in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedMapping {
    entries: Vec<(Value, Map<String, Value>)>,
    positions: HashMap<String, usize>,
}

/// Canonical lookup form of an identity.
///
/// Numbers render by value, so `1` and `1.0` share an entry, while strings
/// keep their quotes and `1` and `"1"` stay distinct.
fn identity_of(value: &Value) -> String {
    let Value::Number(number) = value else {
        return value.to_string();
    };
    if let Some(integer) = number.as_i64() {
        integer.to_string()
    } else if let Some(unsigned) = number.as_u64() {
        unsigned.to_string()
    } else {
        number
            .as_f64()
            .map_or_else(|| number.to_string(), |float| float.to_string())
    }
}

impl KeyedMapping {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the collection holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when an entry with `identity` exists.
    #[must_use]
    pub fn contains(&self, identity: &Value) -> bool {
        self.positions.contains_key(&identity_of(identity))
    }

    /// Fields stored for `identity`.
    #[must_use]
    pub fn get(&self, identity: &Value) -> Option<&Map<String, Value>> {
        let position = *self.positions.get(&identity_of(identity))?;
        self.entries.get(position).map(|(_, fields)| fields)
    }

    /// Mutable access to the fields stored for `identity`.
    pub fn get_mut(&mut self, identity: &Value) -> Option<&mut Map<String, Value>> {
        let position = *self.positions.get(&identity_of(identity))?;
        self.entries.get_mut(position).map(|(_, fields)| fields)
    }

    /// Store `fields` under `identity`, returning the fields it replaced.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        identity: Value,
        fields: Map<String, Value>,
    ) -> Option<Map<String, Value>> {
        let lookup = identity_of(&identity);
        if let Some(slot) = self
            .positions
            .get(&lookup)
            .and_then(|position| self.entries.get_mut(*position))
        {
            return Some(std::mem::replace(&mut slot.1, fields));
        }
        self.positions.insert(lookup, self.entries.len());
        self.entries.push((identity, fields));
        None
    }

    /// Remove the entry for `identity`, keeping the order of the others.
    pub fn remove(&mut self, identity: &Value) -> Option<Map<String, Value>> {
        let removed_at = self.positions.remove(&identity_of(identity))?;
        if removed_at >= self.entries.len() {
            return None;
        }
        let (_, fields) = self.entries.remove(removed_at);
        for position in self.positions.values_mut() {
            if *position > removed_at {
                *position -= 1;
            }
        }
        Some(fields)
    }

    /// Iterate over `(identity, fields)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Map<String, Value>)> {
        self.entries.iter().map(|(identity, fields)| (identity, fields))
    }

    /// Iterate mutably over the stored fields in order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.entries.iter_mut().map(|(_, fields)| fields)
    }

    /// Rebuild the row sequence, re-inserting each identity under `key` as
    /// the first field.
    #[must_use]
    pub fn into_sequence(self, key: &str) -> Vec<Map<String, Value>> {
        self.entries
            .into_iter()
            .map(|(identity, fields)| restore_row(key, identity, fields))
            .collect()
    }
}

impl IntoIterator for KeyedMapping {
    type Item = (Value, Map<String, Value>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn restore_row(key: &str, identity: Value, fields: Map<String, Value>) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert(key.to_owned(), identity);
    for (name, value) in fields {
        if name != key {
            row.insert(name, value);
        }
    }
    row
}

/// Reshape `values` into a [`KeyedMapping`] using the field `key`.
///
/// The identity field is removed from the stored fields. When two rows share
/// an identity the later one replaces the earlier fields.
///
/// # Errors
///
/// Returns [`FusoError::MissingKey`] naming the first row without `key`.
pub fn to_keyed_mapping(values: &[Map<String, Value>], key: &str) -> FusoResult<KeyedMapping> {
    collect_keyed(values, key, KeyOrigin::Value)
}

/// Rebuild a row sequence from `mapping`, placing each identity under `key`.
///
/// # Examples
///
/// ```
/// use fuso::keyed::{KeyedMapping, from_keyed_mapping};
/// use serde_json::json;
///
/// let mut keyed = KeyedMapping::new();
/// keyed.insert(json!(7), json!({"name": "Ada"}).as_object().cloned().unwrap_or_default());
/// let rows = from_keyed_mapping(&keyed, "id");
/// assert_eq!(serde_json::Value::from(rows), json!([{"id": 7, "name": "Ada"}]));
/// ```
#[must_use]
pub fn from_keyed_mapping(mapping: &KeyedMapping, key: &str) -> Vec<Map<String, Value>> {
    mapping.clone().into_sequence(key)
}

pub(crate) fn collect_keyed(
    values: &[Map<String, Value>],
    key: &str,
    origin: KeyOrigin,
) -> FusoResult<KeyedMapping> {
    let mut keyed = KeyedMapping::new();
    for row in values {
        let identity = row
            .get(key)
            .ok_or_else(|| FusoError::missing_key(key, origin, row))?;
        let fields = row
            .iter()
            .filter(|(name, _)| name.as_str() != key)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        keyed.insert(identity.clone(), fields);
    }
    Ok(keyed)
}

#[cfg(test)]
mod tests;
