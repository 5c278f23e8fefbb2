//! Conversion between nested mappings and flat dot-path keys.
//!
//! [`from_dotpath`] expands keys such as `"a.b.c"` into nested mappings and
//! [`to_dotpath`] flattens nested mappings back into such keys. Sequences
//! stop flattening: their contents are kept verbatim by [`to_dotpath`], while
//! [`from_dotpath`] still expands the mappings found inside them.
//!
//! # Example
//!
//! ```rust
//! use fuso::dotpath::{from_dotpath, to_dotpath};
//! use serde_json::json;
//!
//! let flat = json!({"a.b": 1, "a.c": 2, "x": [1, 2]});
//! let nested = from_dotpath(&flat);
//! assert_eq!(nested, json!({"a": {"b": 1, "c": 2}, "x": [1, 2]}));
//! assert_eq!(to_dotpath(&nested), flat);
//! ```

mod options;

use serde_json::{Map, Value};

pub use options::DotPathOptions;

/// Expand dot-path keys in `value` using the default options.
#[must_use]
pub fn from_dotpath(value: &Value) -> Value {
    from_dotpath_with(value, &DotPathOptions::default())
}

/// Expand separator-joined keys in `value` into nested mappings.
///
/// Mappings are expanded key by key, sequences element by element, and
/// scalars are returned unchanged. Keys that share a prefix populate the same
/// nested mapping; where two expansions collide on something other than two
/// mappings, the later key wins. Ignored keys are kept whole, but their values
/// are still expanded.
///
/// # Examples
///
/// ```
/// use fuso::dotpath::{DotPathOptions, from_dotpath_with};
/// use serde_json::json;
///
/// let options = DotPathOptions::new().with_ignores(["ignore.this.key"]);
/// let value = json!({"x.y": 3, "ignore.this.key": 4});
/// assert_eq!(
///     from_dotpath_with(&value, &options),
///     json!({"x": {"y": 3}, "ignore.this.key": 4})
/// );
/// ```
#[must_use]
pub fn from_dotpath_with(value: &Value, options: &DotPathOptions) -> Value {
    match value {
        Value::Object(mapping) => Value::Object(expand_mapping(mapping, options)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| from_dotpath_with(item, options))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Flatten nested mappings in `value` using the default options.
#[must_use]
pub fn to_dotpath(value: &Value) -> Value {
    to_dotpath_with(value, &DotPathOptions::default())
}

/// Flatten nested mappings in `value` into separator-joined keys.
///
/// Flattening follows mapping values to full depth. Sequences and scalars end
/// a path and are copied verbatim; an empty nested mapping is kept as a leaf.
/// Values other than mappings are returned unchanged.
///
/// # Examples
///
/// ```
/// use fuso::dotpath::{DotPathOptions, to_dotpath_with};
/// use serde_json::json;
///
/// let options = DotPathOptions::new().with_separator("/");
/// let value = json!({"list": [{"a": 1}], "nested": {"inner": {"key": true}}});
/// assert_eq!(
///     to_dotpath_with(&value, &options),
///     json!({"list": [{"a": 1}], "nested/inner/key": true})
/// );
/// ```
#[must_use]
pub fn to_dotpath_with(value: &Value, options: &DotPathOptions) -> Value {
    match value {
        Value::Object(mapping) => {
            let mut flat = Map::new();
            flatten_into(&mut flat, None, mapping, options.separator());
            Value::Object(flat)
        }
        other => other.clone(),
    }
}

fn expand_mapping(mapping: &Map<String, Value>, options: &DotPathOptions) -> Map<String, Value> {
    let mut expanded = Map::new();
    for (key, value) in mapping {
        let processed = from_dotpath_with(value, options);
        if !options.splits(key) {
            overlay_entry(&mut expanded, key.clone(), processed);
            continue;
        }
        let mut segments = key.rsplit(options.separator());
        let Some(leaf) = segments.next() else {
            continue;
        };
        let mut nested = Map::new();
        nested.insert(leaf.to_owned(), processed);
        let wrapped = segments.fold(nested, |inner, segment| {
            let mut outer = Map::new();
            outer.insert(segment.to_owned(), Value::Object(inner));
            outer
        });
        for (segment, branch) in wrapped {
            overlay_entry(&mut expanded, segment, branch);
        }
    }
    expanded
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    prefix: Option<&str>,
    mapping: &Map<String, Value>,
    separator: &str,
) {
    for (key, value) in mapping {
        let path = prefix.map_or_else(|| key.clone(), |parent| format!("{parent}{separator}{key}"));
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                flatten_into(flat, Some(&path), nested, separator);
            }
            _ => {
                flat.insert(path, value.clone());
            }
        }
    }
}

/// Place `layer` under `key`, merging it into an existing mapping.
fn overlay_entry(target: &mut Map<String, Value>, key: String, layer: Value) {
    match target.get_mut(&key) {
        Some(existing) => overlay(existing, layer),
        None => {
            target.insert(key, layer);
        }
    }
}

/// Overlay `layer` onto `target` in place.
///
/// Mappings merge recursively; anything else replaces `target` wholesale.
fn overlay(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(mapping) => overlay_object(target, mapping),
        _ => *target = layer,
    }
}

fn overlay_object(target: &mut Value, mapping: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for (key, value) in mapping {
        overlay_entry(target_map, key, value);
    }
}
