//! Deep merging of serialisable values.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{MergeOptions, merge_with};
use crate::{FusoError, FusoResult};

/// Deep merge two values of the same serialisable type.
///
/// Both values are converted to mappings, merged with [`merge_with`], and the
/// result converted back. Fields serialised as null, such as `Option::None`,
/// therefore leave the original value intact.
///
/// # Errors
///
/// Returns [`FusoError::NotAMapping`] when either value does not serialise
/// to a mapping and [`FusoError::Serialisation`] when conversion fails.
///
/// # Examples
///
/// ```
/// use fuso::merge::{MergeOptions, merge_typed};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Settings {
///     port: Option<u16>,
///     host: Option<String>,
/// }
///
/// let defaults = Settings { port: Some(8080), host: Some("localhost".into()) };
/// let overrides = Settings { port: Some(9090), host: None };
/// let merged = merge_typed(&defaults, &overrides, &MergeOptions::default())?;
/// assert_eq!(merged, Settings { port: Some(9090), host: Some("localhost".into()) });
/// # Ok::<_, fuso::FusoError>(())
/// ```
pub fn merge_typed<T>(original: &T, updates: &T, options: &MergeOptions) -> FusoResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let base = to_mapping(original)?;
    let overlay = to_mapping(updates)?;
    let merged = merge_with(&base, &overlay, options);
    Ok(serde_json::from_value(Value::Object(merged))?)
}

fn to_mapping<T: Serialize>(value: &T) -> FusoResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(mapping) => Ok(mapping),
        other => Err(FusoError::not_a_mapping(&other)),
    }
}
