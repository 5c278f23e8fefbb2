//! Constructors for `FusoError`.

use serde_json::{Map, Value};

use super::{FusoError, KeyOrigin};

impl FusoError {
    /// Construct a [`FusoError::MissingKey`] describing `mapping`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuso::{FusoError, KeyOrigin};
    /// use serde_json::json;
    ///
    /// let row = json!({"uid": 1, "age": 31});
    /// let err = FusoError::missing_key("id", KeyOrigin::Update, row.as_object().unwrap());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Key 'id' not found in update. Available keys: uid, age"
    /// );
    /// ```
    #[must_use]
    pub fn missing_key(key: &str, origin: KeyOrigin, mapping: &Map<String, Value>) -> Self {
        Self::MissingKey {
            key: key.to_owned(),
            origin,
            available: mapping.keys().cloned().collect(),
        }
    }

    /// Construct a [`FusoError::NotAMapping`] for `value`.
    #[must_use]
    pub const fn not_a_mapping(value: &Value) -> Self {
        Self::NotAMapping {
            found: match value {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Array(_) => "a sequence",
                Value::Object(_) => "a mapping",
            },
        }
    }
}
