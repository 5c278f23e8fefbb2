//! Primary error enum for merge and reshape flows.

use std::fmt;

use thiserror::Error;

/// Sequence a keyed mapping was taken from when its identity field was
/// missing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOrigin {
    /// The mapping belongs to the existing values.
    Value,
    /// The mapping belongs to the updates being applied.
    Update,
}

impl fmt::Display for KeyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Update => "update",
        })
    }
}

/// Errors that can occur while merging or reshaping structured values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FusoError {
    /// A mapping lacked the field used to identify it.
    ///
    /// The rendered message is matched on by downstream tooling, so its
    /// wording must not change.
    #[error("Key '{key}' not found in {origin}. Available keys: {}", .available.join(", "))]
    MissingKey {
        /// Identity field that was looked up.
        key: String,
        /// Whether the offending mapping came from the values or the updates.
        origin: KeyOrigin,
        /// Keys present on the offending mapping, in their original order.
        available: Vec<String>,
    },

    /// A typed value did not serialise to a mapping.
    #[error("expected a mapping to merge, found {found}")]
    NotAMapping {
        /// JSON kind that was produced instead.
        found: &'static str,
    },

    /// Converting between typed values and mappings failed.
    #[error("JSON conversion failed: {0}")]
    Serialisation(#[from] serde_json::Error),
}
