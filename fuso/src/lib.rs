//! Structural helpers for nested JSON-style data.
//!
//! `fuso` merges and reshapes [`serde_json::Value`] trees without touching
//! the inputs:
//!
//! - [`merge()`] deep merges two mappings, with per-field strategies and a
//!   post-processing hook configured through [`MergeOptions`];
//! - [`merge_dict`] performs the shallow variant with optional key ordering;
//! - [`merge_list_of_dicts_by_key`] merges keyed collections row by row;
//! - [`from_dotpath`] and [`to_dotpath`] convert between nested mappings and
//!   flat dot-path keys;
//! - the [`keyed`] module reshapes and sorts sequences of mappings.
//!
//! Mappings keep insertion order, so key order in the output is
//! deterministic.
//!
//! # Example
//!
//! ```rust
//! use fuso::{from_dotpath, merge};
//! use serde_json::{Value, json};
//!
//! let defaults = from_dotpath(&json!({"server.port": 8080, "server.host": "localhost"}));
//! let overrides = from_dotpath(&json!({"server.port": 9090, "server.host": null}));
//!
//! let merged = merge(
//!     defaults.as_object().unwrap(),
//!     overrides.as_object().unwrap(),
//! );
//! assert_eq!(
//!     Value::Object(merged),
//!     json!({"server": {"port": 9090, "host": "localhost"}})
//! );
//! ```

pub mod dotpath;
mod error;
pub mod keyed;
pub mod merge;

pub use dotpath::{DotPathOptions, from_dotpath, from_dotpath_with, to_dotpath, to_dotpath_with};
pub use error::{FusoError, KeyOrigin};
pub use merge::{
    MergeFunctions, MergeOptions, PostProcessor, merge, merge_dict, merge_dict_with,
    merge_list_of_dicts_by_key, merge_typed, merge_with,
};

/// Result alias used across the crate.
pub type FusoResult<T> = Result<T, FusoError>;
