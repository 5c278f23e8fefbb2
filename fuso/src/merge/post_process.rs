//! Post-processing hook for deep merges.
//!
//! A [`PostProcessor`] sees the fully merged top-level mapping once, after
//! every nested level has been combined. Nested recursion never invokes it.

use serde_json::{Map, Value};

/// Hook invoked on the result of [`crate::merge::merge_with`].
///
/// Closures of type `Fn(Map<String, Value>) -> Map<String, Value>` implement
/// this trait, so most callers never name it.
///
/// # Examples
///
/// ```rust
/// use fuso::merge::{MergeOptions, merge_with};
/// use serde_json::{Map, Value, json};
///
/// let options = MergeOptions::new().with_post_processor(|mut merged: Map<String, Value>| {
///     merged.insert("merged".to_owned(), Value::Bool(true));
///     merged
/// });
///
/// let original = json!({"a": 1});
/// let updates = json!({"b": 2});
/// let merged = merge_with(
///     original.as_object().unwrap(),
///     updates.as_object().unwrap(),
///     &options,
/// );
/// assert_eq!(Value::Object(merged), json!({"a": 1, "b": 2, "merged": true}));
/// ```
pub trait PostProcessor: Send + Sync {
    /// Adjusts the merged mapping before it is returned to the caller.
    fn post_process(&self, merged: Map<String, Value>) -> Map<String, Value>;
}

impl<F> PostProcessor for F
where
    F: Fn(Map<String, Value>) -> Map<String, Value> + Send + Sync,
{
    fn post_process(&self, merged: Map<String, Value>) -> Map<String, Value> {
        self(merged)
    }
}
