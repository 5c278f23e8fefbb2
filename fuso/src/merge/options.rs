//! Optional knobs shared by the merge operations.

use std::fmt;

use serde_json::Value;

use super::{MergeFunctions, PostProcessor};

/// Options accepted by the `*_with` merge entry points.
///
/// Each operation reads only the options that concern it:
///
/// | option            | `merge_with` | `merge_dict_with` | keyed merge |
/// |-------------------|--------------|-------------------|-------------|
/// | merge functions   | yes          | yes               | yes         |
/// | key order         | no           | yes               | no          |
/// | post-processor    | yes          | no                | no          |
///
/// # Examples
///
/// ```
/// use fuso::merge::MergeOptions;
///
/// let options = MergeOptions::new()
///     .with_key_order(["name", "version"])
///     .with_merge_function("tags", |current, _update| current.clone());
/// assert_eq!(options.key_order(), ["name", "version"]);
/// assert!(options.merge_functions().get("tags").is_some());
/// assert!(options.post_processor().is_none());
/// ```
#[derive(Default)]
pub struct MergeOptions {
    merge_functions: MergeFunctions,
    key_order: Vec<String>,
    post_processor: Option<Box<dyn PostProcessor>>,
}

impl MergeOptions {
    /// Options with no strategies, no key order and no post-processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a merge strategy for `field`.
    #[must_use]
    pub fn with_merge_function<F>(mut self, field: impl Into<String>, function: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.merge_functions.insert(field, function);
        self
    }

    /// Replace the whole strategy table.
    #[must_use]
    pub fn with_merge_functions(mut self, merge_functions: MergeFunctions) -> Self {
        self.merge_functions = merge_functions;
        self
    }

    /// Keys that should lead the output of a shallow merge, in order.
    #[must_use]
    pub fn with_key_order<I, S>(mut self, key_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_order = key_order.into_iter().map(Into::into).collect();
        self
    }

    /// Hook applied once to the top-level result of a deep merge.
    #[must_use]
    pub fn with_post_processor<P>(mut self, post_processor: P) -> Self
    where
        P: PostProcessor + 'static,
    {
        self.post_processor = Some(Box::new(post_processor));
        self
    }

    /// Registered merge strategies.
    #[must_use]
    pub const fn merge_functions(&self) -> &MergeFunctions {
        &self.merge_functions
    }

    /// Leading key order for shallow merges.
    #[must_use]
    pub fn key_order(&self) -> &[String] {
        &self.key_order
    }

    /// Post-processing hook, if one was configured.
    #[must_use]
    pub fn post_processor(&self) -> Option<&dyn PostProcessor> {
        self.post_processor.as_deref()
    }
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions")
            .field("merge_functions", &self.merge_functions)
            .field("key_order", &self.key_order)
            .field("post_processor", &self.post_processor.is_some())
            .finish()
    }
}
