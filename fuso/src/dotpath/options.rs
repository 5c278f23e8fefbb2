//! Configuration for dot-path conversion.

use serde::Deserialize;

/// Settings shared by [`super::from_dotpath_with`] and
/// [`super::to_dotpath_with`].
///
/// The type deserialises with every field optional, so it can be embedded in
/// an application's own configuration file.
///
/// # Examples
///
/// ```
/// use fuso::dotpath::DotPathOptions;
///
/// let options: DotPathOptions = serde_json::from_str(r#"{"ignores": ["log.level"]}"#)?;
/// assert_eq!(options.separator(), ".");
/// assert!(options.is_ignored("log.level"));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct DotPathOptions {
    separator: String,
    ignores: Vec<String>,
}

impl Default for DotPathOptions {
    fn default() -> Self {
        Self {
            separator: ".".to_owned(),
            ignores: Vec::new(),
        }
    }
}

impl DotPathOptions {
    /// Options using `.` as separator and ignoring nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `separator` to split and join paths.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Keys that must never be split, matched against the full key.
    #[must_use]
    pub fn with_ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores = ignores.into_iter().map(Into::into).collect();
        self
    }

    /// Path separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Keys excluded from splitting.
    #[must_use]
    pub fn ignores(&self) -> &[String] {
        &self.ignores
    }

    /// Returns `true` when `key` is listed verbatim in the ignores.
    #[must_use]
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignores.iter().any(|ignored| ignored == key)
    }

    /// Returns `true` when `key` should be split into a path.
    pub(crate) fn splits(&self, key: &str) -> bool {
        !self.separator.is_empty() && key.contains(self.separator.as_str()) && !self.is_ignored(key)
    }
}
