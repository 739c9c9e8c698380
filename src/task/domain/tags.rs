//! Ordered tag lists and their delimited storage form.

use super::TaskDomainError;
use std::fmt;

/// Character separating tags in the stored representation.
pub const TAG_DELIMITER: char = ',';

/// Ordered list of trimmed, non-empty tags.
///
/// The remote store keeps tags as a single comma-delimited string. Every
/// value of this type joins and splits back to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskTags(Vec<String>);

impl TaskTags {
    /// Builds a tag list from individual tags.
    ///
    /// Tags are trimmed and empty tags are dropped; order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TagContainsDelimiter`] when a tag contains
    /// [`TAG_DELIMITER`].
    pub fn new<I, T>(tags: I) -> Result<Self, TaskDomainError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for tag in tags {
            let trimmed = tag.as_ref().trim();
            if trimmed.contains(TAG_DELIMITER) {
                return Err(TaskDomainError::TagContainsDelimiter(trimmed.to_owned()));
            }
            if !trimmed.is_empty() {
                normalized.push(trimmed.to_owned());
            }
        }
        Ok(Self(normalized))
    }

    /// Splits a delimited tag string as stored by the remote store.
    ///
    /// An empty or whitespace-only string yields an empty list.
    #[must_use]
    pub fn parse_delimited(value: &str) -> Self {
        Self(
            value
                .split(TAG_DELIMITER)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Joins the tags into the stored delimited form.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        let mut separator = [0; 4];
        self.0.join(&*TAG_DELIMITER.encode_utf8(&mut separator))
    }

    /// Returns the tags in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns an iterator over the tags.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TaskTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}
