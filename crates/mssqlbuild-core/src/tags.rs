//! Deduplicated collection of image tags.

use std::collections::BTreeSet;

use crate::ImageConfig;

/// Distinct image tags, iterated in lexicographic order.
///
/// # Examples
///
/// ```
/// use mssqlbuild_core::TagSet;
///
/// let mut tags: TagSet = ["A", "B"].into_iter().collect();
/// tags.insert("A");
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured tags plus `extra_tag`.
    pub fn from_config(config: &ImageConfig) -> Self {
        let mut set: Self = config.tags.iter().map(String::as_str).collect();
        set.insert(&config.extra_tag);
        tracing::debug!(
            configured = config.tags.len(),
            distinct = set.len(),
            "resolved tag set"
        );
        set
    }

    /// Returns `false` when the tag was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
