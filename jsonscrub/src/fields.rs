//! Sensitive field-name lookup.
//!
//! [`SensitiveFieldSet`] answers one question: is this field name sensitive?
//! It holds no traversal logic and is never mutated after construction, so a
//! single set can back both the mask pass and the restore pass.

use std::collections::HashSet;

/// Immutable set of lower-cased field names whose values must be masked.
///
/// Lookups are case-insensitive: names are lower-cased on insert and the
/// probe is lower-cased on every [`contains`](Self::contains) call.
#[derive(Debug, Clone, Default)]
pub struct SensitiveFieldSet {
    names: HashSet<String>,
}

impl SensitiveFieldSet {
    /// Creates an empty set. Nothing is masked against an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from newline-delimited text, one field name per line.
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed, so a
    /// trailing newline or indented list entries do not produce phantom
    /// field names.
    pub fn from_lines(text: &str) -> Self {
        text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    }

    /// Returns `true` iff `name` was present in the source list, compared
    /// case-insensitively. Never errors.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Number of distinct field names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the set holds no field names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SensitiveFieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|name| name.as_ref().to_lowercase()).collect(),
        }
    }
}
