//! The ordered ledger of original values removed during masking.

use std::collections::VecDeque;

use serde_json::{Number, Value};

/// An original scalar captured during the mask pass, tagged with its JSON
/// type so restoration can reproduce both value and type exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedValue {
    /// A string leaf, saved before its alphanumeric characters were masked.
    Text(String),
    /// A boolean leaf, saved before it was replaced with the placeholder.
    Flag(bool),
    /// A number leaf, saved before it was rewritten as a masked string.
    Number(Number),
}

impl SavedValue {
    /// Converts back into the JSON value the document originally held.
    pub(crate) fn into_value(self) -> Value {
        match self {
            SavedValue::Text(text) => Value::String(text),
            SavedValue::Flag(flag) => Value::Bool(flag),
            SavedValue::Number(number) => Value::Number(number),
        }
    }
}

/// Ordered sequence of original values, appended in depth-first traversal
/// order during masking and drained front-to-back during restoration.
///
/// Position `i` corresponds to the `i`-th scrubbed leaf visited by the
/// deterministic traversal order shared by both passes. The record starts
/// empty, grows only during the mask pass, and must be fully drained by the
/// restore pass; a value is never read twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskRecord {
    values: VecDeque<SavedValue>,
}

impl MaskRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next original value in traversal order.
    pub(crate) fn push(&mut self, value: SavedValue) {
        self.values.push_back(value);
    }

    /// Removes and returns the oldest recorded value, or `None` if the
    /// record has been drained.
    pub(crate) fn pop(&mut self) -> Option<SavedValue> {
        self.values.pop_front()
    }

    /// Number of values still queued.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` once every recorded value has been written back.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
