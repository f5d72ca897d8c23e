//! Depth-first mask and restore traversal.
//!
//! Both passes share three pieces: the member visitation order, the
//! scrub-target predicate, and the field set bound to the [`Scrubber`].
//! Sharing them is what keeps the restore traversal aligned, leaf for leaf,
//! with the order in which the mask pass filled the [`MaskRecord`].

use serde_json::{Map, Value};

use super::record::{MaskRecord, SavedValue};
use crate::{error::ScrubError, fields::SensitiveFieldSet, policy};

/// Recursive mask/restore traversal bound to one sensitive-field set.
///
/// The same `Scrubber` must be used for both halves of a cycle: masking and
/// restoring with different field sets would visit different scrub targets
/// and corrupt the document.
#[derive(Debug, Clone)]
pub struct Scrubber {
    fields: SensitiveFieldSet,
}

impl Scrubber {
    /// Creates a scrubber that masks values under the given field names.
    pub fn new(fields: SensitiveFieldSet) -> Self {
        Self { fields }
    }

    /// The field set this scrubber was built with.
    pub fn fields(&self) -> &SensitiveFieldSet {
        &self.fields
    }

    /// Masks every sensitive scalar in `root` in place and returns the
    /// record of original values needed to undo the masking.
    ///
    /// The walk is depth-first and pre-order. Object members are visited in
    /// lexicographic key order; array elements in index order. A member
    /// whose name is sensitive turns the scrub flag on for its entire
    /// subtree, so container values are recursed into rather than replaced
    /// wholesale. Masking itself cannot fail.
    pub fn mask(&self, root: &mut Value) -> MaskRecord {
        let mut record = MaskRecord::new();
        self.mask_walk(root, "", false, &mut record);
        record
    }

    /// Writes the recorded original values back into `root`, replaying the
    /// mask traversal in the same deterministic order.
    ///
    /// Consumes the record: a drained record cannot be replayed against a
    /// second document. Fails with [`ScrubError::RecordExhausted`] if the
    /// record runs dry before the walk finishes, or
    /// [`ScrubError::RecordLeftover`] if values remain queued afterwards.
    /// Either error means the document was mutated between the passes and
    /// must not be trusted.
    pub fn restore(&self, root: &mut Value, mut record: MaskRecord) -> Result<(), ScrubError> {
        self.restore_walk(root, "", false, &mut record)?;
        if !record.is_empty() {
            return Err(ScrubError::RecordLeftover {
                remaining: record.len(),
            });
        }
        Ok(())
    }

    fn mask_walk(&self, value: &mut Value, name: &str, inherited: bool, record: &mut MaskRecord) {
        match value {
            Value::Object(members) => {
                for key in member_order(members) {
                    let scrub = inherited || self.fields.contains(&key);
                    if let Some(member) = members.get_mut(&key) {
                        self.mask_walk(member, &key, scrub, record);
                    }
                }
            }
            Value::Array(items) => {
                // Array elements keep the surrounding field's name and
                // scrub decision; arrays do not rename their elements.
                for item in items.iter_mut() {
                    self.mask_walk(item, name, inherited, record);
                }
            }
            leaf => {
                if !is_scrub_target(leaf, name, inherited) {
                    return;
                }
                let masked = match leaf {
                    Value::String(text) => {
                        let masked = policy::mask_text(text);
                        record.push(SavedValue::Text(std::mem::take(text)));
                        masked
                    }
                    Value::Bool(flag) => {
                        record.push(SavedValue::Flag(*flag));
                        policy::BOOL_PLACEHOLDER.to_string()
                    }
                    Value::Number(number) => {
                        let masked = policy::mask_number(number);
                        record.push(SavedValue::Number(number.clone()));
                        masked
                    }
                    // is_scrub_target never selects nulls or containers
                    Value::Null | Value::Array(_) | Value::Object(_) => return,
                };
                *leaf = Value::String(masked);
            }
        }
    }

    fn restore_walk(
        &self,
        value: &mut Value,
        name: &str,
        inherited: bool,
        record: &mut MaskRecord,
    ) -> Result<(), ScrubError> {
        match value {
            Value::Object(members) => {
                for key in member_order(members) {
                    let scrub = inherited || self.fields.contains(&key);
                    if let Some(member) = members.get_mut(&key) {
                        self.restore_walk(member, &key, scrub, record)?;
                    }
                }
            }
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.restore_walk(item, name, inherited, record)?;
                }
            }
            leaf => {
                // Masked leaves are non-empty strings, so the predicate
                // selects exactly the positions the mask pass scrubbed.
                if is_scrub_target(leaf, name, inherited) {
                    let original = record.pop().ok_or(ScrubError::RecordExhausted)?;
                    *leaf = original.into_value();
                }
            }
        }
        Ok(())
    }
}

/// Fixed member visitation order shared by both passes.
///
/// Keys are sorted so the restore traversal replays exactly the order the
/// mask pass recorded, independent of the map's own iteration order.
fn member_order(members: &Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = members.keys().cloned().collect();
    keys.sort_unstable();
    keys
}

/// A leaf is a scrub target when it sits under a sensitive field (its own
/// name or an ancestor's), carries a field name at all, and holds a
/// non-empty, non-zero value.
///
/// The document root and unnamed top-level scalars have no field name and
/// are never scrubbed. Nulls, empty strings, `false`, and numeric zero are
/// skipped without a record entry.
fn is_scrub_target(leaf: &Value, name: &str, scrub: bool) -> bool {
    if !scrub || name.is_empty() {
        return false;
    }
    match leaf {
        Value::String(text) => !text.is_empty(),
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{is_scrub_target, member_order};

    #[test]
    fn member_order_is_lexicographic() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let members = value.as_object().unwrap();
        assert_eq!(member_order(members), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn zero_valued_leaves_are_not_targets() {
        assert!(!is_scrub_target(&json!(""), "ssn", true));
        assert!(!is_scrub_target(&json!(false), "ssn", true));
        assert!(!is_scrub_target(&json!(0), "ssn", true));
        assert!(!is_scrub_target(&json!(0.0), "ssn", true));
        assert!(!is_scrub_target(&json!(null), "ssn", true));
    }

    #[test]
    fn unnamed_or_uninherited_leaves_are_not_targets() {
        assert!(!is_scrub_target(&json!("secret"), "", true));
        assert!(!is_scrub_target(&json!("secret"), "ssn", false));
        assert!(is_scrub_target(&json!("secret"), "ssn", true));
    }

    #[test]
    fn containers_are_never_direct_targets() {
        assert!(!is_scrub_target(&json!({"a": 1}), "profile", true));
        assert!(!is_scrub_target(&json!([1, 2]), "profile", true));
    }
}
