//! Error types for the mask/restore cycle.

use thiserror::Error;

/// Consistency failures detected while restoring a masked document.
///
/// Both variants mean the document or the record was mutated between the
/// mask pass and the restore pass, or that the two traversals diverged.
/// Either way the original values can no longer be placed reliably, so
/// callers must treat these as fatal rather than continue with a partially
/// restored tree.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// The mask record ran out of values before the restore traversal
    /// reached every scrub target.
    #[error("mask record exhausted before restore completed; the document changed between passes")]
    RecordExhausted,

    /// The restore traversal finished with values still queued in the
    /// mask record.
    #[error(
        "{remaining} recorded value(s) left over after restore; the document changed between passes"
    )]
    RecordLeftover {
        /// Number of values that were never written back.
        remaining: usize,
    },
}
