//! Mask/restore traversal over decoded JSON documents.
//!
//! This module provides the machinery for one mask→restore cycle:
//!
//! - **`record`**: the ordered ledger of original values ([`MaskRecord`],
//!   [`SavedValue`])
//! - **`walk`**: the depth-first traversal that masks scrub targets in place
//!   and later replays the identical walk to write the originals back
//!   ([`Scrubber`])
//!
//! Scalar transforms live in [`crate::policy`]; field-name lookup lives in
//! [`crate::fields`].

mod record;
mod walk;

pub use record::{MaskRecord, SavedValue};
pub use walk::Scrubber;
