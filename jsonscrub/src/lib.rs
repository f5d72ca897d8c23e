//! Reversible masking of sensitive fields in schema-less JSON documents.
//!
//! This crate separates:
//! - **Field lookup** ([`SensitiveFieldSet`]): which field names are sensitive.
//! - **Masking policy** ([`policy`]): pure, format-preserving scalar transforms.
//! - **Traversal** ([`Scrubber`]): the depth-first walk that decides per field
//!   whether to scrub, applies the transforms in place, and records the
//!   originals so a second pass can put them back.
//!
//! What this crate does:
//! - masks every string, boolean, and number under a sensitive field name,
//!   at any depth, including inside arrays
//! - restores the original values (and their original JSON types) from the
//!   ordered [`MaskRecord`] produced by the mask pass
//!
//! What it does not do:
//! - perform I/O or logging
//! - decode or encode JSON text; it operates on an already-decoded
//!   [`serde_json::Value`] tree and mutates it in place
//!
//! # Example
//!
//! ```rust
//! use jsonscrub::{Scrubber, SensitiveFieldSet};
//! use serde_json::json;
//!
//! let original = json!({"id": 1, "ssn": "123-45-6789"});
//! let mut document = original.clone();
//!
//! let scrubber = Scrubber::new(SensitiveFieldSet::from_lines("ssn"));
//! let record = scrubber.mask(&mut document);
//! assert_eq!(document, json!({"id": 1, "ssn": "***-**-****"}));
//!
//! scrubber.restore(&mut document, record).unwrap();
//! assert_eq!(document, original);
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod error;
pub mod fields;
pub mod policy;
mod scrub;

// Re-exports
pub use error::ScrubError;
pub use fields::SensitiveFieldSet;
pub use policy::{BOOL_PLACEHOLDER, MASK_CHAR};
pub use scrub::{MaskRecord, SavedValue, Scrubber};
