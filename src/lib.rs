//! Redaction-guarded record types for safe logging and debugging.
//!
//! This crate provides record types defined at runtime from a field list and
//! an allow list. Printing an instance through any generic path (`Debug`,
//! `Display`, the width-aware pretty printer, or the structured logging
//! integrations) emits `[REDACTED]` for every field that was not explicitly
//! allowed when the type was defined.
//!
//! What this crate does:
//! - defines record types (fields + allow policy) through per-kind factories
//! - renders instances as a single line (`Debug`/`Display`) or width-aware
//!   across multiple lines, with redaction applied identically in both
//! - provides integrations behind feature flags (e.g. `json`, `slog`,
//!   `tracing`)
//!
//! What it does not do:
//! - protect values in memory; this is a display-time mask, not encryption
//! - redact inside a field's value; redaction is per field of the outer
//!   record, and a nested record applies its own policy
//!
//! # Example
//!
//! ```rust
//! use redacted_record::RecordType;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = RecordType::anonymous_struct()
//!     .fields(["username", "password", "api_key"])
//!     .allow(["username"])
//!     .define()?;
//!
//! let instance = credentials.instance([
//!     "example".into(),
//!     "super secret".into(),
//!     "123456".into(),
//! ])?;
//!
//! assert_eq!(
//!     instance.to_string(),
//!     r#"#<struct username="example" password=[REDACTED] api_key=[REDACTED]>"#,
//! );
//! # Ok(())
//! # }
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
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
pub mod policy;
pub mod pretty;
pub mod record;
mod render;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from the policy module
pub use policy::{AllowList, DefineError, REDACTED_PLACEHOLDER};
// Re-exports from the pretty module
pub use pretty::PrettyPrinter;
// Re-exports from the record module
pub use record::{
    FieldValue, InstanceError, Record, RecordKind, RecordType, RecordTypeBuilder, RecordValue,
};
#[cfg(feature = "slog")]
pub use slog::SlogRedacted;
#[cfg(feature = "tracing")]
pub use tracing::RecordTracingExt;
