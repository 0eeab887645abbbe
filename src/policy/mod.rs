//! Field-level redaction policy.
//!
//! A policy is the immutable set of field names a record type may print in
//! clear text. It is fixed when the type is defined and consulted by every
//! rendering path; nothing else in the crate decides what is visible.

mod allow;

pub use allow::{AllowList, DefineError, REDACTED_PLACEHOLDER};
