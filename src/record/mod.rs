//! Runtime-defined record types with field-level redaction.
//!
//! This module provides the record machinery:
//!
//! - **`kind`**: the [`RecordKind`] tag picked by the factory the caller used
//! - **`ty`**: [`RecordType`] descriptors and their builders
//! - **`instance`**: [`Record`] values (construction, field lookup)
//! - **`value`**: the [`RecordValue`] capability trait field values implement
//! - **`containers`**: `RecordValue` implementations for std types
//! - **`extras`**: `RecordValue` implementations for external scalar types
//!   behind the `chrono`/`time`/`uuid` features

mod containers;
#[cfg(any(feature = "chrono", feature = "time", feature = "uuid"))]
mod extras;
mod instance;
mod kind;
mod ty;
mod value;

pub use instance::{InstanceError, Record};
pub use kind::RecordKind;
pub use ty::{RecordType, RecordTypeBuilder};
pub use value::{FieldValue, RecordValue};
