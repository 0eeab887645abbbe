//! Adapters for emitting records through `slog`.
//!
//! This module connects [`Record`] with `slog` so that generic structured
//! logging emits the redacted form, never raw field data. The emitted value
//! is the redacted JSON object, carried through `slog`'s nested-value
//! support.
//!
//! It does not configure `slog` and does not decide redaction policy; both
//! belong to the caller and the record type respectively.

use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::record::Record;

/// Marker trait for types whose `slog` integration always emits redacted
/// output.
///
/// Implemented only for sink adapters that redact before logging; never a
/// blanket impl for raw types.
///
/// ```compile_fail
/// use redacted_record::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl SlogValue for Record {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.to_redacted_json());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for Record {}
