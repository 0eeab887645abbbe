//! Redaction-safe JSON output.
//!
//! `Serialize` for [`Record`] emits a JSON object in which allowed fields
//! carry their value's JSON form and every other field carries the
//! placeholder string, so a record handed to any serde-based sink is safe
//! without special-casing. A nested record serializes through its own
//! policy.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value as JsonValue;

use crate::{
    policy::REDACTED_PLACEHOLDER,
    record::{Record, RecordValue},
};

impl Record {
    /// Redaction-safe JSON form of this record.
    #[must_use]
    pub fn to_redacted_json(&self) -> JsonValue {
        record_json(self)
    }
}

pub(crate) fn record_json(record: &Record) -> JsonValue {
    let ty = record.record_type();
    let entries = record.entries().map(|(field, value)| {
        let json = if ty.is_allowed(field) {
            value.json_value()
        } else {
            JsonValue::String(REDACTED_PLACEHOLDER.to_owned())
        };
        (field.to_owned(), json)
    });
    JsonValue::Object(entries.collect())
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ty = self.record_type();
        let mut map = serializer.serialize_map(Some(self.fields().len()))?;
        for (field, value) in self.entries() {
            if ty.is_allowed(field) {
                map.serialize_entry(field, &value.json_value())?;
            } else {
                map.serialize_entry(field, REDACTED_PLACEHOLDER)?;
            }
        }
        map.end()
    }
}
