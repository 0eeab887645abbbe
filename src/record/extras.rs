//! `RecordValue` implementations for common external scalar types.
//!
//! Enabled per crate: `chrono`, `time` and `uuid` features, or all of them
//! through the `extras` umbrella. All of these are atoms.

use super::value::RecordValue;

#[cfg(any(feature = "chrono", feature = "uuid"))]
macro_rules! impl_record_value_display_atom {
    ($($ty:ty),* $(,)?) => {$(
        impl RecordValue for $ty {
            #[cfg(feature = "json")]
            fn json_value(&self) -> serde_json::Value {
                serde_json::Value::String(self.to_string())
            }
        }
    )*};
}

#[cfg(feature = "chrono")]
impl_record_value_display_atom!(
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::Local>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
);

// The `time` types keep the default debug-string JSON form; their `Display`
// impls live behind that crate's own formatting machinery.
#[cfg(feature = "time")]
impl RecordValue for time::Date {}
#[cfg(feature = "time")]
impl RecordValue for time::Time {}
#[cfg(feature = "time")]
impl RecordValue for time::PrimitiveDateTime {}
#[cfg(feature = "time")]
impl RecordValue for time::OffsetDateTime {}

#[cfg(feature = "uuid")]
impl_record_value_display_atom!(uuid::Uuid);

#[cfg(all(test, feature = "uuid"))]
mod tests {
    use super::super::value::RecordValue;

    #[test]
    fn uuid_renders_as_one_atom() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            id.to_pretty_string(80),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
