//! `RecordValue` implementations for standard library types.
//!
//! Scalars and strings render as atoms through their `Debug` form. `Option`,
//! `Vec` and `BTreeMap` open their own groups so they take part in
//! width-aware layout. `HashMap`/`HashSet` are deliberately absent: their
//! iteration order would make rendering nondeterministic, and rendering here
//! must be a pure function of `(value, width)`.
//!
//! ## Map keys are not redacted
//!
//! Map entries render their keys in clear text. Redaction applies to the
//! fields of the record holding the map, never inside a field's value. Do not
//! put sensitive data in map keys.

use std::{borrow::Cow, collections::BTreeMap, sync::Arc};

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use super::value::RecordValue;
use crate::pretty::PrettyPrinter;

// =============================================================================
// Atoms (scalars and strings)
// =============================================================================

macro_rules! impl_record_value_copy_atom {
    ($($ty:ty),* $(,)?) => {$(
        impl RecordValue for $ty {
            #[cfg(feature = "json")]
            fn json_value(&self) -> JsonValue {
                JsonValue::from(*self)
            }
        }
    )*};
}

impl_record_value_copy_atom!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

// 128-bit integers fall back to the debug-string JSON form; serde_json
// numbers do not cover the full 128-bit range.
impl RecordValue for i128 {}
impl RecordValue for u128 {}

impl RecordValue for char {
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

impl RecordValue for () {
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::Null
    }
}

impl RecordValue for String {
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl RecordValue for &str {
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::String((*self).to_owned())
    }
}

impl RecordValue for Cow<'_, str> {
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::String(self.as_ref().to_owned())
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<T: RecordValue + ?Sized> RecordValue for Box<T> {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        (**self).pretty_print(printer);
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        (**self).json_value()
    }
}

impl<T: RecordValue + ?Sized> RecordValue for Arc<T> {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        (**self).pretty_print(printer);
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        (**self).json_value()
    }
}

impl<T: RecordValue> RecordValue for Option<T> {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        match self {
            None => printer.text("None"),
            Some(value) => printer.group(1, "Some(", ")", |q| {
                q.breakable_sep("");
                value.pretty_print(q);
            }),
        }
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        self.as_ref().map_or(JsonValue::Null, RecordValue::json_value)
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<T: RecordValue> RecordValue for Vec<T> {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        printer.group(1, "[", "]", |q| {
            q.seplist(
                self,
                |q| {
                    q.text(",");
                    q.breakable();
                },
                |q, item| item.pretty_print(q),
            );
        });
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(RecordValue::json_value).collect())
    }
}

impl<V: RecordValue> RecordValue for BTreeMap<String, V> {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        printer.group(1, "{", "}", |q| {
            q.seplist(
                self,
                |q| {
                    q.text(",");
                    q.breakable();
                },
                |q, (key, value)| {
                    q.text(format!("{key:?}: "));
                    value.pretty_print(q);
                },
            );
        });
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.json_value()))
                .collect(),
        )
    }
}
