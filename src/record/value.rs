//! The capability trait record field values implement.

use std::fmt;

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use crate::pretty::PrettyPrinter;

/// A value that can live in a record field.
///
/// The `Debug` supertrait drives the single-line flat rendering (strings come
/// out quoted, numbers bare); the [`pretty_print`](Self::pretty_print) hook
/// drives the width-aware rendering. Types whose textual form is a single
/// atom get both for free from `Debug`; container-like types override
/// `pretty_print` to take part in line breaking.
///
/// `Send + Sync` are required so records stay shareable across threads the
/// same way their types are.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be stored in a record field",
    label = "this type does not implement `RecordValue`",
    note = "implement `RecordValue` for it; the provided methods render the `Debug` form"
)]
pub trait RecordValue: fmt::Debug + Send + Sync {
    /// Emits this value into the pretty printer.
    ///
    /// The default renders the `Debug` form as one unbreakable atom.
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        printer.text(format!("{self:?}"));
    }

    /// Renders this value on its own against `width`.
    fn to_pretty_string(&self, width: usize) -> String {
        let mut printer = PrettyPrinter::new(width);
        self.pretty_print(&mut printer);
        printer.render()
    }

    /// JSON form used by the structured logging surfaces.
    ///
    /// The default stringifies the `Debug` form; scalar implementations map
    /// to native JSON scalars instead.
    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        JsonValue::String(format!("{self:?}"))
    }
}

/// An owned, boxed field value.
///
/// Anything implementing [`RecordValue`] converts with `.into()`, so
/// positional construction reads as a plain value list.
pub struct FieldValue(Box<dyn RecordValue>);

impl FieldValue {
    /// Boxes `value` as a field value.
    pub fn new<T: RecordValue + 'static>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Borrows the underlying value.
    #[must_use]
    pub fn value(&self) -> &dyn RecordValue {
        &*self.0
    }
}

impl<T: RecordValue + 'static> From<T> for FieldValue {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
