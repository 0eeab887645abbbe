//! Record instances: construction and field access.

use std::{error::Error, fmt};

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use super::{
    kind::RecordKind,
    ty::RecordType,
    value::{FieldValue, RecordValue},
};
use crate::{pretty::PrettyPrinter, render};

/// One value of a [`RecordType`].
///
/// Holds exactly one value per declared field, in declaration order; the
/// constructors below are the only way to obtain one, so that alignment can
/// never be violated afterwards. `Debug` and `Display` both produce the
/// redacted single-line form; [`RecordValue::to_pretty_string`] produces the
/// width-aware form under the same policy.
pub struct Record {
    ty: RecordType,
    values: Vec<FieldValue>,
}

impl Record {
    pub(crate) fn positional(
        ty: &RecordType,
        values: impl IntoIterator<Item = FieldValue>,
    ) -> Result<Self, InstanceError> {
        if ty.keyword_init() {
            return Err(InstanceError::PositionalOnKeywordType);
        }
        let values: Vec<FieldValue> = values.into_iter().collect();
        if values.len() != ty.fields().len() {
            return Err(InstanceError::ArityMismatch {
                expected: ty.fields().len(),
                given: values.len(),
            });
        }
        Ok(Self {
            ty: ty.clone(),
            values,
        })
    }

    pub(crate) fn keyword<K, I>(ty: &RecordType, pairs: I) -> Result<Self, InstanceError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        if ty.kind() == RecordKind::Struct && !ty.keyword_init() {
            return Err(InstanceError::KeywordOnPositionalType);
        }
        let mut slots: Vec<Option<FieldValue>> = ty.fields().iter().map(|_| None).collect();
        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(index) = ty.fields().iter().position(|field| field == key) else {
                return Err(InstanceError::UnknownField {
                    field: key.to_owned(),
                });
            };
            if slots[index].is_some() {
                return Err(InstanceError::DuplicateField {
                    field: key.to_owned(),
                });
            }
            slots[index] = Some(value);
        }
        let mut values = Vec::with_capacity(slots.len());
        for (slot, field) in slots.into_iter().zip(ty.fields()) {
            match slot {
                Some(value) => values.push(value),
                None => {
                    return Err(InstanceError::MissingField {
                        field: field.clone(),
                    });
                }
            }
        }
        Ok(Self {
            ty: ty.clone(),
            values,
        })
    }

    /// The type this record belongs to.
    #[must_use]
    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    /// Declared field names, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        self.ty.fields()
    }

    /// The allow list fixed when the type was defined. Delegates to the type.
    #[must_use]
    pub fn allowed_fields(&self) -> &[String] {
        self.ty.allowed_fields()
    }

    /// Looks up a field value by name.
    ///
    /// Returns `None` only for names that are not declared fields; a declared
    /// field always has a value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&dyn RecordValue> {
        let index = self.ty.fields().iter().position(|name| name == field)?;
        self.values.get(index).map(FieldValue::value)
    }

    /// `(field, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &dyn RecordValue)> + '_ {
        self.ty
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(FieldValue::value))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::flat::fmt_flat(self, f)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::flat::fmt_flat(self, f)
    }
}

impl RecordValue for Record {
    fn pretty_print(&self, printer: &mut PrettyPrinter) {
        render::pretty::print_record(self, printer);
    }

    #[cfg(feature = "json")]
    fn json_value(&self) -> JsonValue {
        crate::json::record_json(self)
    }
}

/// Errors raised while constructing a record instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceError {
    /// Positional construction got the wrong number of values.
    ArityMismatch {
        /// Declared field count.
        expected: usize,
        /// Values actually given.
        given: usize,
    },
    /// A keyword pair names no declared field.
    UnknownField {
        /// The offending name.
        field: String,
    },
    /// A keyword pair was given more than once.
    DuplicateField {
        /// The repeated name.
        field: String,
    },
    /// Keyword construction left a declared field without a value.
    MissingField {
        /// The missing name.
        field: String,
    },
    /// Positional construction on a type that requires keyword construction.
    PositionalOnKeywordType,
    /// Keyword construction on a struct type defined without `keyword_init`.
    KeywordOnPositionalType,
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch { expected, given } => {
                write!(f, "expected {expected} positional values, got {given}")
            }
            Self::UnknownField { field } => write!(f, "no field named {field:?}"),
            Self::DuplicateField { field } => {
                write!(f, "field {field:?} was given more than once")
            }
            Self::MissingField { field } => write!(f, "missing value for field {field:?}"),
            Self::PositionalOnKeywordType => {
                f.write_str("this type requires keyword construction")
            }
            Self::KeywordOnPositionalType => {
                f.write_str("this type requires positional construction")
            }
        }
    }
}

impl Error for InstanceError {}
