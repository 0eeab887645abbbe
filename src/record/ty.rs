//! Record type descriptors and their builders.

use std::{fmt, sync::Arc};

use super::{
    instance::{InstanceError, Record},
    kind::RecordKind,
    value::FieldValue,
};
use crate::policy::{AllowList, DefineError};

/// Immutable descriptor of a runtime-defined record type.
///
/// Cheap to clone and share: the descriptor lives behind an `Arc`, is fixed
/// once [`define`](RecordTypeBuilder::define) returns, and is read
/// concurrently without locking. Every instance keeps a handle back to its
/// type for policy lookups; nothing ever mutates through it.
#[derive(Clone)]
pub struct RecordType {
    def: Arc<TypeDef>,
}

#[derive(Debug)]
struct TypeDef {
    name: Option<String>,
    kind: RecordKind,
    keyword_init: bool,
    fields: Vec<String>,
    allowed: AllowList,
}

impl RecordType {
    /// Starts a named struct-kind type.
    pub fn struct_builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder::new(RecordKind::Struct, Some(name.into()))
    }

    /// Starts an anonymous struct-kind type.
    #[must_use]
    pub fn anonymous_struct() -> RecordTypeBuilder {
        RecordTypeBuilder::new(RecordKind::Struct, None)
    }

    /// Starts a named data-kind type.
    pub fn data_builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder::new(RecordKind::Data, Some(name.into()))
    }

    /// Starts an anonymous data-kind type.
    #[must_use]
    pub fn anonymous_data() -> RecordTypeBuilder {
        RecordTypeBuilder::new(RecordKind::Data, None)
    }

    /// The type's name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.def.name.as_deref()
    }

    /// The kind tag picked by the factory that built this type.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.def.kind
    }

    /// Whether construction is keyword-only.
    #[must_use]
    pub fn keyword_init(&self) -> bool {
        self.def.keyword_init
    }

    /// Declared field names, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.def.fields
    }

    /// The allow list fixed at definition time, in the order it was given.
    #[must_use]
    pub fn allowed_fields(&self) -> &[String] {
        self.def.allowed.names()
    }

    /// Whether `field` may be printed in clear text.
    #[must_use]
    pub fn is_allowed(&self, field: &str) -> bool {
        self.def.allowed.is_allowed(field)
    }

    /// Builds an instance from positional values, one per declared field.
    pub fn instance(
        &self,
        values: impl IntoIterator<Item = FieldValue>,
    ) -> Result<Record, InstanceError> {
        Record::positional(self, values)
    }

    /// Builds an instance from `(field, value)` pairs; every declared field
    /// must appear exactly once.
    pub fn keyword_instance<K, I>(&self, pairs: I) -> Result<Record, InstanceError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        Record::keyword(self, pairs)
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.def.name)
            .field("kind", &self.def.kind)
            .field("fields", &self.def.fields)
            .field("allowed", &self.def.allowed.names())
            .finish()
    }
}

/// Builder for [`RecordType`].
///
/// Obtained from the per-kind factories on [`RecordType`]; the kind is part
/// of the factory choice, not a setter.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    kind: RecordKind,
    name: Option<String>,
    fields: Vec<String>,
    allow: Option<Vec<String>>,
    redact: Option<Vec<String>>,
    keyword_init: bool,
}

impl RecordTypeBuilder {
    fn new(kind: RecordKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            fields: Vec::new(),
            allow: None,
            redact: None,
            keyword_init: false,
        }
    }

    /// Declares one field. Call order is declaration order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Declares fields in order.
    #[must_use]
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names the fields that may print in clear text.
    ///
    /// Mutually exclusive with [`redact`](Self::redact).
    #[must_use]
    pub fn allow<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Names the fields to redact; every other declared field is allowed.
    ///
    /// Mutually exclusive with [`allow`](Self::allow).
    #[must_use]
    pub fn redact<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redact
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Requires keyword construction for this type.
    ///
    /// Data-kind types accept keyword construction regardless; setting this on
    /// one additionally rejects positional construction.
    #[must_use]
    pub fn keyword_init(mut self, keyword_init: bool) -> Self {
        self.keyword_init = keyword_init;
        self
    }

    /// Validates the declaration and freezes the type.
    ///
    /// Fails on duplicate field names, on an allow/redact entry that names no
    /// declared field, and on giving both an allow list and a redact list.
    pub fn define(self) -> Result<RecordType, DefineError> {
        for (index, field) in self.fields.iter().enumerate() {
            if self.fields[..index].contains(field) {
                return Err(DefineError::DuplicateField {
                    field: field.clone(),
                });
            }
        }
        let allowed = match (self.allow, self.redact) {
            (Some(_), Some(_)) => return Err(DefineError::ConflictingPolicy),
            (Some(allow), None) => AllowList::new(&self.fields, allow)?,
            (None, Some(redact)) => AllowList::complement(&self.fields, redact)?,
            (None, None) => AllowList::empty(),
        };
        Ok(RecordType {
            def: Arc::new(TypeDef {
                name: self.name,
                kind: self.kind,
                keyword_init: self.keyword_init,
                fields: self.fields,
                allowed,
            }),
        })
    }
}
