//! The allow list and definition-time errors.

use std::{error::Error, fmt};

/// Placeholder emitted in place of a redacted field value.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Immutable allow policy for one record type.
///
/// Field names in the list render in clear text; every other declared field
/// renders as [`REDACTED_PLACEHOLDER`]. The list is fixed when the owning
/// record type is defined and never changes afterwards, so it can be read
/// concurrently without synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    allowed: Vec<String>,
}

impl AllowList {
    /// Builds an allow policy from the declared field list and the names to
    /// allow.
    ///
    /// An allowed name that is not a declared field is a hard error. A typo in
    /// an allow list should fail where it was written, not leave a field
    /// silently redacted forever.
    pub fn new<I, S>(fields: &[String], allowed: I) -> Result<Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        for name in &allowed {
            if !fields.contains(name) {
                return Err(DefineError::UnknownPolicyField {
                    field: name.clone(),
                });
            }
        }
        Ok(Self { allowed })
    }

    /// Builds the complement policy: every declared field except `redacted`.
    ///
    /// The resulting allow list follows field declaration order. Unknown names
    /// in `redacted` are rejected the same way [`AllowList::new`] rejects
    /// them.
    pub fn complement<I, S>(fields: &[String], redacted: I) -> Result<Self, DefineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let redacted: Vec<String> = redacted.into_iter().map(Into::into).collect();
        for name in &redacted {
            if !fields.contains(name) {
                return Err(DefineError::UnknownPolicyField {
                    field: name.clone(),
                });
            }
        }
        let allowed = fields
            .iter()
            .filter(|field| !redacted.contains(*field))
            .cloned()
            .collect();
        Ok(Self { allowed })
    }

    /// The policy that redacts every field.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allowed: Vec::new(),
        }
    }

    /// Whether `field` may be printed in clear text.
    #[must_use]
    pub fn is_allowed(&self, field: &str) -> bool {
        self.allowed.iter().any(|name| name == field)
    }

    /// The allowed names, in the order they were given.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.allowed
    }
}

/// Errors raised while defining a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefineError {
    /// An allow or redact entry does not name a declared field.
    UnknownPolicyField {
        /// The offending name.
        field: String,
    },
    /// The same field name was declared more than once.
    DuplicateField {
        /// The repeated name.
        field: String,
    },
    /// Both an allow list and a redact list were given.
    ConflictingPolicy,
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPolicyField { field } => {
                write!(f, "allow/redact entry {field:?} is not a declared field")
            }
            Self::DuplicateField { field } => {
                write!(f, "field {field:?} is declared more than once")
            }
            Self::ConflictingPolicy => {
                f.write_str("a record type takes an allow list or a redact list, not both")
            }
        }
    }
}

impl Error for DefineError {}
