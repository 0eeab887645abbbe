//! The single-line renderer behind `Debug` and `Display`.

use std::fmt;

use crate::{policy::REDACTED_PLACEHOLDER, record::Record};

/// Writes `#<KIND [NAME] field=value field=[REDACTED] ...>`.
///
/// Fields follow declaration order; allowed values render through their own
/// `Debug`. An anonymous type omits the name segment entirely, with no
/// doubled space.
pub(crate) fn fmt_flat(record: &Record, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let ty = record.record_type();
    f.write_str("#<")?;
    f.write_str(ty.kind().header())?;
    if let Some(name) = ty.name() {
        write!(f, " {name}")?;
    }
    for (field, value) in record.entries() {
        if ty.is_allowed(field) {
            write!(f, " {field}={value:?}")?;
        } else {
            write!(f, " {field}={REDACTED_PLACEHOLDER}")?;
        }
    }
    f.write_str(">")
}
