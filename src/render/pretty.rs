//! Width-aware record layout.
//!
//! Builds the document for one record: an outer bracketed group holding a
//! comma-separated field list, one breakable before each field, and a
//! bracket-less inner group per value so an oversized value can drop to its
//! own line without breaking the rest of the list.

use crate::{
    policy::REDACTED_PLACEHOLDER,
    pretty::PrettyPrinter,
    record::{Record, RecordValue},
};

pub(crate) fn print_record(record: &Record, printer: &mut PrettyPrinter) {
    let ty = record.record_type();
    let header = match ty.name() {
        Some(name) => format!("#<{} {name}", ty.kind().header()),
        None => format!("#<{}", ty.kind().header()),
    };
    printer.group(1, &header, ">", |q| {
        q.seplist(
            record.entries(),
            |q| q.text(","),
            |q, (field, value)| {
                q.breakable();
                q.text(format!("{field}="));
                q.nested_group(1, |q| {
                    q.breakable_sep("");
                    if ty.is_allowed(field) {
                        value.pretty_print(q);
                    } else {
                        q.text(REDACTED_PLACEHOLDER);
                    }
                });
            },
        );
    });
}
