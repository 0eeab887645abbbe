//! A small width-aware layout engine: groups, breakables, separator lists.
//!
//! Output is built as a document of three node kinds:
//!
//! - **text**: literal output, never split;
//! - **breakable**: a point that renders as its separator text when the line
//!   has room, or as a newline plus indentation when it does not;
//! - **group**: a bracketed region that renders flat when its whole flat form
//!   fits the remaining width, and otherwise turns every breakable directly
//!   inside it into a line break.
//!
//! Breakables capture the indentation accumulated from their enclosing groups
//! at the point they are emitted, so a group opened with indent 1 hangs its
//! broken lines one column past its parent's.
//!
//! The engine knows nothing about records or redaction; callers build a
//! document and ask for the rendered string.

mod doc;
mod printer;

pub use printer::PrettyPrinter;
