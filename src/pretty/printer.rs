//! The document builder.

use super::doc::{self, Doc};

/// Width-aware document builder with group/breakable semantics.
///
/// Build a document with [`text`](Self::text), [`breakable`](Self::breakable)
/// and [`group`](Self::group), then call [`render`](Self::render) to lay it
/// out against the configured width.
pub struct PrettyPrinter {
    width: usize,
    indent: usize,
    stack: Vec<Vec<Doc>>,
    current: Vec<Doc>,
}

impl PrettyPrinter {
    /// Creates a builder that fits lines against `width` columns.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            indent: 0,
            stack: Vec::new(),
            current: Vec::new(),
        }
    }

    /// The line width this printer fits against.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Emits literal text. Text is never split, regardless of width.
    pub fn text(&mut self, text: impl Into<String>) {
        self.current.push(Doc::Text(text.into()));
    }

    /// Emits a breakable point rendered as a single space when the enclosing
    /// group stays flat.
    pub fn breakable(&mut self) {
        self.breakable_sep(" ");
    }

    /// Emits a breakable point rendered as `sep` when the enclosing group
    /// stays flat, or as a newline plus the current indentation when it
    /// breaks.
    pub fn breakable_sep(&mut self, sep: &str) {
        self.current.push(Doc::Breakable {
            sep: sep.to_owned(),
            indent: self.indent,
        });
    }

    /// Opens a bracketed group: `open`, the body built by `body`, then
    /// `close`.
    ///
    /// The group renders flat when its whole flat form fits the remaining
    /// width; otherwise each breakable directly inside it becomes a line
    /// break. `indent` is added to the indentation captured by those
    /// breakables for the extent of the body.
    pub fn group(&mut self, indent: usize, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.stack.push(std::mem::take(&mut self.current));
        self.indent += indent;
        body(self);
        self.indent -= indent;
        let group_body = std::mem::replace(&mut self.current, self.stack.pop().unwrap_or_default());
        self.current.push(Doc::Group {
            open: open.to_owned(),
            close: close.to_owned(),
            body: group_body,
        });
    }

    /// A group with no surrounding brackets.
    ///
    /// The body decides its own flat-or-broken fate independently of its
    /// siblings, which is what lets one oversized value drop to its own line
    /// without breaking the rest of the list.
    pub fn nested_group(&mut self, indent: usize, body: impl FnOnce(&mut Self)) {
        self.group(indent, "", "", body);
    }

    /// Intersperses `sep` between consecutive items; `each` renders one item.
    pub fn seplist<T, I, S, F>(&mut self, items: I, mut sep: S, mut each: F)
    where
        I: IntoIterator<Item = T>,
        S: FnMut(&mut Self),
        F: FnMut(&mut Self, T),
    {
        let mut first = true;
        for item in items {
            if first {
                first = false;
            } else {
                sep(self);
            }
            each(self, item);
        }
    }

    /// Lays out everything built so far and returns the rendered string.
    #[must_use]
    pub fn render(self) -> String {
        let mut out = String::new();
        let mut column = 0;
        doc::render(&self.current, self.width, &mut out, &mut column, false);
        out
    }
}
