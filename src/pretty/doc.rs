//! Document nodes and the layout pass.

/// One node of a built document.
pub(crate) enum Doc {
    /// Literal text, never split.
    Text(String),
    /// Either the separator text (flat) or a newline plus `indent` spaces
    /// (broken). `indent` is the indentation captured when the breakable was
    /// emitted.
    Breakable { sep: String, indent: usize },
    /// `open`, then the body, then `close`. The body's breakables activate
    /// only when the flat body does not fit the remaining width.
    Group {
        open: String,
        close: String,
        body: Vec<Doc>,
    },
}

/// Width of literal text, counted in scalar values.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Width of `docs` if everything rendered on one line.
pub(crate) fn flat_width(docs: &[Doc]) -> usize {
    docs.iter()
        .map(|doc| match doc {
            Doc::Text(text) => text_width(text),
            Doc::Breakable { sep, .. } => text_width(sep),
            Doc::Group { open, close, body } => {
                text_width(open) + flat_width(body) + text_width(close)
            }
        })
        .sum()
}

/// Lays out `docs` into `out`.
///
/// `flat` is true when an enclosing group already decided its whole body fits
/// on the current line; nested groups inside a flat group never re-break.
pub(crate) fn render(docs: &[Doc], width: usize, out: &mut String, column: &mut usize, flat: bool) {
    for doc in docs {
        match doc {
            Doc::Text(text) => {
                out.push_str(text);
                *column += text_width(text);
            }
            Doc::Breakable { sep, indent } => {
                if flat {
                    out.push_str(sep);
                    *column += text_width(sep);
                } else {
                    out.push('\n');
                    for _ in 0..*indent {
                        out.push(' ');
                    }
                    *column = *indent;
                }
            }
            Doc::Group { open, close, body } => {
                out.push_str(open);
                *column += text_width(open);
                let fits = flat || *column + flat_width(body) + text_width(close) <= width;
                render(body, width, out, column, fits);
                out.push_str(close);
                *column += text_width(close);
            }
        }
    }
}
