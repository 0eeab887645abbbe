//! The record kind tag.

/// Which aggregate flavor a record type was defined as.
///
/// The kind is fixed by the factory the caller picked and never inferred from
/// anything else. It selects the header literal in rendered output
/// (`#<struct ...>` vs `#<data ...>`) and the accepted construction styles:
/// `Struct` types take positional values unless defined with `keyword_init`,
/// `Data` types accept both styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Struct-flavored: positional construction by default.
    Struct,
    /// Data-flavored: positional and keyword construction both accepted.
    Data,
}

impl RecordKind {
    /// Header literal used by the renderers.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Data => "data",
        }
    }
}
