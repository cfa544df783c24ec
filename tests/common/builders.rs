//! Test builders — ergonomic constructors for `BookmarkEntry` values and
//! parser runs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use nbparse_core::{BookmarkEntry, BookmarkParser, ParserConfig, Visibility};

use super::fixtures::fixed_now;

// ---------------------------------------------------------------------------
// BookmarkEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`BookmarkEntry`] values.
///
/// # Example
///
/// ```rust
/// let expected = BookmarkEntryBuilder::new("http://x.test")
///     .title("My Link")
///     .tags(["a", "b"])
///     .time(1_000_000_000)
///     .build();
/// ```
pub struct BookmarkEntryBuilder {
    uri: String,
    title: String,
    note: String,
    tags: Vec<String>,
    time: i64,
    visibility: Visibility,
}

impl BookmarkEntryBuilder {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: "untitled".to_string(),
            note: String::new(),
            tags: Vec::new(),
            time: fixed_now().timestamp(),
            visibility: Visibility::Private,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn build(self) -> BookmarkEntry {
        BookmarkEntry {
            uri: self.uri,
            title: self.title,
            note: self.note,
            tags: self.tags,
            time: self.time,
            visibility: self.visibility,
        }
    }
}

// ---------------------------------------------------------------------------
// Parser runs
// ---------------------------------------------------------------------------

/// Parse `markup` with the default configuration at [`fixed_now`].
pub fn parse_default(markup: &str) -> Vec<BookmarkEntry> {
    parse_with(ParserConfig::default(), markup)
}

/// Parse `markup` with `config` at [`fixed_now`].
pub fn parse_with(config: ParserConfig, markup: &str) -> Vec<BookmarkEntry> {
    let mut parser = BookmarkParser::new(config);
    parser
        .load_str(markup)
        .parse_at(fixed_now())
        .expect("fixture documents are never empty")
}

/// Parse a single-entry document and return that entry.
pub fn parse_one(config: ParserConfig, markup: &str) -> BookmarkEntry {
    let mut entries = parse_with(config, markup);
    assert_eq!(entries.len(), 1, "expected exactly one entry from {markup:?}");
    entries.remove(0)
}
