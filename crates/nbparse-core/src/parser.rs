//! BookmarkParser — walks sanitized lines and emits [`BookmarkEntry`] values.
//!
//! After sanitizing, every line holds at most one construct, so the parser is
//! a single pass over a small state machine:
//!
//! | Line                     | Effect                                   |
//! |--------------------------|------------------------------------------|
//! | `<H3 ...>Folder</H3>`    | push the folder tag                      |
//! | `</DL>`                  | pop the innermost folder tag (if any)    |
//! | `<A ...>Title</A>...`    | extract fields, append an entry          |
//! | anything else            | ignored                                  |
//!
//! Each field has its own matcher and is extracted independently from the
//! same line, so a missing attribute only ever affects its own field.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::ParserConfig;
use crate::dates::{parse_date, DatePolicy};
use crate::error::{BookmarkError, Result};
use crate::sanitizer::{NetscapeSanitizer, Sanitize};
use crate::types::{BookmarkEntry, UNTITLED};
use crate::visibility::infer_visibility;

// =============================================================================
// REGEX PATTERNS
// =============================================================================

static FOLDER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<h\d.*>(.*)</h\d>").expect("FOLDER_HEADER: hardcoded regex is valid")
});

static FOLDER_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^</DL>").expect("FOLDER_END: hardcoded regex is valid"));

static LINK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a\b").expect("LINK_START: hardcoded regex is valid"));

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href="(.*?)""#).expect("HREF: hardcoded regex is valid"));

// Folded anchors may carry `<br>` markers inside the opening tag, and quoted
// attribute values may contain a raw `>`.
static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\b(?:"[^"]*"|<br>|[^>"])*>(.*?)</a>"#).expect("TITLE: hardcoded regex is valid")
});

static NOTE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(description|note)="(.*?)""#).expect("NOTE_ATTR: hardcoded regex is valid")
});

static DD_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<dd>(.*)$").expect("DD_CONTENT: hardcoded regex is valid"));

static BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("BREAK: hardcoded regex is valid"));

static TAGS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(tags?|labels?|folders?)="(.*?)""#).expect("TAGS_ATTR: hardcoded regex is valid")
});

static ADD_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)add_date="(.*?)""#).expect("ADD_DATE: hardcoded regex is valid"));

// =============================================================================
// LINE CLASSIFICATION
// =============================================================================

/// What a canonical line means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A folder heading, carrying its raw heading text.
    FolderOpen(&'a str),
    FolderClose,
    Link,
    Other,
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = FOLDER_HEADER.captures(line) {
            let heading = caps.get(1).map_or("", |m| m.as_str());
            Line::FolderOpen(heading)
        } else if FOLDER_END.is_match(line) {
            Line::FolderClose
        } else if LINK_START.is_match(line) {
            Line::Link
        } else {
            Line::Other
        }
    }
}

/// Tags of the folders enclosing the current line, outermost first.
#[derive(Debug, Default)]
struct FolderStack {
    tags: Vec<String>,
}

impl FolderStack {
    fn push(&mut self, tag: String) {
        self.tags.push(tag);
    }

    /// Closing a folder that was never opened is a no-op.
    fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Parses Netscape bookmark files.
///
/// ```no_run
/// use nbparse_core::{BookmarkParser, ParserConfig};
///
/// let mut parser = BookmarkParser::new(ParserConfig::default());
/// let entries = parser.read_file("bookmarks.html")?.parse()?;
/// # Ok::<(), nbparse_core::BookmarkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BookmarkParser<S = NetscapeSanitizer> {
    sanitizer: S,
    config: ParserConfig,
    document: Option<String>,
    source_path: Option<PathBuf>,
}

impl BookmarkParser<NetscapeSanitizer> {
    pub fn new(config: ParserConfig) -> Self {
        Self::with_sanitizer(NetscapeSanitizer, config)
    }
}

impl Default for BookmarkParser<NetscapeSanitizer> {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<S: Sanitize> BookmarkParser<S> {
    pub fn with_sanitizer(sanitizer: S, config: ParserConfig) -> Self {
        Self {
            sanitizer,
            config,
            document: None,
            source_path: None,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Path of the last file loaded with [`read_file`](Self::read_file).
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Load the file at `path` as the working document. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(BookmarkError::FileNotFound { path: path.to_path_buf() });
        }

        let bytes = std::fs::read(path).map_err(|source| BookmarkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded bookmark file");

        self.document = Some(String::from_utf8_lossy(&bytes).into_owned());
        self.source_path = Some(path.to_path_buf());
        Ok(self)
    }

    /// Load an in-memory document, replacing any previously loaded one.
    pub fn load_str(&mut self, document: impl Into<String>) -> &mut Self {
        self.document = Some(document.into());
        self.source_path = None;
        self
    }

    /// Parse the loaded document using the current time.
    pub fn parse(&self) -> Result<Vec<BookmarkEntry>> {
        self.parse_at(Utc::now())
    }

    /// Parse the loaded document as if it were `now`. `now` is the time given
    /// to undated entries and the start of the date-range window.
    pub fn parse_at(&self, now: DateTime<Utc>) -> Result<Vec<BookmarkEntry>> {
        match self.document.as_deref() {
            Some(document) if !document.trim().is_empty() => Ok(self.parse_document(document, now)),
            _ => Err(BookmarkError::EmptyDocument),
        }
    }

    /// Sanitize and parse `markup` directly, without loading it.
    pub fn parse_document(&self, markup: &str, now: DateTime<Utc>) -> Vec<BookmarkEntry> {
        let sanitized = self.sanitizer.sanitize(markup);
        let policy = DatePolicy {
            normalize: self.config.normalize_dates,
            ceiling: self.config.date_range.ceiling(now).timestamp(),
            now: now.timestamp(),
        };

        let mut folders = FolderStack::default();
        let mut entries = Vec::new();

        for (index, line) in sanitized.lines().enumerate() {
            let line = line.trim();
            match Line::classify(line) {
                Line::FolderOpen(heading) => {
                    let tag = self.sanitizer.sanitize_tag_string(heading);
                    tracing::debug!(line = index + 1, tag = %tag, "folder opened");
                    folders.push(tag);
                }
                Line::FolderClose => {
                    let closed = folders.pop();
                    tracing::debug!(line = index + 1, tag = ?closed, "folder closed");
                }
                Line::Link => {
                    let entry = self.extract_entry(line, folders.tags(), &policy);
                    tracing::debug!(line = index + 1, uri = %entry.uri, tags = ?entry.tags, "link found");
                    entries.push(entry);
                }
                Line::Other => {}
            }
        }

        tracing::info!(entries = entries.len(), "bookmark parsing finished");
        entries
    }

    fn extract_entry(&self, line: &str, folder_tags: &[String], policy: &DatePolicy) -> BookmarkEntry {
        BookmarkEntry {
            uri: extract_uri(line),
            title: extract_title(line),
            note: extract_note(line),
            tags: self.extract_tags(line, folder_tags),
            time: extract_time(line, policy),
            visibility: infer_visibility(line, &self.config.boolean_tokens, self.config.default_pub),
        }
    }

    /// Default tags, then folder tags, then the entry's own tags.
    fn extract_tags(&self, line: &str, folder_tags: &[String]) -> Vec<String> {
        let mut tags = self.config.default_tags.clone();

        if self.config.keep_nested_tags {
            tags.extend_from_slice(folder_tags);
        }

        if let Some(caps) = TAGS_ATTR.captures(line) {
            tags.extend(
                caps[2]
                    .replace(',', " ")
                    .split(' ')
                    .filter(|tag| !tag.is_empty())
                    .map(String::from),
            );
        }

        tags
    }
}

// =============================================================================
// FIELD EXTRACTORS
// =============================================================================

fn extract_uri(line: &str) -> String {
    HREF.captures(line)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

fn extract_title(line: &str) -> String {
    TITLE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// An explicit note attribute wins over the `<DD>` body.
fn extract_note(line: &str) -> String {
    if let Some(caps) = NOTE_ATTR.captures(line) {
        return caps[2].to_string();
    }

    DD_CONTENT
        .captures(line)
        .map(|caps| BREAK.replace_all(&caps[1], "\n").into_owned())
        .unwrap_or_default()
}

fn extract_time(line: &str, policy: &DatePolicy) -> i64 {
    ADD_DATE
        .captures(line)
        .map_or(policy.now, |caps| parse_date(&caps[1], policy))
}

// =============================================================================
// TESTS
// =============================================================================
