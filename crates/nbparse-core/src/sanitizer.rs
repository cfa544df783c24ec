//! Sanitizer — rewrites raw bookmark markup into canonical lines.
//!
//! Browser exports are loosely formatted HTML: tags share lines, descriptions
//! span several lines, comments and header noise are scattered around. The
//! sanitizer normalises all of that so that each bookmark occupies exactly one
//! physical line (`<A HREF="...">Title</A><DD>Description`), which is what
//! makes the line-oriented parser possible.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// =============================================================================
// REGEX PATTERNS
// =============================================================================

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT: hardcoded regex is valid"));

static TAG_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*<").expect("TAG_GAP: hardcoded regex is valid"));

static NOISE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:<!DOCTYPE|<META|<TITLE|<H1|<P).*(?:\n|$)")
        .expect("NOISE_LINE: hardcoded regex is valid")
});

static DESCRIPTION_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<DD>(.*?)(</?(?:DT|DD|DL)|\z)").expect("DESCRIPTION_BODY: hardcoded regex is valid")
});

// An anchor with no `</A>` ends where the next entry or list tag begins.
static ANCHOR_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<A)\b(.*?)(</A>|\n</?(?:DT|DD|DL)\b|\z)").expect("ANCHOR_BODY: hardcoded regex is valid")
});

static BREAK_AFTER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n(<br>)").expect("BREAK_AFTER_NEWLINE: hardcoded regex is valid")
});

static DD_AFTER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n(<DD)").expect("DD_AFTER_NEWLINE: hardcoded regex is valid")
});

static TAG_JUNK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}\-_]+").expect("TAG_JUNK: hardcoded regex is valid")
});

/// Marker standing in for a line break inside a folded description or anchor.
pub const LINE_BREAK: &str = "<br>";

// =============================================================================
// SANITIZER SEAM
// =============================================================================

/// Turns raw markup into the canonical line-per-entry form the parser reads.
pub trait Sanitize {
    /// Normalise a whole document.
    fn sanitize(&self, markup: &str) -> String;

    /// Normalise a folder heading into a tag string.
    fn sanitize_tag_string(&self, tags: &str) -> String {
        sanitize_tag_string(tags)
    }
}

/// The sanitizer for Netscape bookmark files.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetscapeSanitizer;

impl Sanitize for NetscapeSanitizer {
    fn sanitize(&self, markup: &str) -> String {
        let text = strip_comments(markup);
        let text = split_tags(&text);
        let text = drop_noise_lines(&text);
        let text = normalize_whitespace(&text);
        let text = fold_descriptions(&text);
        let text = fold_anchors(&text);
        fuse_entry_lines(&text)
    }
}

/// Lower-case a heading and reduce each space-separated word to letters,
/// digits, `-` and `_`. Words left empty are dropped.
///
/// ```
/// use nbparse_core::sanitize_tag_string;
///
/// assert_eq!(sanitize_tag_string("Books!"), "books");
/// assert_eq!(sanitize_tag_string("sci-fi_2 a$b"), "sci-fi_2 ab");
/// ```
pub fn sanitize_tag_string(tags: &str) -> String {
    tags.to_lowercase()
        .split(' ')
        .filter_map(|token| {
            if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Some(token.to_string());
            }
            let token = token
                .strip_prefix(|c: char| c.is_ascii_punctuation())
                .unwrap_or(token);
            let cleaned = TAG_JUNK.replace_all(token, "");
            (!cleaned.is_empty()).then(|| cleaned.into_owned())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// PIPELINE STEPS
// =============================================================================

fn strip_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

/// Put every tag on its own line.
fn split_tags(text: &str) -> String {
    TAG_GAP.replace_all(text, ">\n<").into_owned()
}

/// Drop the doctype, meta, title, top-level heading and paragraph lines.
fn drop_noise_lines(text: &str) -> String {
    NOISE_LINE.replace_all(text, "").into_owned()
}

fn normalize_whitespace(text: &str) -> String {
    text.trim().replace('\r', "").replace('\t', " ")
}

/// Fold each multi-line `<DD>` body onto a single line.
fn fold_descriptions(text: &str) -> String {
    DESCRIPTION_BODY
        .replace_all(text, |caps: &Captures| {
            let body = caps[1].trim().replace('\n', LINE_BREAK);
            match &caps[2] {
                "" => format!("<DD>{body}"),
                boundary => format!("<DD>{body}\n{boundary}"),
            }
        })
        .into_owned()
}

/// Fold each multi-line `<A ...>...</A>` onto a single line. Unclosed
/// anchors are left as they are.
fn fold_anchors(text: &str) -> String {
    ANCHOR_BODY
        .replace_all(text, |caps: &Captures| {
            if !caps[3].eq_ignore_ascii_case("</A>") {
                return caps[0].to_string();
            }
            let inner = &caps[2];
            let lead = if inner.starts_with(char::is_whitespace) { " " } else { "" };
            format!(
                "{}{lead}{}{}",
                &caps[1],
                inner.trim().replace('\n', LINE_BREAK),
                &caps[3]
            )
        })
        .into_owned()
}

/// Join each anchor line with the description line that follows it.
fn fuse_entry_lines(text: &str) -> String {
    let text = BREAK_AFTER_NEWLINE.replace_all(text, "${1}");
    DD_AFTER_NEWLINE.replace_all(&text, "${1}").into_owned()
}

// =============================================================================
// TESTS
// =============================================================================
