//! Domain-specific assertion macros for nbparse harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* entry broke *which* expectation.

use nbparse_core::BookmarkEntry;

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that an entry carries exactly these tags, in this order.
///
/// ```rust
/// assert_tags!(entry, ["import", "dev", "rust"]);
/// ```
#[macro_export]
macro_rules! assert_tags {
    ($entry:expr, [$($tag:expr),* $(,)?]) => {{
        let entry: &nbparse_core::BookmarkEntry = &$entry;
        let expected: Vec<&str> = vec![$($tag),*];
        let actual: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(
            actual, expected,
            "tags of entry {:?} ({:?})", entry.title, entry.uri
        );
    }};
}

/// Assert the numeric `pub` flag of an entry.
///
/// ```rust
/// assert_pub!(entry, 1);
/// ```
#[macro_export]
macro_rules! assert_pub {
    ($entry:expr, $flag:expr) => {{
        let entry: &nbparse_core::BookmarkEntry = &$entry;
        let expected: u8 = $flag;
        if entry.visibility.as_flag() != expected {
            panic!(
                "assert_pub! failed:\n  expected: {}\n  actual:   {}\n  entry: {:?}",
                expected,
                entry.visibility.as_flag(),
                entry.uri
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Whole-result assertions
// ---------------------------------------------------------------------------

/// Assert that entry titles appear in exactly this order.
pub fn assert_titles(entries: &[BookmarkEntry], expected: &[&str]) {
    let actual: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    pretty_assertions::assert_eq!(actual, expected, "entry order");
}

/// Fields that must hold for every parsed entry regardless of input.
pub fn assert_entry_invariants(entry: &BookmarkEntry) {
    assert!(!entry.title.is_empty(), "title must never be empty: {entry:?}");
    assert!(
        entry.visibility.as_flag() <= 1,
        "pub flag must be 0 or 1: {entry:?}"
    );
}
