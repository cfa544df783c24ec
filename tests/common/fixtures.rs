//! Static bookmark documents used across harnesses.
//!
//! Each fixture is a `&'static str` shaped like a real browser export. The
//! high-volume generator is intentionally large to exercise the whole
//! pipeline without touching the filesystem.

use chrono::{DateTime, TimeZone, Utc};

/// The clock every harness parses against: 2026-01-01T00:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// A typical Firefox/Chrome export: header noise, a comment, nested folders,
/// a multi-line description, and a trailing unbalanced `</DL>`.
pub const EXPORT_NESTED: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>

<DL><p>
    <DT><H3 ADD_DATE="1400000000" LAST_MODIFIED="1400000001">Programming Languages</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1500000000" TAGS="rust,systems">Rust</A>
        <DD>A language empowering everyone
to build reliable software.
        <DT><H3>Docs!</H3>
        <DL><p>
            <DT><A HREF="https://doc.rust-lang.org/std/" ADD_DATE="1500000001">std</A>
        </DL><p>
    </DL><p>
    <DT><A HREF="https://news.ycombinator.com/" ADD_DATE="1500000002" PRIVATE="0">Hacker News</A>
</DL><p>
</DL><p>
"#;

/// A Shaarli-style export using the alternative attribute spellings.
pub const EXPORT_SHAARLI: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Shaares</TITLE>
<H1>Shaares</H1>
<DL><p>
<DT><A HREF="https://example.org/a" ADD_DATE="1600000000123" PUBLISHED="yes" LABELS="one two">First</A>
<DT><A HREF="https://example.org/b" ADD_DATE="2020-05-17" SHARED="no" NOTE="inline note">Second</A>
<DD>ignored because NOTE wins
<DT><A HREF="https://example.org/c" PUB="off" FOLDER="x,y">Third</A>
<DT><A ADD_DATE="">No Link</A>
<DT><A HREF="https://example.org/e"></A>
</DL><p>
"#;

/// Garbage and unrecognised lines mixed with one real entry.
pub const EXPORT_NOISY: &str = "random text\n<HR>\n</DL>\n<DT><A HREF=\"https://ok.test\">Ok</A>\n<table><tr><td>cell</td></tr></table>\n";

/// Generate `n` bookmarks spread over nested folders, for throughput and
/// ordering tests. Entry `i` has title `Entry {i}`.
pub fn export_high_volume(n: usize) -> String {
    let mut doc = String::from("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n<H1>Bookmarks</H1>\n<DL><p>\n");
    for i in 0..n {
        if i % 50 == 0 {
            if i > 0 {
                doc.push_str("</DL><p>\n");
            }
            doc.push_str(&format!("<DT><H3>Folder {}</H3>\n<DL><p>\n", i / 50));
        }
        doc.push_str(&format!(
            "    <DT><A HREF=\"https://example.com/{i}\" ADD_DATE=\"{}\" TAGS=\"t{}\">Entry {i}</A>\n",
            1_500_000_000 + i,
            i % 7,
        ));
        if i % 3 == 0 {
            doc.push_str(&format!("    <DD>Description {i}\nsecond line\n"));
        }
    }
    doc.push_str("</DL><p>\n</DL><p>\n");
    doc
}
