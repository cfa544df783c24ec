//! nbparse-core — Netscape bookmark file parsing.
//!
//! Converts the HTML-flavoured bookmark export every browser produces into an
//! ordered list of [`BookmarkEntry`] records.
//!
//! # Pipeline
//!
//! ```text
//! raw markup ──► Sanitizer ──► canonical lines ──► BookmarkParser ──► Vec<BookmarkEntry>
//!                                                     │
//!                                                     ├──► dates (epoch normalisation)
//!                                                     └──► visibility (public/private)
//! ```
//!
//! The sanitizer rewrites irregular markup into one logical construct per
//! line; the parser then walks those lines once, tracking folder nesting so
//! entries inherit their folder names as tags.

pub mod config;
pub mod dates;
pub mod error;
pub mod parser;
pub mod sanitizer;
pub mod types;
pub mod visibility;

pub use config::{BooleanTokens, Config, DateRange, ParserConfig, RangeUnit};
pub use error::{BookmarkError, Result};
pub use parser::BookmarkParser;
pub use sanitizer::{sanitize_tag_string, NetscapeSanitizer, Sanitize};
pub use types::{BookmarkEntry, Visibility};
