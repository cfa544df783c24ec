//! Core types for nbparse-core.
//!
//! This module defines the record produced for every bookmark link found in
//! the document, [`BookmarkEntry`], and its [`Visibility`] flag.

use serde::{Deserialize, Serialize};

/// Title given to entries whose anchor carries no text.
pub const UNTITLED: &str = "untitled";

/// A single bookmark extracted from the document.
///
/// No field is optional: anything missing from the markup is replaced by its
/// documented default so callers never have to deal with absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    /// Link target (`HREF`). Empty when the anchor has none.
    pub uri: String,
    /// Anchor text, or [`UNTITLED`].
    pub title: String,
    /// Free-form description. Multi-line descriptions keep their line breaks.
    pub note: String,
    /// Default tags, then inherited folder tags, then the entry's own tags.
    /// Duplicates are kept.
    pub tags: Vec<String>,
    /// Creation time as a Unix timestamp (seconds).
    pub time: i64,
    /// Serialized as `pub`: `1` for public, `0` for private.
    #[serde(rename = "pub")]
    pub visibility: Visibility,
}

impl BookmarkEntry {
    /// `true` when the entry should be shared publicly.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Whether a bookmark is shared. Encoded as `0`/`1` on the wire and in
/// configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn from_public(public: bool) -> Self {
        if public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// The numeric `pub` flag.
    pub fn as_flag(self) -> u8 {
        match self {
            Visibility::Private => 0,
            Visibility::Public => 1,
        }
    }
}

impl From<Visibility> for u8 {
    fn from(visibility: Visibility) -> Self {
        visibility.as_flag()
    }
}

impl TryFrom<u8> for Visibility {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Visibility::Private),
            1 => Ok(Visibility::Public),
            other => Err(format!("visibility flag must be 0 or 1, got {other}")),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Public => write!(f, "public"),
        }
    }
}
