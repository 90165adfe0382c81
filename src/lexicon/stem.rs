//! Word stems.
//!
//! A stem ending in the prefix marker `-` matches every word that starts with
//! it ("compet-" matches "compete", "competitive", "competent"). A stem without
//! the marker only matches the identical word. Matching ignores case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecoderError, Result};

/// Trailing marker that turns a stem into a prefix.
pub const PREFIX_MARKER: char = '-';

/// How a stem is compared against a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemKind {
    /// Matches any word starting with the stem key.
    Prefix,
    /// Matches only a word equal to the stem key.
    Exact,
}

/// A single lexicon entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stem {
    raw: String,
    key: String,
    kind: StemKind,
}

impl Stem {
    /// Parse a lexicon entry.
    ///
    /// Surrounding whitespace is ignored. Fails when nothing but the marker
    /// is left, or when the stem contains whitespace: words never do, so such
    /// a stem could never match.
    pub fn parse(entry: &str) -> Result<Self> {
        let raw = entry.trim();
        let (body, kind) = match raw.strip_suffix(PREFIX_MARKER) {
            Some(body) => (body, StemKind::Prefix),
            None => (raw, StemKind::Exact),
        };

        if body.is_empty() {
            return Err(DecoderError::lexicon(format!(
                "stem must not be empty (got {entry:?})"
            )));
        }
        if body.chars().any(char::is_whitespace) {
            return Err(DecoderError::lexicon(format!(
                "stem must be a single word (got {entry:?})"
            )));
        }

        Ok(Stem {
            raw: raw.to_string(),
            key: body.to_lowercase(),
            kind,
        })
    }

    /// The entry exactly as written in the lexicon.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lowercase text compared against words, without the marker.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> StemKind {
        self.kind
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
