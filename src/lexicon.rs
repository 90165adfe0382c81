//! Gender-coded word lexicons.
//!
//! A [`Lexicon`] is a read-only pair of ordered stem lists, one for
//! masculine-coded and one for feminine-coded language. It is built once at
//! startup, either from the embedded reference lists or from a JSON file, and
//! handed to the classifier.
//!
//! # Lexicon files
//!
//! ```json
//! {
//!   "name": "my-lexicon",
//!   "masculine": ["lead-", "compet-"],
//!   "feminine": ["support-", "warm-"]
//! }
//! ```
//!
//! `name` is optional. Anything else that does not match this shape is a
//! configuration error.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DecoderError, Result};

pub mod index;
pub mod reference;
pub mod stem;

pub use index::StemIndex;
pub use stem::{Stem, StemKind};

/// One side of the lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coding {
    Masculine,
    Feminine,
}

impl Coding {
    pub const ALL: [Coding; 2] = [Coding::Masculine, Coding::Feminine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Coding::Masculine => "masculine",
            Coding::Feminine => "feminine",
        }
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of a lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    name: Option<String>,
    masculine: Vec<String>,
    feminine: Vec<String>,
}

/// The masculine and feminine stem lists used for classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    name: String,
    masculine: Vec<Stem>,
    feminine: Vec<Stem>,
}

impl Lexicon {
    /// Build a lexicon from raw entries, validating every stem.
    pub fn new<N, I, J, S, T>(name: N, masculine: I, feminine: J) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let name = name.into();
        let masculine = parse_stems(&name, Coding::Masculine, masculine)?;
        let feminine = parse_stems(&name, Coding::Feminine, feminine)?;

        debug!(
            "Loaded lexicon {name}: {} masculine, {} feminine stems",
            masculine.len(),
            feminine.len()
        );

        Ok(Lexicon {
            name,
            masculine,
            feminine,
        })
    }

    /// The published reference lexicon.
    ///
    /// The embedded lists go through the same validation as any other
    /// lexicon, so an invalid entry is reported rather than skipped.
    pub fn reference() -> Result<Self> {
        Lexicon::new(
            reference::REFERENCE_NAME,
            reference::MASCULINE_CODED_WORDS,
            reference::FEMININE_CODED_WORDS,
        )
    }

    /// Parse a lexicon from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| DecoderError::lexicon(format!("malformed lexicon: {e}")))?;

        Lexicon::new(
            file.name.unwrap_or_else(|| "custom".to_string()),
            file.masculine,
            file.feminine,
        )
    }

    /// Load a lexicon from a JSON file.
    ///
    /// The lexicon is named after the file when the document has no `name`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;

        let file: LexiconFile = serde_json::from_str(&json).map_err(|e| {
            DecoderError::lexicon(format!("malformed lexicon {}: {e}", path.display()))
        })?;

        let name = file.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string())
        });

        Lexicon::new(name, file.masculine, file.feminine)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn masculine(&self) -> &[Stem] {
        &self.masculine
    }

    pub fn feminine(&self) -> &[Stem] {
        &self.feminine
    }

    /// Stems for one coding.
    pub fn stems(&self, coding: Coding) -> &[Stem] {
        match coding {
            Coding::Masculine => &self.masculine,
            Coding::Feminine => &self.feminine,
        }
    }

    /// Raw entries for one coding, as written in the source list.
    pub fn raw_stems(&self, coding: Coding) -> Vec<&str> {
        self.stems(coding).iter().map(Stem::raw).collect()
    }
}

fn parse_stems<I, S>(name: &str, coding: Coding, entries: I) -> Result<Vec<Stem>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            Stem::parse(entry.as_ref()).map_err(|e| {
                DecoderError::lexicon(format!("{name}: {coding} entry {}: {e}", i + 1))
            })
        })
        .collect()
}
