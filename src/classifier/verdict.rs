//! Verdicts and the rule that picks one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DecoderError, Result};

/// The overall gender coding of a job ad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "strongly masculine-coded")]
    StronglyMasculineCoded,
    #[serde(rename = "masculine-coded")]
    MasculineCoded,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "feminine-coded")]
    FeminineCoded,
    #[serde(rename = "strongly feminine-coded")]
    StronglyFeminineCoded,
}

impl Verdict {
    /// All verdicts, from most masculine to most feminine.
    pub const ALL: [Verdict; 5] = [
        Verdict::StronglyMasculineCoded,
        Verdict::MasculineCoded,
        Verdict::Neutral,
        Verdict::FeminineCoded,
        Verdict::StronglyFeminineCoded,
    ];

    /// Decide the verdict from the number of masculine and feminine matches.
    ///
    /// Equal counts (zero included) are neutral. Otherwise the larger side
    /// wins, and it is "strongly" coded when the other side has no matches.
    pub fn decide(masculine: usize, feminine: usize) -> Self {
        use std::cmp::Ordering;

        match masculine.cmp(&feminine) {
            Ordering::Equal => Verdict::Neutral,
            Ordering::Greater if feminine == 0 => Verdict::StronglyMasculineCoded,
            Ordering::Greater => Verdict::MasculineCoded,
            Ordering::Less if masculine == 0 => Verdict::StronglyFeminineCoded,
            Ordering::Less => Verdict::FeminineCoded,
        }
    }

    /// The lowercase label, as stored in corpus files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::StronglyMasculineCoded => "strongly masculine-coded",
            Verdict::MasculineCoded => "masculine-coded",
            Verdict::Neutral => "neutral",
            Verdict::FeminineCoded => "feminine-coded",
            Verdict::StronglyFeminineCoded => "strongly feminine-coded",
        }
    }

    /// Title-cased label for headings ("Strongly Masculine-Coded").
    pub fn title(&self) -> String {
        let mut title = String::with_capacity(self.as_str().len());
        let mut boundary = true;
        for c in self.as_str().chars() {
            if boundary {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            boundary = !c.is_alphabetic();
        }
        title
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Verdict::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DecoderError::invalid_argument(format!("unknown verdict: {s:?}")))
    }
}
