//! The result of classifying one text.

use serde::{Deserialize, Serialize};

use crate::classifier::explanation::explain;
use crate::classifier::verdict::Verdict;
use crate::lexicon::Coding;

/// One gender-coded word found in a text.
///
/// Each distinct word (ignoring case) is recorded once per coding, with the
/// spelling and byte offsets of its first appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedWord {
    /// The word exactly as it appeared in the text
    pub word: String,

    /// The lexicon entry it matched
    pub stem: String,

    /// Byte offset of the first appearance
    pub start_offset: usize,

    /// Byte offset just past the first appearance
    pub end_offset: usize,

    /// How many times the word appears in the text
    pub occurrences: usize,
}

/// Classification of one text: matched words on both sides and the verdict.
///
/// The verdict is derived from the match lists when the assessment is built,
/// so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assessment {
    verdict: Verdict,
    masculine: Vec<CodedWord>,
    feminine: Vec<CodedWord>,
}

impl Assessment {
    pub fn new(masculine: Vec<CodedWord>, feminine: Vec<CodedWord>) -> Self {
        Assessment {
            verdict: Verdict::decide(masculine.len(), feminine.len()),
            masculine,
            feminine,
        }
    }

    /// An assessment with no matches.
    pub fn empty() -> Self {
        Assessment::new(Vec::new(), Vec::new())
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Masculine-coded words in order of first appearance.
    pub fn masculine_matches(&self) -> &[CodedWord] {
        &self.masculine
    }

    /// Feminine-coded words in order of first appearance.
    pub fn feminine_matches(&self) -> &[CodedWord] {
        &self.feminine
    }

    pub fn matches(&self, coding: Coding) -> &[CodedWord] {
        match coding {
            Coding::Masculine => &self.masculine,
            Coding::Feminine => &self.feminine,
        }
    }

    pub fn masculine_count(&self) -> usize {
        self.masculine.len()
    }

    pub fn feminine_count(&self) -> usize {
        self.feminine.len()
    }

    pub fn count(&self, coding: Coding) -> usize {
        self.matches(coding).len()
    }

    /// The matched words for one coding, verbatim.
    pub fn words(&self, coding: Coding) -> Vec<&str> {
        self.matches(coding).iter().map(|w| w.word.as_str()).collect()
    }

    pub fn masculine_words(&self) -> Vec<&str> {
        self.words(Coding::Masculine)
    }

    pub fn feminine_words(&self) -> Vec<&str> {
        self.words(Coding::Feminine)
    }

    /// Human-readable reason for the verdict.
    pub fn explanation(&self) -> String {
        explain(self.verdict, self.masculine_count(), self.feminine_count())
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Assessment::empty()
    }
}
