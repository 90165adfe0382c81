//! The word-coding classifier.
//!
//! The classifier runs job-ad text through an analyzer, looks every token up
//! in the masculine and feminine stem indices and decides a [`Verdict`] from
//! the number of distinct words found on each side.
//!
//! # Examples
//!
//! ```
//! use gender_decoder::classifier::{Classifier, Verdict};
//!
//! let classifier = Classifier::reference().unwrap();
//! let assessment = classifier
//!     .assess("A competitive, self-reliant engineer.")
//!     .unwrap();
//!
//! assert_eq!(assessment.masculine_words(), vec!["competitive", "self-reliant"]);
//! assert_eq!(assessment.feminine_count(), 0);
//! assert_eq!(assessment.verdict(), Verdict::StronglyMasculineCoded);
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer::{Analyzer, JobAdAnalyzer};
use crate::analysis::token::Token;
use crate::error::Result;
use crate::lexicon::{Coding, Lexicon, Stem, StemIndex};

pub mod assessment;
pub mod explanation;
pub mod verdict;

pub use assessment::{Assessment, CodedWord};
pub use explanation::explain;
pub use verdict::Verdict;

/// Classifies text against a lexicon.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Clone)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
    analyzer: Arc<dyn Analyzer>,
    masculine: StemIndex,
    feminine: StemIndex,
}

impl Classifier {
    /// Create a classifier using the default job-ad analyzer.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self::with_analyzer(lexicon, Arc::new(JobAdAnalyzer::new()?)))
    }

    /// Create a classifier with a custom analyzer.
    pub fn with_analyzer(lexicon: Arc<Lexicon>, analyzer: Arc<dyn Analyzer>) -> Self {
        let masculine = StemIndex::new(lexicon.masculine());
        let feminine = StemIndex::new(lexicon.feminine());

        Classifier {
            lexicon,
            analyzer,
            masculine,
            feminine,
        }
    }

    /// Create a classifier over the embedded reference lexicon.
    pub fn reference() -> Result<Self> {
        Self::new(Arc::new(Lexicon::reference()?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Classify one text.
    ///
    /// Any text is acceptable: empty input, input without words and input
    /// without matches all come back as a neutral assessment.
    pub fn assess(&self, text: &str) -> Result<Assessment> {
        let mut masculine = Hits::default();
        let mut feminine = Hits::default();

        for token in self.analyzer.analyze(text)? {
            let key = token.text.to_lowercase();

            if let Some(i) = self.masculine.lookup(&key) {
                masculine.record(&key, &token, &self.lexicon.stems(Coding::Masculine)[i]);
            }
            if let Some(i) = self.feminine.lookup(&key) {
                feminine.record(&key, &token, &self.lexicon.stems(Coding::Feminine)[i]);
            }
        }

        let assessment = Assessment::new(masculine.words, feminine.words);
        debug!(
            "Assessed {} bytes: {} ({} masculine, {} feminine)",
            text.len(),
            assessment.verdict(),
            assessment.masculine_count(),
            assessment.feminine_count()
        );

        Ok(assessment)
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("lexicon", &self.lexicon.name())
            .field("analyzer", &self.analyzer.name())
            .field("masculine_stems", &self.masculine.len())
            .field("feminine_stems", &self.feminine.len())
            .finish()
    }
}

/// Classify `text` against `lexicon` with the default analyzer.
///
/// Convenience for one-off calls; build a [`Classifier`] once when
/// classifying many texts.
pub fn assess(text: &str, lexicon: &Lexicon) -> Result<Assessment> {
    Classifier::new(Arc::new(lexicon.clone()))?.assess(text)
}

/// Distinct words matched for one coding, in first-seen order.
#[derive(Default)]
struct Hits {
    words: Vec<CodedWord>,
    seen: AHashMap<String, usize>,
}

impl Hits {
    fn record(&mut self, key: &str, token: &Token, stem: &Stem) {
        if let Some(&i) = self.seen.get(key) {
            self.words[i].occurrences += 1;
            return;
        }

        self.seen.insert(key.to_string(), self.words.len());
        self.words.push(CodedWord {
            word: token.original_text().to_string(),
            stem: stem.raw().to_string(),
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            occurrences: 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::PipelineAnalyzer;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    fn reference() -> Classifier {
        Classifier::reference().unwrap()
    }

    #[test]
    fn test_no_words_is_neutral() {
        let classifier = reference();
        for text in ["", "   ", "123 456", "!!! --- ???", "2024-01-01"] {
            let assessment = classifier.assess(text).unwrap();
            assert_eq!(assessment.masculine_count(), 0, "{text:?}");
            assert_eq!(assessment.feminine_count(), 0, "{text:?}");
            assert_eq!(assessment.verdict(), Verdict::Neutral);
        }
    }

    #[test]
    fn test_case_insensitive_match_keeps_spelling() {
        let classifier = reference();
        let upper = classifier.assess("LEAD this team").unwrap();
        let lower = classifier.assess("lead this team").unwrap();

        assert_eq!(upper.masculine_words(), vec!["LEAD"]);
        assert_eq!(lower.masculine_words(), vec!["lead"]);
        assert_eq!(upper.masculine_matches()[0].stem, "lead-");
        assert_eq!(upper.verdict(), lower.verdict());
    }

    #[test]
    fn test_prefix_stems() {
        let classifier = reference();
        for word in ["competitive", "competent", "compete", "Competition"] {
            let assessment = classifier.assess(word).unwrap();
            assert_eq!(assessment.masculine_words(), vec![word]);
            assert_eq!(assessment.masculine_matches()[0].stem, "compet-");
        }
        assert_eq!(classifier.assess("comp").unwrap().masculine_count(), 0);
    }

    #[test]
    fn test_repeated_word_recorded_once() {
        let classifier = reference();
        let assessment = classifier
            .assess("Lead the team. We lead by example, and LEAD with care.")
            .unwrap();

        assert_eq!(assessment.masculine_count(), 1);
        let lead = &assessment.masculine_matches()[0];
        assert_eq!(lead.word, "Lead");
        assert_eq!(lead.occurrences, 3);
        assert_eq!((lead.start_offset, lead.end_offset), (0, 4));
    }

    #[test]
    fn test_variants_of_one_stem_are_distinct_words() {
        let classifier = reference();
        let assessment = classifier.assess("leader, leadership, leads").unwrap();

        assert_eq!(
            assessment.masculine_words(),
            vec!["leader", "leadership", "leads"]
        );
        assert_eq!(assessment.masculine_count(), 3);
    }

    #[test]
    fn test_word_matching_two_stems_counts_once() {
        // "dominant" matches both "domina-" and "dominant-".
        let classifier = reference();
        let assessment = classifier.assess("a dominant player").unwrap();

        assert_eq!(assessment.masculine_count(), 1);
        assert_eq!(assessment.masculine_matches()[0].stem, "domina-");
    }

    #[test]
    fn test_hyphenated_words() {
        let classifier = reference();
        let assessment = classifier
            .assess("Self-confident and co-operative; head-strong.")
            .unwrap();

        assert_eq!(
            assessment.masculine_words(),
            vec!["Self-confident", "head-strong"]
        );
        assert_eq!(assessment.masculine_matches()[0].stem, "self-confiden-");
        assert_eq!(assessment.feminine_words(), vec!["co-operative"]);
        assert_eq!(assessment.feminine_matches()[0].stem, "co-operat-");
    }

    #[test]
    fn test_order_of_first_appearance() {
        let classifier = reference();
        let assessment = classifier
            .assess("Warm, supportive and kind. Also warm.")
            .unwrap();

        assert_eq!(assessment.feminine_words(), vec!["Warm", "supportive", "kind"]);
        assert_eq!(assessment.feminine_matches()[0].occurrences, 2);
    }

    #[test]
    fn test_overlapping_lexicons_match_both_sides() {
        let lexicon = Lexicon::new("overlap", ["team-"], ["team-", "warm-"]).unwrap();
        let assessment = assess("Teamwork matters", &lexicon).unwrap();

        assert_eq!(assessment.masculine_words(), vec!["Teamwork"]);
        assert_eq!(assessment.feminine_words(), vec!["Teamwork"]);
        assert_eq!(assessment.verdict(), Verdict::Neutral);
    }

    #[test]
    fn test_exact_stem_path() {
        let lexicon = Lexicon::new("exact", ["ninja"], ["nurtur-"]).unwrap();
        let classifier = Classifier::new(Arc::new(lexicon)).unwrap();

        assert_eq!(classifier.assess("a Ninja").unwrap().masculine_count(), 1);
        assert_eq!(classifier.assess("ninjas").unwrap().masculine_count(), 0);
        assert_eq!(classifier.assess("ninj").unwrap().masculine_count(), 0);
    }

    #[test]
    fn test_custom_analyzer_without_lowercasing() {
        let analyzer = PipelineAnalyzer::new(Arc::new(
            RegexTokenizer::with_pattern(r"[A-Za-z]+").unwrap(),
        ));
        let classifier =
            Classifier::with_analyzer(Arc::new(Lexicon::reference().unwrap()), Arc::new(analyzer));

        let assessment = classifier.assess("AMBITIOUS").unwrap();
        assert_eq!(assessment.masculine_words(), vec!["AMBITIOUS"]);
    }

    #[test]
    fn test_idempotent() {
        let classifier = reference();
        let text = "Driven, loyal and analytical. Must be decisive but gentle.";
        assert_eq!(classifier.assess(text).unwrap(), classifier.assess(text).unwrap());
    }

    #[test]
    fn test_debug() {
        let debug = format!("{:?}", reference());
        assert!(debug.contains("gaucher-friesen-kay-2011"));
        assert!(debug.contains("job_ad"));
    }
}
