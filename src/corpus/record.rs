//! Corpus row types.

use serde::{Deserialize, Serialize};

use crate::classifier::{Assessment, Verdict};
use crate::corpus::category::Category;
use crate::corpus::word_list::{format_word_list, parse_word_list};

/// One job ad as collected from a job search.
///
/// Only `description` is needed for classification. Columns not listed here
/// are ignored when reading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAd {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    /// 1-based data row the ad was read from (0 when built in code)
    #[serde(skip)]
    pub row: usize,
}

impl JobAd {
    /// Build an ad from its description alone.
    pub fn from_description<S: Into<String>>(description: S) -> Self {
        JobAd {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_company<S: Into<String>>(mut self, company_name: S) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// The description, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }

    pub fn category(&self) -> Category {
        self.query
            .as_deref()
            .map_or(Category::Other, Category::from_query)
    }
}

/// A job ad with its classification merged in, as written to CSV.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedAd {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub query: Option<String>,
    pub description: String,
    pub result: Verdict,
    pub masculine_coded_words: String,
    pub feminine_coded_words: String,
    pub num_masculine_words: usize,
    pub num_feminine_words: usize,
}

impl AnnotatedAd {
    pub fn new(ad: JobAd, assessment: &Assessment) -> Self {
        AnnotatedAd {
            title: ad.title,
            company_name: ad.company_name,
            location: ad.location,
            query: ad.query,
            description: ad.description.unwrap_or_default(),
            result: assessment.verdict(),
            masculine_coded_words: format_word_list(&assessment.masculine_words()),
            feminine_coded_words: format_word_list(&assessment.feminine_words()),
            num_masculine_words: assessment.masculine_count(),
            num_feminine_words: assessment.feminine_count(),
        }
    }
}

/// An annotated row ready for aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub category: Category,
    pub verdict: Verdict,
    pub masculine_words: Vec<String>,
    pub feminine_words: Vec<String>,
}

impl CorpusRow {
    /// Parse the stored columns of an annotated ad.
    ///
    /// Returns `None` when the verdict is unknown or a word list is missing
    /// or cannot be parsed.
    pub fn from_stored(stored: StoredAd) -> Option<Self> {
        let verdict: Verdict = stored.result.as_deref()?.parse().ok()?;
        let masculine_words = parse_word_list(stored.masculine_coded_words.as_deref()?)?;
        let feminine_words = parse_word_list(stored.feminine_coded_words.as_deref()?)?;

        Some(CorpusRow {
            title: stored.title,
            company_name: stored.company_name,
            category: stored
                .query
                .as_deref()
                .map_or(Category::Other, Category::from_query),
            verdict,
            masculine_words,
            feminine_words,
        })
    }
}

/// The columns of an annotated CSV row, as read back from disk.
///
/// Every column is optional so that rows written by other tools still
/// deserialize; [`CorpusRow::from_stored`] decides whether they are usable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StoredAd {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub masculine_coded_words: Option<String>,
    #[serde(default)]
    pub feminine_coded_words: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::CodedWord;

    fn stored(ad: &AnnotatedAd) -> StoredAd {
        StoredAd {
            title: ad.title.clone(),
            company_name: ad.company_name.clone(),
            query: ad.query.clone(),
            description: Some(ad.description.clone()),
            result: Some(ad.result.to_string()),
            masculine_coded_words: Some(ad.masculine_coded_words.clone()),
            feminine_coded_words: Some(ad.feminine_coded_words.clone()),
        }
    }

    fn coded(word: &str) -> CodedWord {
        CodedWord {
            word: word.to_string(),
            stem: format!("{word}-"),
            start_offset: 0,
            end_offset: word.len(),
            occurrences: 1,
        }
    }

    #[test]
    fn test_job_ad_text() {
        assert_eq!(JobAd::from_description("Lead").text(), Some("Lead"));
        assert_eq!(JobAd::from_description("   ").text(), None);
        assert_eq!(JobAd::default().text(), None);
    }

    #[test]
    fn test_job_ad_category() {
        let ad = JobAd::from_description("x").with_query("Data Scientist");
        assert_eq!(ad.category(), Category::Scientist);
        assert_eq!(JobAd::default().category(), Category::Other);
    }

    #[test]
    fn test_annotated_round_trip() {
        let assessment = Assessment::new(vec![coded("driven"), coded("Leader")], vec![coded("warm")]);
        let ad = JobAd::from_description("...")
            .with_query("engineer")
            .with_company("Acme");

        let annotated = AnnotatedAd::new(ad, &assessment);
        assert_eq!(annotated.result, Verdict::MasculineCoded);
        assert_eq!(annotated.masculine_coded_words, "['driven', 'Leader']");
        assert_eq!(annotated.num_masculine_words, 2);
        assert_eq!(annotated.num_feminine_words, 1);

        let row = CorpusRow::from_stored(stored(&annotated)).unwrap();
        assert_eq!(row.category, Category::Engineer);
        assert_eq!(row.company_name.as_deref(), Some("Acme"));
        assert_eq!(row.masculine_words, vec!["driven", "Leader"]);
        assert_eq!(row.feminine_words, vec!["warm"]);
    }

    #[test]
    fn test_unparseable_list_is_missing() {
        let mut annotated = AnnotatedAd::new(JobAd::from_description("x"), &Assessment::empty());
        annotated.feminine_coded_words = "nan".to_string();
        assert!(CorpusRow::from_stored(stored(&annotated)).is_none());

        let mut columns = stored(&AnnotatedAd::new(
            JobAd::from_description("x"),
            &Assessment::empty(),
        ));
        columns.result = Some("balanced".to_string());
        assert!(CorpusRow::from_stored(columns.clone()).is_none());
        columns.result = None;
        assert!(CorpusRow::from_stored(columns).is_none());
    }
}
