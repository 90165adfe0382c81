//! The analyzer the classifier runs over job-ad text.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// Word tokenization followed by lowercasing.
///
/// Each emitted token carries the lowercase text used for stem matching and
/// the verbatim spelling from the ad in `original_text`.
#[derive(Clone, Debug)]
pub struct JobAdAnalyzer {
    inner: PipelineAnalyzer,
}

impl JobAdAnalyzer {
    /// Create the default job-ad analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WordTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("job_ad");

        Ok(JobAdAnalyzer { inner })
    }
}

impl Analyzer for JobAdAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "job_ad"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenType};

    #[test]
    fn test_job_ad_analyzer() {
        let analyzer = JobAdAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer
            .analyze("We need a Head-Strong, LOYAL engineer (5 yrs).")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["we", "need", "a", "head-strong", "loyal", "engineer", "yrs"]
        );
        assert_eq!(tokens[3].original_text(), "Head-Strong");
        assert_eq!(tokens[3].token_type(), Some(TokenType::HyphenatedWord));
        assert_eq!(tokens[4].original_text(), "LOYAL");
    }

    #[test]
    fn test_empty_text() {
        let analyzer = JobAdAnalyzer::new().unwrap();
        assert_eq!(analyzer.analyze("").unwrap().count(), 0);
        assert_eq!(analyzer.name(), "job_ad");
    }
}
