//! Analyzers combine a tokenizer with token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Stem Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. N
//! ```
//!
//! # Available Implementations
//!
//! - [`JobAdAnalyzer`] - Word tokenizer + lowercasing, used by the classifier
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use gender_decoder::analysis::analyzer::{Analyzer, JobAdAnalyzer};
//!
//! let analyzer = JobAdAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Decisive, Self-Reliant").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "decisive");
//! assert_eq!(tokens[1].text, "self-reliant");
//! assert_eq!(tokens[1].original_text(), "Self-Reliant");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

mod job_ad;
mod pipeline;

pub use job_ad::JobAdAnalyzer;
pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
