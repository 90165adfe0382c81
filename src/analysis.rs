//! Text analysis for the gender decoder.
//!
//! Raw job-ad text flows through a small pipeline before stem matching:
//! a [`tokenizer::Tokenizer`] splits it into word tokens, [`token_filter::Filter`]s
//! normalize those tokens, and an [`analyzer::Analyzer`] ties the two together.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
