//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into word tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Extracts every match of a regular expression
//! - [`word::WordTokenizer`] - Alphabetic words with token-internal hyphens
//!
//! # Examples
//!
//! ```
//! use gender_decoder::analysis::tokenizer::Tokenizer;
//! use gender_decoder::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Self-confident, 5+ years").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Self-confident");
//! assert_eq!(tokens[1].text, "years");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a classifier holding a tokenizer can be
/// shared across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod word;
