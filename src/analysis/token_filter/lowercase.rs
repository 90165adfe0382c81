//! Lowercase filter implementation.
//!
//! Stem matching is case-insensitive, so every token is lowercased before it
//! reaches the stem index. The spelling the token had in the job ad is kept in
//! its metadata, which is what ends up in the reported match lists.
//!
//! # Examples
//!
//! ```
//! use gender_decoder::analysis::token_filter::Filter;
//! use gender_decoder::analysis::token_filter::lowercase::LowercaseFilter;
//! use gender_decoder::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Lead", 0), Token::new("TEAM", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "lead");
//! assert_eq!(filtered[0].original_text(), "Lead");
//! assert_eq!(filtered[1].text, "team");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Lowercasing is Unicode-aware. An `original_text` recorded by an earlier
/// filter is never overwritten.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                let original = token.original_text().to_string();
                token.with_text(lowered).with_original_text(original)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
