//! Word tokenizer for job-ad text.
//!
//! A word is a maximal run of alphabetic characters. A single ASCII hyphen
//! between two alphabetic runs stays inside the word, so "self-confident" and
//! "co-operative" come out whole and can meet hyphenated stems such as
//! `self-confiden-`. Hyphens at either end of a run, doubled hyphens, digits,
//! apostrophes, whitespace and all other punctuation separate words.
//!
//! Markup is not stripped here; `<b>lead</b>` yields "b", "lead", "b".

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Alphabetic runs joined by single internal hyphens.
pub const WORD_PATTERN: &str = r"\p{Alphabetic}+(?:-\p{Alphabetic}+)*";

/// Splits text into alphabetic words, keeping internal hyphens.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    words: RegexTokenizer,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        Ok(WordTokenizer {
            words: RegexTokenizer::with_pattern(WORD_PATTERN)?,
        })
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .words
            .tokens(text)
            .into_iter()
            .map(|token| {
                let token_type = if token.text.contains('-') {
                    TokenType::HyphenatedWord
                } else {
                    TokenType::Word
                };
                token.with_token_type(token_type)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
