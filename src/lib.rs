//! # Gender Decoder
//!
//! Finds subtly gender-coded language in job advertisements.
//!
//! Research by Gaucher, Friesen and Kay (2011) showed that job ads using more
//! masculine-coded words ("competitive", "dominant") are less appealing to
//! women, without anyone noticing why. This crate looks for those words.
//!
//! ## Features
//!
//! - Stem-based matching against the published word lists
//! - Custom word lists loaded from JSON
//! - A pluggable text analysis pipeline
//! - Bulk annotation and aggregation of CSV job-ad corpora
//!
//! ```
//! use gender_decoder::prelude::*;
//!
//! let classifier = Classifier::reference().unwrap();
//! let assessment = classifier.assess("We want a supportive, collaborative team player.").unwrap();
//! assert_eq!(assessment.verdict(), Verdict::StronglyFeminineCoded);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod lexicon;

pub mod prelude {
    pub use crate::classifier::{Assessment, Classifier, CodedWord, Verdict, assess};
    pub use crate::error::{DecoderError, Result};
    pub use crate::lexicon::{Coding, Lexicon};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
