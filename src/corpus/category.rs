//! Query categories used to split a corpus.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The job family a search query belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// "scientist" and "data scientist" queries
    Scientist,
    /// "engineer" and "software engineer" queries
    Engineer,
    /// Anything else, including rows without a query
    Other,
}

impl Category {
    /// Categorize a search query, ignoring case and surrounding whitespace.
    pub fn from_query(query: &str) -> Self {
        match query.trim().to_lowercase().as_str() {
            "scientist" | "data scientist" => Category::Scientist,
            "engineer" | "software engineer" => Category::Engineer,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scientist => "scientist",
            Category::Engineer => "engineer",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
