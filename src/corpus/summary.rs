//! Corpus-level aggregation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::Verdict;
use crate::corpus::category::Category;
use crate::corpus::record::CorpusRow;

/// Number of most common words kept per coding by default.
pub const DEFAULT_TOP_WORDS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCount {
    pub verdict: Verdict,
    pub num_ads: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Aggregate figures over a set of annotated ads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub num_ads: usize,
    /// One entry per verdict, in [`Verdict::ALL`] order, zero counts included
    pub verdict_counts: Vec<VerdictCount>,
    pub avg_masculine_words: f64,
    pub avg_feminine_words: f64,
    pub top_masculine_words: Vec<WordCount>,
    pub top_feminine_words: Vec<WordCount>,
}

impl CorpusSummary {
    /// Summarize `rows`, keeping the `top_n` most common words per coding.
    ///
    /// Words are counted case-insensitively; ties keep first-seen order.
    pub fn from_rows<'a, I>(rows: I, top_n: usize) -> Self
    where
        I: IntoIterator<Item = &'a CorpusRow>,
    {
        let mut num_ads = 0;
        let mut verdicts: AHashMap<Verdict, usize> = AHashMap::new();
        let mut masculine_total = 0;
        let mut feminine_total = 0;
        let mut masculine = WordCounter::default();
        let mut feminine = WordCounter::default();

        for row in rows {
            num_ads += 1;
            *verdicts.entry(row.verdict).or_default() += 1;
            masculine_total += row.masculine_words.len();
            feminine_total += row.feminine_words.len();
            masculine.add_all(&row.masculine_words);
            feminine.add_all(&row.feminine_words);
        }

        let verdict_counts = Verdict::ALL
            .into_iter()
            .map(|verdict| VerdictCount {
                verdict,
                num_ads: verdicts.get(&verdict).copied().unwrap_or(0),
            })
            .collect();

        CorpusSummary {
            num_ads,
            verdict_counts,
            avg_masculine_words: mean(masculine_total, num_ads),
            avg_feminine_words: mean(feminine_total, num_ads),
            top_masculine_words: masculine.most_common(top_n),
            top_feminine_words: feminine.most_common(top_n),
        }
    }

    /// Number of ads that received `verdict`.
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdict_counts
            .iter()
            .find(|c| c.verdict == verdict)
            .map_or(0, |c| c.num_ads)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub summary: CorpusSummary,
}

/// Overall summary plus one summary per category present in the corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub overall: CorpusSummary,
    pub categories: Vec<CategorySummary>,
}

impl CorpusReport {
    pub fn from_rows(rows: &[CorpusRow], top_n: usize) -> Self {
        let overall = CorpusSummary::from_rows(rows, top_n);

        let mut present: Vec<Category> = rows.iter().map(|row| row.category).collect();
        present.sort();
        present.dedup();

        let categories = present
            .into_iter()
            .map(|category| CategorySummary {
                category,
                summary: CorpusSummary::from_rows(
                    rows.iter().filter(|row| row.category == category),
                    top_n,
                ),
            })
            .collect();

        CorpusReport {
            overall,
            categories,
        }
    }

    /// The summary for one category, or the overall one for `None`.
    pub fn summary(&self, category: Option<Category>) -> Option<&CorpusSummary> {
        match category {
            None => Some(&self.overall),
            Some(category) => self
                .categories
                .iter()
                .find(|c| c.category == category)
                .map(|c| &c.summary),
        }
    }
}

#[derive(Default)]
struct WordCounter {
    counts: AHashMap<String, (usize, usize)>,
}

impl WordCounter {
    fn add_all(&mut self, words: &[String]) {
        for word in words {
            let key = word.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let next = self.counts.len();
            self.counts.entry(key).or_insert((0, next)).0 += 1;
        }
    }

    fn most_common(self, n: usize) -> Vec<WordCount> {
        let mut entries: Vec<(String, (usize, usize))> = self.counts.into_iter().collect();
        entries.sort_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            b_count.cmp(a_count).then(a_first.cmp(b_first))
        });

        entries
            .into_iter()
            .take(n)
            .map(|(word, (count, _))| WordCount { word, count })
            .collect()
    }
}

fn mean(total: usize, n: usize) -> f64 {
    if n == 0 { 0.0 } else { total as f64 / n as f64 }
}
