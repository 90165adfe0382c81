//! Bulk classification of job-ad corpora.
//!
//! A corpus is a CSV file with one job ad per row. [`ingest`] classifies every
//! row and writes the results back as extra columns; [`load`] reads such an
//! annotated file again and [`summary`] aggregates it per verdict, per word and
//! per query category.
//!
//! Failures are isolated per row: a malformed row is reported and skipped,
//! never fatal to the batch.

pub mod category;
pub mod ingest;
pub mod load;
pub mod record;
pub mod summary;
pub mod word_list;

pub use category::Category;
pub use ingest::{AnnotateOptions, Batch, RowError, annotate, read_job_ads, write_annotated};
pub use load::{LoadedCorpus, read_annotated};
pub use record::{AnnotatedAd, CorpusRow, JobAd, StoredAd};
pub use summary::{
    CategorySummary, CorpusReport, CorpusSummary, DEFAULT_TOP_WORDS, VerdictCount, WordCount,
};
pub use word_list::{format_word_list, parse_word_list};
