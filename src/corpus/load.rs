//! Loading previously annotated corpora.
//!
//! Annotated files are often concatenations of several runs, so a header line
//! may repeat in the middle of the data and some cells may not hold a valid
//! word list. Such rows are counted and dropped instead of failing the load.

use std::io::Read;

use ahash::AHashSet;
use csv::ReaderBuilder;
use log::{debug, info};
use serde::Serialize;

use crate::corpus::record::{CorpusRow, StoredAd};
use crate::error::Result;

const MASCULINE_COLUMN: &str = "masculine_coded_words";

/// An annotated corpus ready for aggregation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadedCorpus {
    pub rows: Vec<CorpusRow>,
    /// Rows with an unreadable verdict or word list
    pub dropped_rows: usize,
    /// Rows repeating an earlier description
    pub duplicate_rows: usize,
    /// Header lines found inside the data
    pub header_rows: usize,
}

/// Read an annotated corpus from CSV.
pub fn read_annotated<R: Read>(reader: R) -> Result<LoadedCorpus> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    reader.headers()?;

    let mut corpus = LoadedCorpus::default();
    let mut descriptions = AHashSet::new();

    for (i, record) in reader.deserialize::<StoredAd>().enumerate() {
        let row = i + 1;
        let stored = match record {
            Ok(stored) => stored,
            Err(e) => {
                debug!("Dropping row {row}: {e}");
                corpus.dropped_rows += 1;
                continue;
            }
        };

        if stored.masculine_coded_words.as_deref() == Some(MASCULINE_COLUMN) {
            corpus.header_rows += 1;
            continue;
        }

        if let Some(description) = &stored.description
            && !descriptions.insert(description.clone())
        {
            corpus.duplicate_rows += 1;
            continue;
        }

        match CorpusRow::from_stored(stored) {
            Some(corpus_row) => corpus.rows.push(corpus_row),
            None => {
                debug!("Dropping row {row}: missing verdict or word list");
                corpus.dropped_rows += 1;
            }
        }
    }

    info!(
        "Loaded {} annotated ads ({} dropped, {} duplicates)",
        corpus.rows.len(),
        corpus.dropped_rows,
        corpus.duplicate_rows
    );
    Ok(corpus)
}
