//! Reading, classifying and writing job-ad corpora.

use std::io::{Read, Write};

use ahash::AHashSet;
use csv::{ReaderBuilder, Writer};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::Classifier;
use crate::corpus::record::{AnnotatedAd, JobAd};
use crate::error::Result;

/// A row that could not be processed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowError {
    /// 1-based data row (the header is not counted)
    pub row: usize,
    pub message: String,
}

/// Rows that made it through a stage, plus the ones that did not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch<T> {
    pub items: Vec<T>,
    pub errors: Vec<RowError>,
    /// Rows skipped because their description was already seen
    pub duplicates: usize,
}

impl<T> Batch<T> {
    fn new(items: Vec<T>, errors: Vec<RowError>) -> Self {
        Batch {
            items,
            errors,
            duplicates: 0,
        }
    }
}

/// Options for [`annotate`].
#[derive(Clone, Debug)]
pub struct AnnotateOptions {
    /// Skip ads whose description duplicates an earlier one
    pub deduplicate: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions { deduplicate: true }
    }
}

/// Read job ads from CSV with a header row.
///
/// A missing or unreadable header fails the whole read. Rows that do not
/// deserialize are reported in [`Batch::errors`] and skipped.
pub fn read_job_ads<R: Read>(reader: R) -> Result<Batch<JobAd>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    reader.headers()?;

    let mut ads = Vec::new();
    let mut errors = Vec::new();

    for (i, record) in reader.deserialize::<JobAd>().enumerate() {
        let row = i + 1;
        match record {
            Ok(mut ad) => {
                ad.row = row;
                ads.push(ad);
            }
            Err(e) => {
                warn!("Skipping row {row}: {e}");
                errors.push(RowError {
                    row,
                    message: e.to_string(),
                });
            }
        }
    }

    info!("Read {} job ads ({} unreadable rows)", ads.len(), errors.len());
    Ok(Batch::new(ads, errors))
}

/// Classify every ad, in parallel, keeping input order.
///
/// Ads without a description become row errors.
pub fn annotate(
    classifier: &Classifier,
    ads: Vec<JobAd>,
    options: &AnnotateOptions,
) -> Batch<AnnotatedAd> {
    let total = ads.len();
    let ads = if options.deduplicate {
        deduplicate(ads)
    } else {
        ads
    };
    let duplicates = total - ads.len();

    let outcomes: Vec<std::result::Result<AnnotatedAd, RowError>> = ads
        .into_par_iter()
        .map(|ad| annotate_one(classifier, ad))
        .collect();

    let mut items = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(annotated) => items.push(annotated),
            Err(error) => {
                warn!("Skipping row {}: {}", error.row, error.message);
                errors.push(error);
            }
        }
    }

    info!(
        "Annotated {} of {total} job ads ({} errors, {duplicates} duplicates)",
        items.len(),
        errors.len()
    );

    Batch {
        items,
        errors,
        duplicates,
    }
}

/// Write annotated ads as CSV with a header row.
pub fn write_annotated<W: Write>(writer: W, ads: &[AnnotatedAd]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for ad in ads {
        writer.serialize(ad)?;
    }
    writer.flush()?;
    Ok(())
}

fn annotate_one(classifier: &Classifier, ad: JobAd) -> std::result::Result<AnnotatedAd, RowError> {
    let row = ad.row;
    let Some(text) = ad.text() else {
        return Err(RowError {
            row,
            message: "missing description".to_string(),
        });
    };

    match classifier.assess(text) {
        Ok(assessment) => Ok(AnnotatedAd::new(ad, &assessment)),
        Err(e) => Err(RowError {
            row,
            message: e.to_string(),
        }),
    }
}

/// Drop ads whose description was already seen; the first one wins.
fn deduplicate(ads: Vec<JobAd>) -> Vec<JobAd> {
    let mut seen = AHashSet::new();
    ads.into_iter()
        .filter(|ad| match ad.description.as_deref() {
            Some(description) => seen.insert(description.to_string()),
            None => true,
        })
        .collect()
}
