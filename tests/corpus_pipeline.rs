//! End-to-end tests for annotating and summarizing job-ad corpora on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};

use gender_decoder::classifier::{Classifier, Verdict};
use gender_decoder::corpus::*;
use gender_decoder::error::Result;
use tempfile::TempDir;

const ADS: &str = "\
title,company_name,location,query,description
Research Scientist,Acme,Berlin,data scientist,\"An ambitious, analytical self-starter.\"
Software Engineer,Initech,Austin,software engineer,\"A supportive, collaborative team player.\"
Software Engineer,Initech,Austin,software engineer,\"A supportive, collaborative team player.\"
Platform Engineer,Globex,Remote,engineer,We need a competitive and kind engineer who leads.
Office Manager,Hooli,Boston,office manager,
Lab Scientist,Acme,Berlin,scientist,Handle samples with care.
";

fn annotate_file(dir: &TempDir, deduplicate: bool) -> Result<(Batch<AnnotatedAd>, usize)> {
    let input = dir.path().join("ads.csv");
    let output = dir.path().join("annotated.csv");
    fs::write(&input, ADS)?;

    let ads = read_job_ads(BufReader::new(File::open(&input)?))?;
    let read_errors = ads.errors.len();

    let classifier = Classifier::reference()?;
    let annotated = annotate(&classifier, ads.items, &AnnotateOptions { deduplicate });
    write_annotated(BufWriter::new(File::create(&output)?), &annotated.items)?;

    Ok((annotated, read_errors))
}

#[test]
fn test_annotate_corpus() -> Result<()> {
    let dir = TempDir::new()?;
    let (annotated, read_errors) = annotate_file(&dir, true)?;

    assert_eq!(read_errors, 0);
    assert_eq!(annotated.duplicates, 1);
    assert_eq!(annotated.errors.len(), 1);
    assert_eq!(annotated.errors[0].row, 5);
    assert_eq!(annotated.items.len(), 4);

    let verdicts: Vec<Verdict> = annotated.items.iter().map(|ad| ad.result).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::StronglyMasculineCoded,
            Verdict::StronglyFeminineCoded,
            Verdict::MasculineCoded,
            Verdict::Neutral,
        ]
    );
    assert_eq!(
        annotated.items[0].masculine_coded_words,
        "['ambitious', 'analytical']"
    );
    assert_eq!(annotated.items[3].feminine_coded_words, "[]");

    let written = fs::read_to_string(dir.path().join("annotated.csv"))?;
    let header = written.lines().next().unwrap_or_default();
    assert!(header.contains("result"));
    assert!(header.contains("masculine_coded_words"));
    assert!(header.contains("num_feminine_words"));

    Ok(())
}

#[test]
fn test_keep_duplicates() -> Result<()> {
    let dir = TempDir::new()?;
    let (annotated, _) = annotate_file(&dir, false)?;

    assert_eq!(annotated.duplicates, 0);
    assert_eq!(annotated.items.len(), 5);

    Ok(())
}

#[test]
fn test_summarize_annotated_corpus() -> Result<()> {
    let dir = TempDir::new()?;
    annotate_file(&dir, true)?;

    let loaded = read_annotated(BufReader::new(File::open(
        dir.path().join("annotated.csv"),
    )?))?;
    assert_eq!(loaded.rows.len(), 4);
    assert_eq!(loaded.dropped_rows, 0);

    let report = CorpusReport::from_rows(&loaded.rows, DEFAULT_TOP_WORDS);
    let overall = &report.overall;
    assert_eq!(overall.num_ads, 4);
    assert_eq!(overall.count(Verdict::StronglyMasculineCoded), 1);
    assert_eq!(overall.count(Verdict::MasculineCoded), 1);
    assert_eq!(overall.count(Verdict::Neutral), 1);
    assert_eq!(overall.count(Verdict::FeminineCoded), 0);
    assert_eq!(overall.avg_masculine_words, 1.0);

    let scientist = report.summary(Some(Category::Scientist)).unwrap();
    assert_eq!(scientist.num_ads, 2);
    let engineer = report.summary(Some(Category::Engineer)).unwrap();
    assert_eq!(engineer.num_ads, 2);
    assert_eq!(engineer.top_feminine_words[0].word, "supportive");

    Ok(())
}

#[test]
fn test_concatenated_annotated_files() -> Result<()> {
    let dir = TempDir::new()?;
    annotate_file(&dir, true)?;

    let first = fs::read_to_string(dir.path().join("annotated.csv"))?;
    let combined = format!("{first}{first}");

    let loaded = read_annotated(combined.as_bytes())?;
    assert_eq!(loaded.header_rows, 1);
    assert_eq!(loaded.duplicate_rows, 4);
    assert_eq!(loaded.rows.len(), 4);

    Ok(())
}
