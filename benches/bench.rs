//! Criterion benchmarks for the gender decoder.
//!
//! Covers text analysis, single-ad classification and parallel corpus
//! annotation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gender_decoder::analysis::analyzer::{Analyzer, JobAdAnalyzer};
use gender_decoder::classifier::Classifier;
use gender_decoder::corpus::{AnnotateOptions, JobAd, annotate};
use std::hint::black_box;

/// Generate job ads mixing coded and neutral words.
fn generate_job_ads(count: usize) -> Vec<String> {
    let words = [
        "we", "are", "looking", "for", "an", "ambitious", "engineer", "who", "is",
        "collaborative", "and", "driven", "team", "player", "supportive", "of", "colleagues",
        "self-confident", "with", "strong", "analytical", "skills", "kind", "competitive",
        "salary", "remote", "work", "leadership", "responsible", "honest", "data",
        "pipeline", "co-operative", "culture",
    ];

    let mut ads = Vec::with_capacity(count);
    for i in 0..count {
        let ad_length = 80 + (i % 200);
        let mut ad_words = Vec::with_capacity(ad_length);

        for j in 0..ad_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            ad_words.push(words[word_idx]);
        }

        ads.push(ad_words.join(" "));
    }

    ads
}

/// Benchmark tokenization and lowercasing.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = JobAdAnalyzer::new().unwrap();
    let ads = generate_job_ads(100);

    group.bench_function("analyze_single_ad", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&ads[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.finish();
}

/// Benchmark classification of single ads of growing length.
fn bench_assess(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess");

    let classifier = Classifier::reference().unwrap();

    for repeat in [1, 10, 100] {
        let text = generate_job_ads(repeat).join("\n\n");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| black_box(classifier.assess(black_box(text)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark parallel annotation of a corpus.
fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    group.sample_size(20);

    let classifier = Classifier::reference().unwrap();
    let ads: Vec<JobAd> = generate_job_ads(1000)
        .into_iter()
        .map(JobAd::from_description)
        .collect();
    let options = AnnotateOptions { deduplicate: false };

    group.throughput(Throughput::Elements(ads.len() as u64));
    group.bench_function("annotate_1000_ads", |b| {
        b.iter_with_setup(
            || ads.clone(),
            |ads| black_box(annotate(&classifier, ads, &options)),
        )
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_assess, bench_annotate);

criterion_main!(benches);
