//! Command implementations for the gender decoder CLI.
//!
//! Each command builds its result value in a helper; [`execute_command`]
//! only picks the helper and prints what it returns.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::classifier::Classifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{self, AnnotateOptions, CorpusReport};
use crate::error::{DecoderError, Result};
use crate::lexicon::Lexicon;

/// Execute a CLI command.
pub fn execute_command(args: DecoderArgs) -> Result<()> {
    match &args.command {
        Command::Assess(assess_args) => {
            let lexicon = load_lexicon(args.lexicon.as_deref())?;
            let output = assess_text(assess_args, lexicon, io::stdin().lock())?;
            output_result(&output, &args)
        }
        Command::Annotate(annotate_args) => {
            let lexicon = load_lexicon(args.lexicon.as_deref())?;
            output_result(&annotate_corpus(annotate_args, lexicon)?, &args)
        }
        Command::Summarize(summarize_args) => {
            output_result(&summarize_corpus(summarize_args)?, &args)
        }
        Command::Lexicon => {
            let lexicon = load_lexicon(args.lexicon.as_deref())?;
            output_result(&LexiconOutput::new(&lexicon), &args)
        }
    }
}

/// The lexicon at `path`, or the built-in one.
pub fn load_lexicon(path: Option<&Path>) -> Result<Arc<Lexicon>> {
    let lexicon = match path {
        Some(path) => {
            info!("Loading lexicon from {}", path.display());
            Lexicon::from_path(path)?
        }
        None => Lexicon::reference()?,
    };
    debug!(
        "Lexicon {}: {} masculine, {} feminine entries",
        lexicon.name(),
        lexicon.masculine().len(),
        lexicon.feminine().len()
    );
    Ok(Arc::new(lexicon))
}

/// Classify one ad taken from the argument, a file, or `stdin`.
pub fn assess_text<R: Read>(
    args: &AssessArgs,
    lexicon: Arc<Lexicon>,
    mut stdin: R,
) -> Result<AssessmentOutput> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
    };

    let classifier = Classifier::new(lexicon)?;
    let assessment = classifier.assess(&text)?;

    Ok(AssessmentOutput::new(&assessment))
}

/// Classify every ad in a CSV file and write the annotated copy.
pub fn annotate_corpus(args: &AnnotateArgs, lexicon: Arc<Lexicon>) -> Result<AnnotationResult> {
    info!("Annotating {}", args.input.display());
    let start_time = Instant::now();

    let file = File::open(&args.input)?;
    let ads = corpus::read_job_ads(BufReader::new(file))?;

    let classifier = Classifier::new(lexicon)?;
    let options = AnnotateOptions {
        deduplicate: !args.keep_duplicates,
    };
    let annotated = corpus::annotate(&classifier, ads.items, &options);

    let output = File::create(&args.output)?;
    corpus::write_annotated(BufWriter::new(output), &annotated.items)?;

    let mut errors = ads.errors;
    errors.extend(annotated.errors);
    errors.sort_by_key(|error| error.row);

    Ok(AnnotationResult {
        input: args.input.to_string_lossy().to_string(),
        output: args.output.to_string_lossy().to_string(),
        annotated: annotated.items.len(),
        duplicates: annotated.duplicates,
        errors,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Aggregate an annotated CSV file.
pub fn summarize_corpus(args: &SummarizeArgs) -> Result<SummaryOutput> {
    info!("Summarizing {}", args.input.display());

    let file = File::open(&args.input)?;
    let loaded = corpus::read_annotated(BufReader::new(file))?;
    if loaded.dropped_rows > 0 {
        warn!("Dropped {} unreadable rows", loaded.dropped_rows);
    }

    let report = CorpusReport::from_rows(&loaded.rows, args.top);
    let category = args.category.category();
    let summary = match report.summary(category) {
        Some(summary) => summary.clone(),
        None => {
            return Err(DecoderError::corpus(format!(
                "no {} ads in {}",
                category.map_or("matching", |c| c.as_str()),
                args.input.display()
            )));
        }
    };

    Ok(SummaryOutput {
        category: format!("{:?}", args.category).to_lowercase(),
        dropped_rows: loaded.dropped_rows,
        duplicate_rows: loaded.duplicate_rows,
        summary,
    })
}
