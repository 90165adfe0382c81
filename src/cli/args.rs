//! Command line argument parsing using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::corpus::{Category, DEFAULT_TOP_WORDS};

/// Gender decoder - find subtly gender-coded language in job ads
#[derive(Parser, Debug, Clone)]
#[command(name = "gender-decoder")]
#[command(about = "Find subtly gender-coded language in job advertisements")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DecoderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Word list file (JSON) replacing the built-in lexicon
    #[arg(long, value_name = "LEXICON_FILE", env = "GENDER_DECODER_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DecoderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single job ad
    Assess(AssessArgs),

    /// Classify every ad in a CSV file and write the results as new columns
    Annotate(AnnotateArgs),

    /// Aggregate an annotated CSV file
    Summarize(SummarizeArgs),

    /// Print the word lists in use
    Lexicon,
}

/// Arguments for classifying one ad
#[derive(Parser, Debug, Clone)]
pub struct AssessArgs {
    /// Ad text (read from stdin when neither this nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the ad text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for annotating a corpus
#[derive(Parser, Debug, Clone)]
pub struct AnnotateArgs {
    /// CSV file with a description column
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the annotated CSV
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Annotate ads whose description repeats an earlier one
    #[arg(long)]
    pub keep_duplicates: bool,
}

/// Arguments for summarizing an annotated corpus
#[derive(Parser, Debug, Clone)]
pub struct SummarizeArgs {
    /// Annotated CSV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of most common words to show per coding
    #[arg(short, long, default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Restrict the summary to one category of ads
    #[arg(short, long, default_value = "overall")]
    pub category: CategoryFilter,
}

/// Which ads a summary covers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every ad
    Overall,
    /// Ads found by a scientist query
    Scientist,
    /// Ads found by an engineer query
    Engineer,
    /// Ads found by any other query
    Other,
}

impl CategoryFilter {
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::Overall => None,
            CategoryFilter::Scientist => Some(Category::Scientist),
            CategoryFilter::Engineer => Some(Category::Engineer),
            CategoryFilter::Other => Some(Category::Other),
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
