//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::classifier::Assessment;
use crate::cli::args::{DecoderArgs, OutputFormat};
use crate::corpus::{CorpusSummary, RowError, WordCount};
use crate::error::Result;
use crate::lexicon::{Coding, Lexicon};

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Result structure for a single assessment.
#[derive(Debug, Serialize)]
pub struct AssessmentOutput {
    pub result: String,
    pub explanation: String,
    pub masculine_coded_words: Vec<String>,
    pub feminine_coded_words: Vec<String>,
    pub num_masculine_words: usize,
    pub num_feminine_words: usize,
}

impl AssessmentOutput {
    pub fn new(assessment: &Assessment) -> Self {
        AssessmentOutput {
            result: assessment.verdict().to_string(),
            explanation: assessment.explanation(),
            masculine_coded_words: owned(assessment.masculine_words()),
            feminine_coded_words: owned(assessment.feminine_words()),
            num_masculine_words: assessment.masculine_count(),
            num_feminine_words: assessment.feminine_count(),
        }
    }
}

impl HumanOutput for AssessmentOutput {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Result: {}", title_case(&self.result));
        let _ = writeln!(out, "{}", self.explanation);
        let _ = writeln!(out);
        let _ = writeln!(out, "Masculine-coded words:");
        out.push_str(&ordered_list(&self.masculine_coded_words));
        let _ = writeln!(out);
        let _ = writeln!(out, "Feminine-coded words:");
        out.push_str(&ordered_list(&self.feminine_coded_words));
        out
    }
}

/// Result structure for corpus annotation.
#[derive(Debug, Serialize)]
pub struct AnnotationResult {
    pub input: String,
    pub output: String,
    pub annotated: usize,
    pub duplicates: usize,
    pub errors: Vec<RowError>,
    pub duration_ms: u64,
}

impl HumanOutput for AnnotationResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Annotated {} ads from {}", self.annotated, self.input);
        let _ = writeln!(out, "Written to: {}", self.output);
        if self.duplicates > 0 {
            let _ = writeln!(out, "Duplicate descriptions skipped: {}", self.duplicates);
        }
        if !self.errors.is_empty() {
            let _ = writeln!(out, "Rows skipped: {}", self.errors.len());
            for error in &self.errors {
                let _ = writeln!(out, "  row {}: {}", error.row, error.message);
            }
        }
        let _ = writeln!(out, "Time: {}ms", self.duration_ms);
        out
    }
}

/// Result structure for a corpus summary.
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    pub category: String,
    pub dropped_rows: usize,
    pub duplicate_rows: usize,
    pub summary: CorpusSummary,
}

impl HumanOutput for SummaryOutput {
    fn render_human(&self) -> String {
        let summary = &self.summary;
        let mut out = String::new();
        let _ = writeln!(out, "Corpus Summary ({})", self.category);
        let _ = writeln!(out, "════════════════");
        let _ = writeln!(out, "Ads: {}", summary.num_ads);
        if self.duplicate_rows > 0 {
            let _ = writeln!(out, "Duplicate rows dropped: {}", self.duplicate_rows);
        }
        if self.dropped_rows > 0 {
            let _ = writeln!(out, "Unreadable rows dropped: {}", self.dropped_rows);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Ads per verdict:");
        for count in &summary.verdict_counts {
            let _ = writeln!(out, "  {:<26}{}", count.verdict.title(), count.num_ads);
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Average masculine-coded words per ad: {:.2}",
            summary.avg_masculine_words
        );
        let _ = writeln!(
            out,
            "Average feminine-coded words per ad: {:.2}",
            summary.avg_feminine_words
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "Most common masculine-coded words:");
        out.push_str(&word_counts(&summary.top_masculine_words));
        let _ = writeln!(out);
        let _ = writeln!(out, "Most common feminine-coded words:");
        out.push_str(&word_counts(&summary.top_feminine_words));
        out
    }
}

/// The word lists in use.
#[derive(Debug, Serialize)]
pub struct LexiconOutput {
    pub name: String,
    pub masculine: Vec<String>,
    pub feminine: Vec<String>,
}

impl LexiconOutput {
    pub fn new(lexicon: &Lexicon) -> Self {
        LexiconOutput {
            name: lexicon.name().to_string(),
            masculine: owned(lexicon.raw_stems(Coding::Masculine)),
            feminine: owned(lexicon.raw_stems(Coding::Feminine)),
        }
    }
}

impl HumanOutput for LexiconOutput {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Lexicon: {}", self.name);
        let _ = writeln!(out);
        let _ = writeln!(out, "Masculine-coded words ({}):", self.masculine.len());
        out.push_str(&ordered_list(&self.masculine));
        let _ = writeln!(out);
        let _ = writeln!(out, "Feminine-coded words ({}):", self.feminine.len());
        out.push_str(&ordered_list(&self.feminine));
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &DecoderArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &DecoderArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Numbered list, one item per line, or "None" when empty.
pub fn ordered_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "None\n".to_string();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item.as_ref());
    }
    out
}

fn word_counts(words: &[WordCount]) -> String {
    if words.is_empty() {
        return "None\n".to_string();
    }

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", i + 1, word.word, word.count);
    }
    out
}

fn title_case(label: &str) -> String {
    label
        .parse::<crate::classifier::Verdict>()
        .map(|verdict| verdict.title())
        .unwrap_or_else(|_| label.to_string())
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;

    #[test]
    fn test_ordered_list() {
        assert_eq!(ordered_list::<&str>(&[]), "None\n");
        assert_eq!(ordered_list(&["bold", "driven"]), "1. bold\n2. driven\n");
    }

    #[test]
    fn test_assessment_output() {
        let classifier = Classifier::reference().unwrap();
        let assessment = classifier
            .assess("An ambitious, driven and supportive person.")
            .unwrap();
        let output = AssessmentOutput::new(&assessment);

        assert_eq!(output.result, "masculine-coded");
        assert_eq!(output.masculine_coded_words, vec!["ambitious", "driven"]);
        assert_eq!(output.feminine_coded_words, vec!["supportive"]);
        assert_eq!(output.num_masculine_words, 2);

        let text = output.render_human();
        assert!(text.starts_with("Result: Masculine-Coded\n"));
        assert!(text.contains("1. ambitious\n2. driven\n"));
        assert!(text.contains("Feminine-coded words:\n1. supportive\n"));
    }

    #[test]
    fn test_assessment_output_json() {
        let classifier = Classifier::reference().unwrap();
        let assessment = classifier.assess("").unwrap();
        let output = AssessmentOutput::new(&assessment);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["result"], "neutral");
        assert_eq!(value["masculine_coded_words"], serde_json::json!([]));
        assert!(output.render_human().contains("None"));
    }

    #[test]
    fn test_lexicon_output() {
        let output = LexiconOutput::new(&Lexicon::reference().unwrap());
        assert_eq!(output.masculine.len(), 52);
        assert_eq!(output.feminine.len(), 50);
        assert!(output.masculine.contains(&"lead-".to_string()));
        let text = output.render_human();
        assert!(text.starts_with("Lexicon: gaucher-friesen-kay-2011\n"));
        assert!(text.contains("Masculine-coded words (52):\n1. active-\n2. adventurous-\n"));
    }
}
