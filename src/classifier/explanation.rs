//! Prose explanations of a verdict.
//!
//! Wording follows the Gender Decoder's result page, with the match counts
//! filled in. Output is a pure function of its arguments.

use crate::classifier::verdict::Verdict;

const NEUTRAL_OUTLOOK: &str = "It probably won't be off-putting to men or women applicants.";
const MASCULINE_OUTLOOK: &str =
    "It risks putting women off applying, but will probably encourage men to apply.";
const FEMININE_OUTLOOK: &str = "Fortunately, the research suggests this will have only a slight \
     effect on how appealing the job is to men, and will encourage women applicants.";

/// Render the explanation for a verdict reached with the given counts.
pub fn explain(verdict: Verdict, masculine: usize, feminine: usize) -> String {
    match verdict {
        Verdict::Neutral if masculine == 0 && feminine == 0 => format!(
            "This job ad doesn't use any words that are subtly coded as masculine or \
             feminine (according to the research). {NEUTRAL_OUTLOOK}"
        ),
        Verdict::Neutral => format!(
            "This job ad uses an equal number of words that are subtly coded as masculine \
             and feminine ({masculine} of each, according to the research). {NEUTRAL_OUTLOOK}"
        ),
        Verdict::StronglyMasculineCoded => format!(
            "This job ad uses {} subtly coded as masculine and none that are subtly coded \
             as feminine (according to the research). {MASCULINE_OUTLOOK}",
            words_that(masculine)
        ),
        Verdict::MasculineCoded => format!(
            "This job ad uses more words that are subtly coded as masculine ({masculine}) \
             than words that are subtly coded as feminine ({feminine}), according to the \
             research. {MASCULINE_OUTLOOK}"
        ),
        Verdict::FeminineCoded => format!(
            "This job ad uses more words that are subtly coded as feminine ({feminine}) \
             than words that are subtly coded as masculine ({masculine}), according to the \
             research. {FEMININE_OUTLOOK}"
        ),
        Verdict::StronglyFeminineCoded => format!(
            "This job ad uses {} subtly coded as feminine and none that are subtly coded \
             as masculine (according to the research). {FEMININE_OUTLOOK}",
            words_that(feminine)
        ),
    }
}

fn words_that(count: usize) -> String {
    if count == 1 {
        "1 word that is".to_string()
    } else {
        format!("{count} words that are")
    }
}
