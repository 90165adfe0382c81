//! The published word lists from Gaucher, Friesen and Kay (2011),
//! "Evidence That Gendered Wording in Job Advertisements Exists and Sustains
//! Gender Inequality", as used by Kat Matfield's Gender Decoder.
//!
//! Entries are reproduced verbatim, order included.

/// Name reported for the embedded lexicon.
pub const REFERENCE_NAME: &str = "gaucher-friesen-kay-2011";

pub const MASCULINE_CODED_WORDS: &[&str] = &[
    "active-",
    "adventurous-",
    "aggress-",
    "ambitio-",
    "analy-",
    "assert-",
    "athlet-",
    "autonom-",
    "battle-",
    "boast-",
    "challeng-",
    "champion-",
    "compet-",
    "confident-",
    "courag-",
    "decid-",
    "decision-",
    "decisive-",
    "defend-",
    "determin-",
    "domina-",
    "dominant-",
    "driven-",
    "fearless-",
    "fight-",
    "force-",
    "greedy-",
    "head-strong-",
    "headstrong-",
    "hierarch-",
    "hostil-",
    "impulsive-",
    "independen-",
    "individual-",
    "intellect-",
    "lead-",
    "logic-",
    "objective-",
    "opinion-",
    "outspoken-",
    "persist-",
    "principle-",
    "reckless-",
    "self-confiden-",
    "self-relian-",
    "self-sufficien-",
    "selfconfiden-",
    "selfrelian-",
    "selfsufficien-",
    "stubborn-",
    "superior-",
    "unreasonab-",
];

pub const FEMININE_CODED_WORDS: &[&str] = &[
    "agree-",
    "affectionate-",
    "child-",
    "cheer-",
    "collab-",
    "commit-",
    "communal-",
    "compassion-",
    "connect-",
    "considerate-",
    "cooperat-",
    "co-operat-",
    "depend-",
    "emotiona-",
    "empath-",
    "feel-",
    "flatterable-",
    "gentle-",
    "honest-",
    "interpersonal-",
    "interdependen-",
    "interpersona-",
    "inter-personal-",
    "inter-dependen-",
    "inter-persona-",
    "kind-",
    "kinship-",
    "loyal-",
    "modesty-",
    "nag-",
    "nurtur-",
    "pleasant-",
    "polite-",
    "quiet-",
    "respon-",
    "sensitiv-",
    "submissive-",
    "support-",
    "sympath-",
    "tender-",
    "together-",
    "trust-",
    "understand-",
    "warm-",
    "whin-",
    "enthusias-",
    "inclusive-",
    "yield-",
    "share-",
    "sharin-",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(MASCULINE_CODED_WORDS.len(), 52);
        assert_eq!(FEMININE_CODED_WORDS.len(), 50);
    }

    #[test]
    fn test_every_entry_is_a_lowercase_prefix_stem() {
        for entry in MASCULINE_CODED_WORDS.iter().chain(FEMININE_CODED_WORDS) {
            assert!(entry.ends_with('-'), "{entry}");
            assert_eq!(*entry, entry.to_lowercase());
        }
    }

    #[test]
    fn test_lists_are_disjoint() {
        for entry in MASCULINE_CODED_WORDS {
            assert!(!FEMININE_CODED_WORDS.contains(entry), "{entry}");
        }
    }
}
