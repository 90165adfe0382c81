//! Character trie over one stem list.
//!
//! Looking a word up walks the trie once, so the cost depends on the word's
//! length rather than on the number of stems. Every prefix stem passed on the
//! way is a hit; an exact stem is a hit only where the word ends.

use ahash::AHashMap;

use crate::lexicon::stem::{Stem, StemKind};

#[derive(Clone, Debug, Default)]
struct Node {
    children: AHashMap<char, usize>,
    prefix: Option<usize>,
    exact: Option<usize>,
}

/// Compiled lookup structure for one coding's stems.
///
/// Stem indices refer to positions in the list the index was built from.
#[derive(Clone, Debug)]
pub struct StemIndex {
    nodes: Vec<Node>,
    stems: usize,
}

impl StemIndex {
    /// Build an index over `stems`.
    ///
    /// When the same stem appears twice, the first position wins.
    pub fn new(stems: &[Stem]) -> Self {
        let mut nodes = vec![Node::default()];

        for (i, stem) in stems.iter().enumerate() {
            let mut current = 0;
            for c in stem.key().chars() {
                current = match nodes[current].children.get(&c) {
                    Some(&next) => next,
                    None => {
                        nodes.push(Node::default());
                        let next = nodes.len() - 1;
                        nodes[current].children.insert(c, next);
                        next
                    }
                };
            }

            let slot = match stem.kind() {
                StemKind::Prefix => &mut nodes[current].prefix,
                StemKind::Exact => &mut nodes[current].exact,
            };
            slot.get_or_insert(i);
        }

        StemIndex {
            nodes,
            stems: stems.len(),
        }
    }

    /// Number of stems the index was built from.
    pub fn len(&self) -> usize {
        self.stems
    }

    pub fn is_empty(&self) -> bool {
        self.stems == 0
    }

    /// Find the first stem (in list order) matching an already lowercased word.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut current = 0;

        for c in word.chars() {
            match self.nodes[current].children.get(&c) {
                Some(&next) => current = next,
                None => return best,
            }
            if let Some(i) = self.nodes[current].prefix {
                best = Some(best.map_or(i, |b| b.min(i)));
            }
        }

        if let Some(i) = self.nodes[current].exact {
            best = Some(best.map_or(i, |b| b.min(i)));
        }
        best
    }
}
