use std::collections::BTreeMap;

use rand::{Rng, RngCore};

use crate::dictionary::GhostDictionary;

/// Restart budget for the parity-seeking walk in
/// [`GhostDictionary::good_word_starting_with`]. Once spent, the walk gives
/// up and returns whatever candidate it last accumulated, so the lookup can
/// never loop forever on a dictionary with no even-parity completion.
const GOOD_WORD_RESTART_LIMIT: usize = 100;

/// One position in the prefix tree. The path from the root to a node spells
/// a prefix of at least one dictionary word; `is_word` marks the nodes whose
/// path is a complete word.
///
/// Children are held in a `BTreeMap` so iteration order is stable within a
/// build, which keeps seeded random walks reproducible.
#[derive(Debug, Default, PartialEq, Eq)]
struct TrieNode {
    is_word: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    fn insert(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_word = true;
    }

    /// Walk `s` downward from this node, returning the node the walk lands
    /// on, or `None` if it falls off the tree.
    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in s.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    fn random_child(&self, rng: &mut dyn RngCore) -> Option<(char, &TrieNode)> {
        if self.children.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..self.children.len());
        self.children.iter().nth(pick).map(|(c, node)| (*c, node))
    }
}

/// Trie-backed dictionary. Built once from a word list at startup; all
/// queries are non-mutating tree walks.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FastDictionary {
    root: TrieNode,
}

impl FastDictionary {
    /// Build the index from a word list. Inserting a word twice is a no-op,
    /// so duplicate lines in the source list are harmless. Charset filtering
    /// is the caller's job (see the wordbank loaders); the trie stores
    /// whatever it is given.
    #[must_use]
    pub fn new(words: &[String]) -> Self {
        let mut root = TrieNode::default();
        for word in words {
            root.insert(word);
        }
        Self { root }
    }
}

impl GhostDictionary for FastDictionary {
    fn is_word(&self, word: &str) -> bool {
        self.root.walk(word).is_some_and(|node| node.is_word)
    }

    fn any_word_starting_with(&self, prefix: &str, rng: &mut dyn RngCore) -> Option<String> {
        let mut node = self.root.walk(prefix)?;
        let mut word = prefix.to_string();
        loop {
            if node.is_word {
                return Some(word);
            }
            // A childless non-terminal node is a dead end and surfaces as
            // "no completion". The walk strictly descends, so it terminates.
            let (letter, child) = node.random_child(rng)?;
            word.push(letter);
            node = child;
        }
    }

    fn good_word_starting_with(&self, prefix: &str, rng: &mut dyn RngCore) -> Option<String> {
        let start = self.root.walk(prefix)?;
        if start.children.is_empty() {
            return None;
        }
        let mut node = start;
        let mut word = prefix.to_string();
        let mut added = 0usize;
        let mut attempts = 0usize;
        loop {
            if node.is_word && added % 2 == 0 {
                return Some(word);
            }
            // A word with the wrong parity ends the current walk; so does a
            // dead end. Both restart from the prefix node.
            let next = if node.is_word {
                None
            } else {
                node.random_child(rng)
            };
            match next {
                Some((letter, child)) => {
                    word.push(letter);
                    node = child;
                    added += 1;
                }
                None => {
                    attempts += 1;
                    if attempts > GOOD_WORD_RESTART_LIMIT {
                        // Out of budget: hand back the failed candidate
                        // rather than spinning. The prefix node is known to
                        // have children, so the candidate extends the prefix.
                        return Some(word);
                    }
                    node = start;
                    word.truncate(prefix.len());
                    added = 0;
                }
            }
        }
    }
}
