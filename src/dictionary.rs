use rand::RngCore;

/// Query surface shared by Ghost dictionaries.
///
/// The game loop only ever needs these three questions answered; everything
/// else (word-list loading, turn taking, rendering) lives outside the
/// dictionary. Randomized lookups take the RNG as an argument so the
/// dictionary itself stays read-only after construction and tests can inject
/// a seeded generator.
pub trait GhostDictionary {
    /// Returns true iff `word` is a complete dictionary word.
    fn is_word(&self, word: &str) -> bool;

    /// Returns some dictionary word starting with `prefix`, picked by a
    /// uniformly random downward walk, or `None` when no word has that
    /// prefix. A prefix that is itself a word counts as its own completion.
    fn any_word_starting_with(&self, prefix: &str, rng: &mut dyn RngCore) -> Option<String>;

    /// Returns a completion of `prefix` chosen so that an even number of
    /// letters was appended past the prefix, leaving the opponent to finish
    /// the word. `None` when `prefix` is not in the dictionary or nothing
    /// extends it. The search is a bounded random walk; on budget exhaustion
    /// the last candidate is returned as a best-effort fallback even if its
    /// parity is wrong.
    fn good_word_starting_with(&self, prefix: &str, rng: &mut dyn RngCore) -> Option<String>;
}
