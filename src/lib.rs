// Library interface for ghost-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod trie;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::GhostDictionary;
pub use game_state::{
    GameInterface, GameOutcome, Player, UserAction, game_loop, run_game_loop,
};
pub use trie::FastDictionary;
pub use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
