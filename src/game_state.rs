use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::{Rng, RngCore};

use crate::dictionary::GhostDictionary;
use crate::{debug_log, warn_log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

/// One move's worth of player input, as reported by a front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    Challenge,
    NewGame,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Player,
    pub reason: String,
}

/// Front-end seam for the game loop. The CLI and TUI implement this; tests
/// implement it with scripted actions.
pub trait GameInterface {
    fn display_word(&mut self, word: &str);
    fn display_status(&mut self, status: &str);
    /// `None` means the input was invalid and already reported; the loop
    /// simply asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_game_over(&mut self, outcome: &GameOutcome);
}

/// Run the game against `dictionary`, saving and resuming unfinished games
/// at the platform data directory.
pub fn game_loop<D, I>(dictionary: &D, interface: &mut I, rng: &mut dyn RngCore)
where
    D: GhostDictionary + ?Sized,
    I: GameInterface,
{
    let save_path = get_ghost_save_path();
    run_game_loop(dictionary, interface, rng, save_path.as_deref());
}

/// Like [`game_loop`], but with the saved-game location injected so tests
/// stay hermetic. `None` disables persistence entirely.
pub fn run_game_loop<D, I>(
    dictionary: &D,
    interface: &mut I,
    rng: &mut dyn RngCore,
    save_path: Option<&Path>,
) where
    D: GhostDictionary + ?Sized,
    I: GameInterface,
{
    let mut word = String::new();
    let mut outcome: Option<GameOutcome> = None;

    // An unfinished game is always interrupted on the human's turn, so
    // resuming is just restoring the word.
    if let Some(saved) = save_path.and_then(read_saved_game) {
        debug_log!("resuming saved game {saved:?}");
        word = saved;
        if let Some(path) = save_path {
            clear_saved_game(path);
        }
        interface.display_word(&word);
        interface.display_status("Resumed unfinished game. Your turn.");
    } else {
        start_new_game(dictionary, &mut word, &mut outcome, interface, rng);
    }

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match action {
            UserAction::Exit => {
                if outcome.is_none()
                    && !word.is_empty()
                    && let Some(path) = save_path
                {
                    write_saved_game(path, &word);
                }
                break;
            }
            UserAction::NewGame => {
                start_new_game(dictionary, &mut word, &mut outcome, interface, rng);
            }
            UserAction::Letter(letter) if outcome.is_none() => {
                word.push(letter.to_ascii_lowercase());
                interface.display_word(&word);
                outcome = computer_turn(dictionary, &mut word, rng);
                interface.display_word(&word);
                match &outcome {
                    Some(o) => interface.display_game_over(o),
                    None => interface.display_status("Your turn."),
                }
            }
            UserAction::Challenge if outcome.is_none() => {
                if word.is_empty() {
                    interface.display_status("Nothing to challenge yet.");
                    continue;
                }
                let resolved = resolve_challenge(dictionary, &word, rng);
                interface.display_game_over(&resolved);
                outcome = Some(resolved);
            }
            UserAction::Letter(_) | UserAction::Challenge => {
                interface.display_status("The game is over. Start a new game to keep playing.");
            }
        }
    }
}

fn start_new_game<D, I>(
    dictionary: &D,
    word: &mut String,
    outcome: &mut Option<GameOutcome>,
    interface: &mut I,
    rng: &mut dyn RngCore,
) where
    D: GhostDictionary + ?Sized,
    I: GameInterface,
{
    word.clear();
    *outcome = None;
    // Whoever opens is decided by coin toss, as on the reset button of the
    // original game.
    if rng.gen_bool(0.5) {
        interface.display_status("The computer goes first.");
        *outcome = computer_turn(dictionary, word, rng);
        interface.display_word(word);
        match outcome {
            Some(o) => interface.display_game_over(o),
            None => interface.display_status("Your turn."),
        }
    } else {
        interface.display_word(word);
        interface.display_status("You go first. Enter a letter.");
    }
}

/// The computer's whole turn: an automatic challenge of the human's move,
/// then a letter of its own, then the mirror-image automatic challenge of
/// that letter. `None` means the game continues.
fn computer_turn<D>(
    dictionary: &D,
    word: &mut String,
    rng: &mut dyn RngCore,
) -> Option<GameOutcome>
where
    D: GhostDictionary + ?Sized,
{
    if !word.is_empty() {
        if dictionary.is_word(word) {
            return Some(GameOutcome {
                winner: Player::Computer,
                reason: format!("{word} is a word."),
            });
        }
        if dictionary.any_word_starting_with(word, rng).is_none() {
            return Some(GameOutcome {
                winner: Player::Computer,
                reason: format!("{word} is an invalid prefix."),
            });
        }
    }

    // Aim for a word the human will be forced to complete; any completion
    // works as a fallback when the parity search comes back empty.
    let completion = dictionary
        .good_word_starting_with(word, rng)
        .filter(|w| w.len() > word.len())
        .or_else(|| dictionary.any_word_starting_with(word, rng));
    let Some(completion) = completion else {
        // Only reachable when the dictionary has no words at all.
        return Some(GameOutcome {
            winner: Player::Human,
            reason: "The computer has no letter to play.".to_string(),
        });
    };
    let Some(letter) = completion.chars().nth(word.len()) else {
        return Some(GameOutcome {
            winner: Player::Human,
            reason: "The computer has no letter to play.".to_string(),
        });
    };
    word.push(letter);
    debug_log!("computer played {letter:?} aiming for {completion:?}");

    if dictionary.is_word(word) {
        return Some(GameOutcome {
            winner: Player::Human,
            reason: format!("{word} is a word."),
        });
    }
    if dictionary.any_word_starting_with(word, rng).is_none() {
        return Some(GameOutcome {
            winner: Player::Human,
            reason: format!("{word} is an invalid prefix."),
        });
    }
    None
}

/// Resolve an explicit challenge from the human against the current word.
/// Accusing a string that is still a live, incomplete prefix loses.
fn resolve_challenge<D>(dictionary: &D, word: &str, rng: &mut dyn RngCore) -> GameOutcome
where
    D: GhostDictionary + ?Sized,
{
    if dictionary.is_word(word) {
        GameOutcome {
            winner: Player::Human,
            reason: format!("{word} is a word."),
        }
    } else if dictionary.any_word_starting_with(word, rng).is_none() {
        GameOutcome {
            winner: Player::Human,
            reason: format!("{word} is an invalid prefix."),
        }
    } else {
        GameOutcome {
            winner: Player::Computer,
            reason: format!("{word} is a valid prefix and not a word."),
        }
    }
}

pub fn get_ghost_save_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("ghost_save.txt"))
}

/// Persist an unfinished game. Failures are logged and otherwise ignored;
/// losing a save never takes the game down.
pub fn write_saved_game(path: &Path, word: &str) {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let contents = format!("# saved {stamp}\n{word}\n");
    if let Err(err) = fs::write(path, contents) {
        warn_log!("failed to save game to {}: {err}", path.display());
    }
}

/// Read back a saved word, skipping comment lines. Corrupt or missing saves
/// are treated as "no saved game".
pub fn read_saved_game(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let word = contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))?
        .to_string();
    if word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        warn_log!("ignoring corrupt saved game at {}", path.display());
        None
    }
}

pub fn clear_saved_game(path: &Path) {
    let _ = fs::remove_file(path);
}
