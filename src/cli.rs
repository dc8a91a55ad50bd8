use crate::game_state::{GameInterface, GameOutcome, Player, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Ghost CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Seed for the computer player's random walks (useful for replays)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Launch the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse one line of player input. `None` means unrecognized.
fn parse_action(input: &str) -> Option<UserAction> {
    match input {
        "exit" | "quit" => Some(UserAction::Exit),
        "new" | "next" => Some(UserAction::NewGame),
        "challenge" | "!" => Some(UserAction::Challenge),
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(UserAction::Letter(c)),
                _ => None,
            }
        }
    }
}

/// CLI implementation of the GameInterface trait, reading player moves from
/// any BufRead so tests can script a whole game through a Cursor.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_word(&mut self, word: &str) {
        if word.is_empty() {
            println!("Word so far: (empty)");
        } else {
            println!("Word so far: {word}");
        }
    }

    fn display_status(&mut self, status: &str) {
        println!("{status}");
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter a letter, 'challenge', 'new', or 'exit':");
        let mut input = String::new();
        // End of input plays like walking away from the table.
        if self.reader.read_line(&mut input).unwrap_or(0) == 0 {
            return Some(UserAction::Exit);
        }
        let input = input.trim().to_lowercase();
        let action = parse_action(&input);
        if action.is_none() {
            println!("Invalid input. Enter a single letter, 'challenge', 'new', or 'exit'.");
        }
        action
    }

    fn display_game_over(&mut self, outcome: &GameOutcome) {
        let winner = match outcome.winner {
            Player::Human => "You win!",
            Player::Computer => "The computer wins!",
        };
        println!("{} {}", outcome.reason, winner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli {
            wordbank_path: None,
            seed: None,
            tui: false,
        };
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
    }

    #[test]
    fn test_parse_cli_with_path() {
        let cli = Cli {
            wordbank_path: Some("custom_words.txt".to_string()),
            seed: Some(42),
            tui: true,
        };
        assert_eq!(cli.wordbank_path, Some("custom_words.txt".to_string()));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.tui);
    }

    #[test]
    fn test_parse_action_letters() {
        assert_eq!(parse_action("a"), Some(UserAction::Letter('a')));
        assert_eq!(parse_action("z"), Some(UserAction::Letter('z')));
        assert_eq!(parse_action("ab"), None);
        assert_eq!(parse_action("1"), None);
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("exit"), Some(UserAction::Exit));
        assert_eq!(parse_action("quit"), Some(UserAction::Exit));
        assert_eq!(parse_action("new"), Some(UserAction::NewGame));
        assert_eq!(parse_action("next"), Some(UserAction::NewGame));
        assert_eq!(parse_action("challenge"), Some(UserAction::Challenge));
        assert_eq!(parse_action("!"), Some(UserAction::Challenge));
        assert_eq!(parse_action("resign"), None);
    }

    #[test]
    fn test_read_action_letter() {
        let mut interface = CliInterface::new(Cursor::new("q\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Letter('q')));
    }

    #[test]
    fn test_read_action_uppercase_and_whitespace() {
        let mut interface = CliInterface::new(Cursor::new("  CHALLENGE  \n"));
        assert_eq!(interface.read_action(), Some(UserAction::Challenge));
    }

    #[test]
    fn test_read_action_invalid_returns_none() {
        let mut interface = CliInterface::new(Cursor::new("abc\n"));
        assert_eq!(interface.read_action(), None);
    }

    #[test]
    fn test_read_action_eof_exits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
