use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Shortest word that counts in Ghost; anything shorter would end a game on
/// the opening moves and is dropped at load time.
pub const MIN_WORD_LENGTH: usize = 4;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

fn is_playable(word: &str) -> bool {
    word.len() >= MIN_WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_playable(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}
