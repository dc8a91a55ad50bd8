use std::io;

use ghost_game::cli::{CliInterface, parse_cli};
use ghost_game::game_state::game_loop;
use ghost_game::trie::FastDictionary;
use ghost_game::tui::TuiInterface;
use ghost_game::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();
    let cli = parse_cli();
    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    println!("Loaded {} words.", wordbank.len());
    let dictionary = FastDictionary::new(&wordbank);

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(ChaCha8Rng::from_entropy()),
    };

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&dictionary, &mut interface, rng.as_mut()),
            Err(e) => eprintln!("Failed to start terminal interface: {e}"),
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&dictionary, &mut interface, rng.as_mut());
    }
}
