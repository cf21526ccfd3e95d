// tapkey_score: score one candidate word against one typed sequence.
//
// Usage:
//   tapkey_score TYPED CANDIDATE [FREQ]
//
// Builds a single-word dictionary containing CANDIDATE (with base
// frequency FREQ, default 128) and reports the score the engine assigns
// to it for the input TYPED, or that it was rejected.

use tapkey_cli::{fatal, wants_help};
use tapkey_engine::{GridInput, KeyGrid, Suggester};
use tapkey_trie::TrieDict;

const USAGE: &str = "usage: tapkey_score TYPED CANDIDATE [FREQ]

Scores CANDIDATE as a correction of TYPED on the QWERTY grid. FREQ is the
candidate's base dictionary frequency (default 128).";

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) || args.len() < 2 || args.len() > 3 {
        println!("{USAGE}");
        if !wants_help(&args) {
            std::process::exit(2);
        }
        return;
    }

    let typed = &args[0];
    let candidate = &args[1];
    let base_freq: i32 = match args.get(2) {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid frequency {v:?}"))),
        None => 128,
    };

    let dict = TrieDict::from_entries(&[(candidate.as_str(), base_freq)]);
    let grid = KeyGrid::qwerty();
    let input = GridInput::new(&grid, typed);
    let suggestions = Suggester::new(&dict).suggest(&input, 1);

    match suggestions.iter().find(|s| &s.word == candidate) {
        Some(s) => println!("{} -> {}: {}", typed, s.word, s.score),
        None => println!("{typed} -> {candidate}: rejected"),
    }
}
