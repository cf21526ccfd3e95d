// tapkey_suggest: print ranked corrections for typed words.
//
// Usage:
//   tapkey_suggest [--wordlist PATH] [--max N] WORD...
//   echo -e "hte\nwoord" | tapkey_suggest
//
// The wordlist is a `word<TAB>freq` file; see `load_dict` for the search
// order when --wordlist is not given.

use std::io::BufRead;

use tapkey_cli::{fatal, load_dict, parse_value_flag, wants_help};
use tapkey_engine::{GridInput, KeyGrid, Suggester};

const USAGE: &str = "usage: tapkey_suggest [--wordlist PATH] [--max N] [WORD...]

Prints ranked corrections for each WORD (or each stdin line when no words
are given). The wordlist is searched in --wordlist, $TAPKEY_WORDLIST,
~/.tapkey/words.tsv, then ./words.tsv.";

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        println!("{USAGE}");
        return;
    }

    let (wordlist, args) = parse_value_flag(&args, "--wordlist", "-w");
    let (max_arg, words) = parse_value_flag(&args, "--max", "-n");
    let max_suggestions: usize = match max_arg {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid --max value {v:?}"))),
        None => 5,
    };

    let dict = match load_dict(wordlist.as_deref()) {
        Ok(d) => d,
        Err(e) => fatal(&e),
    };
    let grid = KeyGrid::qwerty();
    let suggester = Suggester::new(&dict);

    if words.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => fatal(&format!("failed to read stdin: {e}")),
            };
            let word = line.trim();
            if !word.is_empty() {
                print_suggestions(&suggester, &grid, word, max_suggestions);
            }
        }
    } else {
        for word in &words {
            print_suggestions(&suggester, &grid, word, max_suggestions);
        }
    }
}

fn print_suggestions(suggester: &Suggester<'_>, grid: &KeyGrid, word: &str, max: usize) {
    let input = GridInput::new(grid, word);
    let suggestions = suggester.suggest(&input, max);
    println!("{word}:");
    if suggestions.is_empty() {
        println!("  (no suggestions)");
    }
    for s in suggestions {
        println!("  {:<24} {}", s.word, s.score);
    }
}
