// tapkey-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use tapkey_trie::TrieDict;

/// Wordlist file name looked up in the default locations.
const WORDLIST_FILE: &str = "words.tsv";

/// Search for a wordlist and build the dictionary.
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `TAPKEY_WORDLIST` environment variable
/// 3. `~/.tapkey/words.tsv`
/// 4. Current working directory (`words.tsv`)
pub fn load_dict(wordlist_path: Option<&str>) -> Result<TrieDict, String> {
    let search_paths = build_search_paths(wordlist_path);

    for path in &search_paths {
        if path.is_file() {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            let dict = TrieDict::from_wordlist_text(&text)
                .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
            tracing::debug!(
                path = %path.display(),
                words = dict.word_count(),
                "loaded wordlist"
            );
            return Ok(dict);
        }
    }

    Err(format!(
        "could not find a wordlist in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of paths to probe for a wordlist.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    // 2. TAPKEY_WORDLIST environment variable
    if let Ok(env_path) = std::env::var("TAPKEY_WORDLIST") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".tapkey").join(WORDLIST_FILE));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--name=VALUE`, `--name VALUE` or `-x VALUE` flag out of the
/// argument list. Returns the value (if present) and the remaining args.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
