// Plain-text wordlist parsing.
//
// Format: one `word<TAB>frequency` entry per line. Blank lines and lines
// starting with `#` are skipped. Frequencies are 1..=255, the byte range
// dictionary frequencies are normalized to.

use tapkey_core::enums::MAX_WORD_LENGTH;

use crate::trie::TrieDict;

/// Errors raised while parsing a wordlist.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("line {line}: empty word")]
    EmptyWord { line: usize },
    #[error("line {line}: missing frequency field")]
    MissingFrequency { line: usize },
    #[error("line {line}: invalid frequency {value:?}")]
    InvalidFrequency { line: usize, value: String },
    #[error("line {line}: frequency {value} out of range 1..=255")]
    FrequencyOutOfRange { line: usize, value: i32 },
    #[error("line {line}: word exceeds {MAX_WORD_LENGTH} characters")]
    WordTooLong { line: usize },
}

/// Parse wordlist text into `(word, frequency)` entries.
pub fn parse_wordlist(text: &str) -> Result<Vec<(String, i32)>, WordlistError> {
    let mut entries = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut fields = trimmed.split('\t');
        let word = fields.next().unwrap_or("").trim();
        if word.is_empty() {
            return Err(WordlistError::EmptyWord { line });
        }
        if word.chars().count() > MAX_WORD_LENGTH {
            return Err(WordlistError::WordTooLong { line });
        }
        let freq_field = fields
            .next()
            .ok_or(WordlistError::MissingFrequency { line })?
            .trim();
        let freq: i32 =
            freq_field
                .parse()
                .map_err(|_| WordlistError::InvalidFrequency {
                    line,
                    value: freq_field.to_string(),
                })?;
        if !(1..=255).contains(&freq) {
            return Err(WordlistError::FrequencyOutOfRange { line, value: freq });
        }
        entries.push((word.to_string(), freq));
    }
    Ok(entries)
}

impl TrieDict {
    /// Build a dictionary from wordlist text (`word<TAB>freq` lines).
    pub fn from_wordlist_text(text: &str) -> Result<Self, WordlistError> {
        let entries = parse_wordlist(text)?;
        let borrowed: Vec<(&str, i32)> =
            entries.iter().map(|(w, f)| (w.as_str(), *f)).collect();
        Ok(Self::from_entries(&borrowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn parses_simple_wordlist() {
        let entries = parse_wordlist("the\t255\nof\t222\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("the".to_string(), 255));
        assert_eq!(entries[1], ("of".to_string(), 222));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# header\n\nword\t10\n   \n# tail\n";
        let entries = parse_wordlist(text).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_frequency_is_an_error() {
        let err = parse_wordlist("justaword\n").unwrap_err();
        assert!(matches!(err, WordlistError::MissingFrequency { line: 1 }));
    }

    #[test]
    fn invalid_frequency_is_an_error() {
        let err = parse_wordlist("word\tmany\n").unwrap_err();
        assert!(matches!(err, WordlistError::InvalidFrequency { line: 1, .. }));
    }

    #[test]
    fn out_of_range_frequency_is_an_error() {
        let err = parse_wordlist("word\t0\n").unwrap_err();
        assert!(matches!(
            err,
            WordlistError::FrequencyOutOfRange { line: 1, value: 0 }
        ));
        let err = parse_wordlist("ok\t10\nword\t256\n").unwrap_err();
        assert!(matches!(
            err,
            WordlistError::FrequencyOutOfRange { line: 2, value: 256 }
        ));
    }

    #[test]
    fn overlong_word_is_an_error() {
        let line = format!("{}\t10\n", "a".repeat(MAX_WORD_LENGTH + 1));
        let err = parse_wordlist(&line).unwrap_err();
        assert!(matches!(err, WordlistError::WordTooLong { line: 1 }));
    }

    #[test]
    fn from_wordlist_text_builds_a_dictionary() {
        let dict = TrieDict::from_wordlist_text("cat\t100\ncar\t80\n").unwrap();
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.lookup(&chars("cat")), Some(100));
        assert_eq!(dict.lookup(&chars("car")), Some(80));
    }

    #[test]
    fn error_formats_mention_the_line() {
        let err = parse_wordlist("word\tmany\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 1"), "message was: {msg}");
    }
}
