//! Pure word list rules, independent of where the text comes from.

use crate::domain::model::{FilterOutcome, WordList};

/// Splits on `\r\n`, `\n` or a lone `\r`. A final terminator does not start
/// an extra line, and empty text has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`, which word
/// lists exported from spreadsheets sometimes carry.
pub fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn trim_word(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

/// Every line of `text`, trimmed, in file order. Blank lines become empty
/// candidates rather than being skipped.
pub fn candidate_words(text: &str) -> WordList {
    WordList::new(
        split_lines(text)
            .into_iter()
            .map(|line| trim_word(line).to_string())
            .collect(),
    )
}

/// Length in characters, not bytes.
pub fn is_qualifying(word: &str, word_length: usize) -> bool {
    word.chars().count() == word_length
}

pub fn filter_words(candidates: WordList, word_length: usize) -> FilterOutcome {
    let total = candidates.len();
    let kept: Vec<String> = candidates
        .words
        .into_iter()
        .filter(|word| is_qualifying(word, word_length))
        .collect();

    let rendered = render(&kept);
    let kept = WordList::new(kept);

    FilterOutcome {
        candidates: total,
        discarded: total - kept.len(),
        kept,
        rendered,
    }
}

pub fn render(words: &[String]) -> String {
    words.join("\n")
}

/// Filters raw file text in one call.
pub fn filter_text(text: &str, word_length: usize) -> String {
    filter_words(candidate_words(text), word_length).rendered
}
