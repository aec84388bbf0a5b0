use serde::{Deserialize, Serialize};

/// Length every kept word must have unless configured otherwise.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Words in the order their lines appeared in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub kept: WordList,
    pub candidates: usize,
    pub discarded: usize,
    /// Joined kept words: `\n` between words, nothing after the last one.
    pub rendered: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub source: String,
    pub destination: String,
    pub word_length: usize,
    pub candidates: usize,
    pub kept: usize,
    pub discarded: usize,
    pub written: bool,
}
