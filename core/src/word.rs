use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Uppercases a single letter, rejecting anything that is not alphabetic or whose uppercase form is not a single
/// character.
pub fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    let letter = upper.next()?;
    match upper.next() {
        None => Some(letter),
        Some(_) => None,
    }
}

/// Parses raw player input into a guess letter, surrounding whitespace is ignored.
pub fn parse_guess(input: &str) -> Result<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c).ok_or(GameError::InvalidGuess),
        _ => Err(GameError::InvalidGuess),
    }
}

/// A candidate secret: non-empty, letters only, stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Word(String);

impl Word {
    /// Validates and uppercases `raw`, surrounding whitespace is rejected like any other non-letter.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(GameError::InvalidConfiguration("word must not be empty"));
        }
        raw.chars()
            .map(normalize_letter)
            .collect::<Option<String>>()
            .map(Self)
            .ok_or(GameError::InvalidConfiguration("word must contain only letters"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of letters, not bytes
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed pool of words a round picks its secret from, never empty once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Word>")]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| Word::new(word.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("word list with {} words", words.len());
        Self::try_from(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Picks a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let index = rng.gen_range(0..self.words.len());
        log::trace!("picked word #{} of {}", index, self.words.len());
        &self.words[index]
    }
}

impl TryFrom<Vec<Word>> for WordList {
    type Error = GameError;

    fn try_from(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::InvalidConfiguration("word list must not be empty"));
        }
        Ok(Self { words })
    }
}

impl Default for WordList {
    fn default() -> Self {
        const DEFAULT_WORDS: [&str; 5] = ["PYTHON", "HANGMAN", "PROGRAMMING", "DEVELOPMENT", "CHALLENGE"];
        Self {
            words: DEFAULT_WORDS
                .into_iter()
                .map(|word| Word(String::from(word)))
                .collect(),
        }
    }
}
