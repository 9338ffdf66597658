use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};

use crate::*;

/// Symbol shown for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Player-visible state of one position of the secret word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterSlot {
    #[default]
    Hidden,
    Revealed(char),
}

impl LetterSlot {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Character to draw for this slot
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Revealed(letter) => letter,
        }
    }
}

/// The secret word as the player currently sees it, one slot per letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedWord {
    slots: Vec<LetterSlot>,
}

impl RevealedWord {
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: alloc::vec![LetterSlot::Hidden; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[LetterSlot] {
        &self.slots
    }

    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_hidden()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_hidden())
    }

    /// Reveals every position of `word` holding `letter`, returns how many positions changed.
    pub(crate) fn reveal(&mut self, word: &Word, letter: char) -> usize {
        let mut changed = 0;
        for (slot, secret) in self.slots.iter_mut().zip(word.letters()) {
            if secret == letter && slot.is_hidden() {
                *slot = LetterSlot::Revealed(letter);
                changed += 1;
            }
        }
        changed
    }

    /// Letters separated by spaces, so consecutive placeholders stay readable
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2);
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(slot.symbol());
        }
        out
    }
}

impl fmt::Display for RevealedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots.iter().try_for_each(|slot| f.write_char(slot.symbol()))
    }
}
