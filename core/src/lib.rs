#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use figure::*;
pub use observer::*;
pub use revealed::*;
pub use round::*;
pub use view::*;
pub use word::*;

mod engine;
mod error;
mod figure;
mod observer;
mod revealed;
mod round;
mod view;
mod word;

/// Count type used for wrong-guess attempts.
pub type Attempts = u8;

/// Count type used for the per-round time budget, in ticks.
pub type Seconds = u32;

/// Named preset bundling the wrong-guess allowance and the time budget of a round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn max_attempts(self) -> Attempts {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    pub const fn time_budget(self) -> Seconds {
        match self {
            Self::Easy => 300,
            Self::Medium => 180,
            Self::Hard => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::InvalidConfiguration(
                "unknown difficulty, expected easy, medium or hard",
            ))
    }
}

/// Lifecycle of a round.
///
/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> LostAttempts
/// - InProgress -> LostTimeout
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round accepts guesses and ticks
    #[default]
    InProgress,
    /// Every letter of the word was revealed
    Won,
    /// Ran out of wrong guesses
    LostAttempts,
    /// Ran out of time
    LostTimeout,
}

impl RoundStatus {
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn is_lost(self) -> bool {
        matches!(self, Self::LostAttempts | Self::LostTimeout)
    }
}

/// Observable state after a guess was applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub letter: char,
    pub correct: bool,
    pub revealed: RevealedWord,
    pub attempts_remaining: Attempts,
    pub status: RoundStatus,
}

impl GuessOutcome {
    /// Whether this guess ended the round
    pub const fn is_final(&self) -> bool {
        self.status.is_final()
    }
}

/// Observable state after a tick was applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub seconds_remaining: Seconds,
    pub status: RoundStatus,
}
