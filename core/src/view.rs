use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front-end may show about a round, the secret stays out until the round is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub difficulty: Difficulty,
    pub revealed: RevealedWord,
    pub guessed: Vec<char>,
    pub attempts_remaining: Attempts,
    pub max_attempts: Attempts,
    pub seconds_remaining: Seconds,
    pub status: RoundStatus,
    pub figure: Vec<FigurePart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Word>,
}

impl RoundView {
    pub fn from_round(round: &Round) -> Self {
        Self {
            difficulty: round.difficulty(),
            revealed: round.revealed().clone(),
            guessed: round.guessed_letters().collect(),
            attempts_remaining: round.attempts_remaining(),
            max_attempts: round.max_attempts(),
            seconds_remaining: round.seconds_remaining(),
            status: round.status(),
            figure: round.visible_parts().to_vec(),
            secret: round.secret_word().cloned(),
        }
    }
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        Self::from_round(round)
    }
}
