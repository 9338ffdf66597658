use serde::{Deserialize, Serialize};

use crate::*;

/// Final report of a round, handed to the front-end when the round ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub status: RoundStatus,
    pub secret: Word,
    pub guesses: usize,
    pub wrong_guesses: Attempts,
    pub seconds_remaining: Seconds,
}

/// Receives state changes from a [`RoundEngine`] so a front-end can redraw only what changed.
///
/// Every method defaults to doing nothing.
pub trait RoundObserver {
    /// A round started or a correct guess revealed letters
    fn word_changed(&mut self, _revealed: &RevealedWord) {}

    /// A round started or a wrong guess spent an attempt
    fn attempts_changed(&mut self, _remaining: Attempts, _max: Attempts, _parts: &[FigurePart]) {}

    fn seconds_changed(&mut self, _remaining: Seconds) {}

    /// Input was refused, the round is unchanged
    fn guess_rejected(&mut self, _error: GameError) {}

    fn round_ended(&mut self, _summary: &RoundSummary) {}
}

impl RoundObserver for () {}
