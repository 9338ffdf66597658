use alloc::collections::BTreeSet;
use rand::Rng;

use crate::*;

/// A single play-through, from word selection to a final status.
///
/// Validation always happens before any field is touched, so a rejected guess leaves the round exactly as it was.
/// Not serializable, [`RoundView`] is what leaves the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    difficulty: Difficulty,
    secret: Word,
    revealed: RevealedWord,
    guessed: BTreeSet<char>,
    attempts_remaining: Attempts,
    seconds_remaining: Seconds,
    status: RoundStatus,
}

impl Round {
    /// Starts a round with a word picked uniformly at random from `words`
    pub fn start<R: Rng + ?Sized>(difficulty: Difficulty, words: &WordList, rng: &mut R) -> Self {
        Self::with_word(difficulty, words.choose(rng).clone())
    }

    pub fn with_word(difficulty: Difficulty, secret: Word) -> Self {
        log::debug!(
            "round started: {} letters, {} difficulty",
            secret.letter_count(),
            difficulty
        );
        Self {
            difficulty,
            revealed: RevealedWord::hidden(secret.letter_count()),
            secret,
            guessed: BTreeSet::new(),
            attempts_remaining: difficulty.max_attempts(),
            seconds_remaining: difficulty.time_budget(),
            status: Default::default(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    pub fn revealed(&self) -> &RevealedWord {
        &self.revealed
    }

    /// Guessed letters in alphabetical order
    pub fn guessed_letters(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn attempts_remaining(&self) -> Attempts {
        self.attempts_remaining
    }

    pub fn max_attempts(&self) -> Attempts {
        self.difficulty.max_attempts()
    }

    pub fn wrong_guesses(&self) -> Attempts {
        self.max_attempts().saturating_sub(self.attempts_remaining)
    }

    pub fn seconds_remaining(&self) -> Seconds {
        self.seconds_remaining
    }

    /// The secret, only available once the round is over
    pub fn secret_word(&self) -> Option<&Word> {
        self.status.is_final().then_some(&self.secret)
    }

    pub fn visible_parts(&self) -> &'static [FigurePart] {
        FigurePart::visible(self.wrong_guesses(), self.max_attempts())
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        self.status.is_final().then(|| RoundSummary {
            difficulty: self.difficulty,
            status: self.status,
            secret: self.secret.clone(),
            guesses: self.guessed.len(),
            wrong_guesses: self.wrong_guesses(),
            seconds_remaining: self.seconds_remaining,
        })
    }

    /// Applies raw player input as a guess
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome> {
        self.check_in_progress()?;
        let letter = parse_guess(input)?;
        self.apply_guess(letter)
    }

    /// Applies a single character as a guess, case-insensitive
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome> {
        self.check_in_progress()?;
        let letter = normalize_letter(letter).ok_or(GameError::InvalidGuess)?;
        self.apply_guess(letter)
    }

    fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome> {
        if !self.guessed.insert(letter) {
            log::trace!("duplicate guess {:?}", letter);
            return Err(GameError::DuplicateGuess(letter));
        }

        let correct = self.secret.contains(letter);
        if correct {
            let changed = self.revealed.reveal(&self.secret, letter);
            log::debug!("guess {:?} revealed {} positions", letter, changed);
            if self.revealed.is_complete() {
                self.end_round(RoundStatus::Won);
            }
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            log::debug!(
                "guess {:?} missed, {} attempts left",
                letter,
                self.attempts_remaining
            );
            if self.attempts_remaining == 0 {
                self.end_round(RoundStatus::LostAttempts);
            }
        }

        Ok(GuessOutcome {
            letter,
            correct,
            revealed: self.revealed.clone(),
            attempts_remaining: self.attempts_remaining,
            status: self.status,
        })
    }

    /// Counts down one unit of the time budget, ticks after the round ended are ignored
    pub fn tick(&mut self) -> TickOutcome {
        if self.status.is_final() {
            log::trace!("tick after round ended ignored");
        } else if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            if self.seconds_remaining == 0 {
                self.end_round(RoundStatus::LostTimeout);
            }
        }

        TickOutcome {
            seconds_remaining: self.seconds_remaining,
            status: self.status,
        }
    }

    fn end_round(&mut self, status: RoundStatus) {
        if self.status.is_final() {
            return;
        }
        self.status = status;
        log::debug!("round ended: {:?}", status);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_final() {
            Err(GameError::RoundAlreadyEnded)
        } else {
            Ok(())
        }
    }
}
