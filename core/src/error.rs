use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Guess must be a single letter")]
    InvalidGuess,
    #[error("Letter '{0}' was already guessed")]
    DuplicateGuess(char),
    #[error("Round already ended, no new guesses are accepted")]
    RoundAlreadyEnded,
    #[error("No round in progress")]
    NoActiveRound,
}

pub type Result<T> = core::result::Result<T, GameError>;
