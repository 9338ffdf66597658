use hangman_core::*;
use std::io::{self, Write};

const FULL_HEART: char = '♥';
const EMPTY_HEART: char = '♡';

/// Renders the gallows with the given parts of the figure.
pub(crate) fn draw_figure(parts: &[FigurePart]) -> String {
    use FigurePart::*;

    let has = |part| parts.contains(&part);
    let pick = |part, drawn: char| if has(part) { drawn } else { ' ' };

    let mut out = String::new();
    out.push_str("  +---+\n");
    out.push_str("  |   |\n");
    out.push_str(&format!("  |   {}\n", pick(Head, 'O')));
    out.push_str(&format!(
        "  |  {}{}{}\n",
        pick(LeftArm, '/'),
        pick(Body, '|'),
        pick(RightArm, '\\')
    ));
    out.push_str(&format!("  |  {} {}\n", pick(LeftLeg, '/'), pick(RightLeg, '\\')));
    out.push_str("=====\n");
    out
}

/// Flames under the gallows once the last attempt is spent.
pub(crate) fn draw_fire() -> &'static str {
    " (  )  ( )\n(^^^^^^^^^)"
}

pub(crate) fn hearts(remaining: Attempts, max: Attempts) -> String {
    let full = remaining.min(max) as usize;
    let empty = (max as usize) - full;
    std::iter::repeat_n(FULL_HEART, full)
        .chain(std::iter::repeat_n(EMPTY_HEART, empty))
        .collect()
}

/// Whether the countdown is worth printing, the terminal would scroll away if every second was shown
pub(crate) const fn announce_seconds(remaining: Seconds) -> bool {
    remaining <= 10 || remaining % 30 == 0
}

/// Plain text front-end, writes every notification as lines to `out`.
///
/// Write failures can't be returned through the observer methods, the first one is kept for the controller to pick
/// up with [`TextDisplay::take_error`].
#[derive(Debug)]
pub(crate) struct TextDisplay<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextDisplay<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub(crate) fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    #[cfg(test)]
    pub(crate) fn get_ref(&self) -> &W {
        &self.out
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text.as_ref()).and_then(|()| self.out.flush()) {
            log::warn!("display write failed: {}", err);
            self.error = Some(err);
        }
    }

    pub(crate) fn menu(&mut self) {
        self.line("");
        self.line("Welcome to Hangman!");
        self.line("Choose difficulty: [1] easy  [2] medium  [3] hard   (:quit to exit)");
    }

    pub(crate) fn guessed(&mut self, letters: &[char]) {
        let letters: Vec<String> = letters.iter().copied().map(String::from).collect();
        self.line(format!("Guessed letters: {}", letters.join(", ")));
    }
}

impl<W: Write> RoundObserver for TextDisplay<W> {
    fn word_changed(&mut self, revealed: &RevealedWord) {
        self.line(format!("Word: {}", revealed.spaced()));
    }

    fn attempts_changed(&mut self, remaining: Attempts, max: Attempts, parts: &[FigurePart]) {
        let figure = draw_figure(parts);
        self.line(figure.trim_end());
        self.line(format!("Lives: {}", hearts(remaining, max)));
    }

    fn seconds_changed(&mut self, remaining: Seconds) {
        if announce_seconds(remaining) {
            self.line(format!("Time: {}s", remaining));
        }
    }

    fn guess_rejected(&mut self, error: GameError) {
        match error {
            GameError::InvalidGuess => self.line("Please enter a single alphabetical letter."),
            GameError::DuplicateGuess(letter) => {
                self.line(format!("You already guessed '{}'.", letter))
            }
            other => self.line(other.to_string()),
        }
    }

    fn round_ended(&mut self, summary: &RoundSummary) {
        match summary.status {
            RoundStatus::Won => self.line(format!(
                "Congratulations! You guessed the word: {}",
                summary.secret
            )),
            RoundStatus::LostTimeout => {
                self.line(format!("Time's up! The word was: {}", summary.secret))
            }
            RoundStatus::LostAttempts => {
                self.line(draw_fire());
                self.line(format!("You lost. The word was: {}", summary.secret));
            }
            RoundStatus::InProgress => {}
        }
    }
}
