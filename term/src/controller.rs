use hangman_core::*;
use std::io::{self, Write};

use crate::display::TextDisplay;

/// Everything the controller reacts to, serialized through one channel.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Line(String),
    Tick,
    InputClosed,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Start(Difficulty),
    Restart,
    Menu,
    Quit,
    Guess(String),
}

impl Command {
    /// Interprets a line typed at the menu
    pub(crate) fn parse_menu(line: &str) -> Option<Self> {
        match line.trim() {
            ":quit" | ":q" | "q" | "quit" | "exit" => Some(Self::Quit),
            "1" => Some(Self::Start(Difficulty::Easy)),
            "2" | "" => Some(Self::Start(Difficulty::Medium)),
            "3" => Some(Self::Start(Difficulty::Hard)),
            other => other.parse().ok().map(Self::Start),
        }
    }

    /// Interprets a line typed during a round, anything that is not a command is a guess
    pub(crate) fn parse_round(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Self::Quit,
            ":restart" | ":r" => Self::Restart,
            ":menu" | ":m" => Self::Menu,
            _ => Self::Guess(line.to_owned()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Wires input events to the engine, one event at a time.
pub(crate) struct Controller<W: Write> {
    engine: RoundEngine<TextDisplay<W>>,
}

impl<W: Write> Controller<W> {
    pub(crate) fn new(engine: RoundEngine<TextDisplay<W>>) -> Self {
        Self { engine }
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &RoundEngine<TextDisplay<W>> {
        &self.engine
    }

    fn in_round(&self) -> bool {
        self.engine.round().is_some()
    }

    /// Shows the menu, or starts right away when a difficulty is given
    pub(crate) fn open(&mut self, difficulty: Option<Difficulty>) -> io::Result<()> {
        match difficulty {
            Some(difficulty) => self.start(difficulty),
            None => self.engine.observer_mut().menu(),
        }
        self.engine.observer_mut().take_error()
    }

    pub(crate) fn handle(&mut self, event: Event) -> io::Result<Flow> {
        let flow = match event {
            Event::Tick => {
                self.engine.tick();
                self.leave_finished_round();
                Flow::Continue
            }
            Event::InputClosed => {
                log::debug!("input closed");
                Flow::Exit
            }
            Event::Line(line) if self.in_round() => self.run(Command::parse_round(&line)),
            Event::Line(line) => match Command::parse_menu(&line) {
                Some(command) => self.run(command),
                None => {
                    self.engine.observer_mut().line("Unknown difficulty.");
                    self.engine.observer_mut().menu();
                    Flow::Continue
                }
            },
        };
        self.engine.observer_mut().take_error()?;
        Ok(flow)
    }

    fn run(&mut self, command: Command) -> Flow {
        log::trace!("command: {:?}", command);
        match command {
            Command::Start(difficulty) => self.start(difficulty),
            Command::Restart => {
                if self.engine.restart().is_ok() {
                    self.prompt();
                }
            }
            Command::Menu => {
                self.engine.return_to_menu();
                self.engine.observer_mut().menu();
            }
            Command::Quit => return Flow::Exit,
            Command::Guess(input) => {
                // rejections are already reported through the observer
                if self.engine.submit_guess(&input).is_ok() {
                    let letters: Option<Vec<char>> = self
                        .engine
                        .round()
                        .filter(|round| !round.is_finished())
                        .map(|round| round.guessed_letters().collect());
                    if let Some(letters) = letters {
                        self.engine.observer_mut().guessed(&letters);
                    }
                }
                self.leave_finished_round();
                if self.in_round() {
                    self.prompt();
                }
            }
        }
        Flow::Continue
    }

    fn start(&mut self, difficulty: Difficulty) {
        self.engine.start_round(difficulty);
        self.prompt();
    }

    fn prompt(&mut self) {
        self.engine
            .observer_mut()
            .line("Enter a letter (:restart, :menu, :quit):");
    }

    /// A finished round goes straight back to the menu
    fn leave_finished_round(&mut self) {
        if self.engine.round().is_some_and(Round::is_finished) {
            self.engine.return_to_menu();
            self.engine.observer_mut().menu();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(word: &str) -> Controller<Vec<u8>> {
        let words = WordList::new([word]).unwrap();
        Controller::new(RoundEngine::new(words, 1, TextDisplay::new(Vec::new())))
    }

    fn output(controller: &Controller<Vec<u8>>) -> String {
        String::from_utf8(controller.engine().observer().get_ref().clone()).unwrap()
    }

    fn line(text: &str) -> Event {
        Event::Line(text.to_owned())
    }

    #[test]
    fn menu_commands() {
        assert_eq!(Command::parse_menu("1"), Some(Command::Start(Difficulty::Easy)));
        assert_eq!(Command::parse_menu("Hard\n"), Some(Command::Start(Difficulty::Hard)));
        assert_eq!(Command::parse_menu(""), Some(Command::Start(Difficulty::Medium)));
        assert_eq!(Command::parse_menu(":quit"), Some(Command::Quit));
        assert_eq!(Command::parse_menu("7"), None);
    }

    #[test]
    fn round_commands() {
        assert_eq!(Command::parse_round(":menu"), Command::Menu);
        assert_eq!(Command::parse_round(" :restart "), Command::Restart);
        assert_eq!(Command::parse_round("e"), Command::Guess("e".to_owned()));
        assert_eq!(Command::parse_round("easy"), Command::Guess("easy".to_owned()));
    }

    #[test]
    fn winning_session_returns_to_menu() {
        let mut controller = controller("ox");
        controller.open(None).unwrap();
        assert!(!controller.in_round());

        for event in [line("3"), line("o"), Event::Tick, line("x")] {
            assert_eq!(controller.handle(event).unwrap(), Flow::Continue);
        }
        assert!(!controller.in_round());

        let text = output(&controller);
        assert!(text.contains("Word: O _"));
        assert!(text.contains("Guessed letters: O"));
        assert!(text.contains("Congratulations! You guessed the word: OX"));
        assert!(text.trim_end().ends_with("(:quit to exit)"));
    }

    #[test]
    fn bad_input_keeps_round() {
        let mut controller = controller("ox");
        controller.open(Some(Difficulty::Easy)).unwrap();
        for event in [line("ab"), line("o"), line("O")] {
            controller.handle(event).unwrap();
        }
        assert_eq!(controller.engine().round().map(Round::status), Some(RoundStatus::InProgress));

        let text = output(&controller);
        assert!(text.contains("Please enter a single alphabetical letter."));
        assert!(text.contains("You already guessed 'O'."));
    }

    #[test]
    fn timeout_ends_round() {
        let mut controller = controller("ox");
        controller.open(Some(Difficulty::Hard)).unwrap();
        for _ in 0..Difficulty::Hard.time_budget() {
            controller.handle(Event::Tick).unwrap();
        }
        assert!(!controller.in_round());
        assert!(output(&controller).contains("Time's up! The word was: OX"));

        // the ticker keeps running while the menu is shown
        controller.handle(Event::Tick).unwrap();
        assert!(!controller.in_round());
    }

    #[test]
    fn restart_and_menu() {
        let mut controller = controller("ox");
        controller.open(Some(Difficulty::Hard)).unwrap();
        controller.handle(line("q")).unwrap();
        controller.handle(line(":restart")).unwrap();
        assert_eq!(
            controller.engine().round().map(Round::attempts_remaining),
            Some(Difficulty::Hard.max_attempts())
        );

        controller.handle(line(":menu")).unwrap();
        assert!(!controller.in_round());
        assert_eq!(controller.handle(line(":quit")).unwrap(), Flow::Exit);
    }

    #[test]
    fn closed_input_exits() {
        let mut controller = controller("ox");
        controller.open(Some(Difficulty::Hard)).unwrap();
        assert_eq!(controller.handle(Event::InputClosed).unwrap(), Flow::Exit);
    }
}
