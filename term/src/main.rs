use anyhow::Context;
use clap::Parser;
use hangman_core::{Difficulty, RoundEngine, WordList};
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use controller::{Controller, Event, Flow};
use display::TextDisplay;

mod controller;
mod display;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(version, about = "Guess the word before the figure is complete or the clock runs out", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Skip the menu and start a round at this difficulty (easy, medium or hard)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Word to play with, repeat to build a list (replaces the built-in words)
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let words = if args.words.is_empty() {
        WordList::default()
    } else {
        WordList::new(&args.words).context("invalid word list")?
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let (tx, rx) = mpsc::channel();
    spawn_input(tx.clone());
    spawn_ticker(tx);

    let engine = RoundEngine::new(words, seed, TextDisplay::new(io::stdout()));
    let mut controller = Controller::new(engine);
    controller.open(args.difficulty)?;

    for event in rx {
        if controller.handle(event)? == Flow::Exit {
            break;
        }
    }
    log::debug!("bye");
    Ok(())
}

fn spawn_input(tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let event = match line {
                Ok(line) => Event::Line(line),
                Err(err) => {
                    log::error!("reading input failed: {}", err);
                    break;
                }
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::InputClosed);
    });
}

fn spawn_ticker(tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_INTERVAL);
            if tx.send(Event::Tick).is_err() {
                log::trace!("ticker stopped");
                return;
            }
        }
    });
}
