use criterion::{Criterion, criterion_group, criterion_main};
use hangman_core::*;
use std::hint::black_box;

/// Plays a seeded round to the end guessing the alphabet in frequency order
fn play(engine: &mut RoundEngine, difficulty: Difficulty) -> RoundStatus {
    const LETTERS: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";
    engine.start_round(difficulty);
    for letter in LETTERS.chars() {
        let mut buf = [0; 4];
        match engine.submit_guess(letter.encode_utf8(&mut buf)) {
            Ok(outcome) if outcome.is_final() => return outcome.status,
            _ => {}
        }
    }
    engine.round().map_or(RoundStatus::InProgress, Round::status)
}

fn bench_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounds");
    for difficulty in Difficulty::ALL {
        group.bench_function(difficulty.name(), |b| {
            let mut engine = RoundEngine::new(WordList::default(), 0xdead_beef, ());
            b.iter(|| play(&mut engine, black_box(difficulty)))
        });
    }
    group.bench_function("timeout", |b| {
        let mut engine = RoundEngine::new(WordList::default(), 7, ());
        b.iter(|| {
            engine.start_round(Difficulty::Easy);
            while let Some(outcome) = engine.tick() {
                if outcome.status.is_final() {
                    break;
                }
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rounds);
criterion_main!(benches);
