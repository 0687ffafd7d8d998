use std::io::Write;

use hangterm::core::words;
use hangterm::{Difficulty, HangmanEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_engine(seed: u64, lives: u32) -> HangmanEngine {
    HangmanEngine::new(
        words::WORDS.iter().copied(),
        words::PHRASES.iter().copied(),
        lives,
        Box::new(StdRng::seed_from_u64(seed)),
    )
    .unwrap()
}

#[test]
fn deterministic_round_selection_same_seed() {
    let mut a = default_engine(42, 6);
    let mut b = default_engine(42, 6);
    assert_eq!(
        a.start(Difficulty::Basic).answer(),
        b.start(Difficulty::Basic).answer()
    );
    assert_eq!(
        a.start(Difficulty::Intermediate).answer(),
        b.start(Difficulty::Intermediate).answer()
    );
}

#[test]
fn exhaustive_alphabet_always_wins() {
    // Guessing every letter with enough lives must reveal any answer.
    let mut eng = default_engine(7, 26);
    eng.start(Difficulty::Intermediate);
    for letter in 'A'..='Z' {
        eng.guess(&letter.to_string()).unwrap();
    }
    let st = eng.state().unwrap();
    assert!(st.is_won());
    assert!(!st.is_lost());
    assert_eq!(st.masked(), st.answer());
}

#[test]
fn lives_never_exceed_default_across_a_round() {
    let mut eng = default_engine(3, 4);
    eng.start(Difficulty::Basic);
    let inputs = ["E", "E", "1", "zz", "Q", " t ", "?", "X"];
    for input in inputs {
        let st = eng.guess(input).unwrap();
        assert!(st.lives() <= 4);
    }
    let st = eng.timeout().unwrap();
    assert!(st.lives() <= 4);
}

#[test]
fn restart_replaces_previous_round() {
    let mut eng = default_engine(11, 3);
    eng.start(Difficulty::Basic);
    eng.timeout().unwrap();
    eng.guess("E").unwrap();

    let st = eng.start(Difficulty::Basic);
    assert_eq!(st.lives(), 3);
    assert_eq!(st.guessed().count(), 0);
}

#[test]
fn pool_file_loading_skips_blank_lines() {
    let path = std::env::temp_dir().join(format!("hangterm-pool-{}.txt", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "  beta  ").unwrap();
    }
    let pool = words::load_pool(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(pool, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn missing_pool_file_is_an_error() {
    let path = std::env::temp_dir().join("hangterm-no-such-pool.txt");
    assert!(words::load_pool(&path).is_err());
}
