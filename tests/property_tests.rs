use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hangterm::{Difficulty, HangmanEngine};

fn single_word_engine(word: &str, lives: u32, seed: u64) -> HangmanEngine {
    HangmanEngine::new(
        [word],
        ["X Y"],
        lives,
        Box::new(StdRng::seed_from_u64(seed)),
    )
    .unwrap()
}

/// An op is a guessed letter (0..26) or a timeout (26).
fn apply_op(eng: &mut HangmanEngine, op: u8) {
    if op % 27 == 26 {
        eng.timeout().unwrap();
    } else {
        let letter = (b'A' + op % 27) as char;
        eng.guess(&letter.to_string()).unwrap();
    }
}

proptest! {
    /// Lives stay within [0, default] and won/lost never hold together,
    /// whatever sequence of guesses and timeouts arrives.
    #[test]
    fn lives_bounded_and_outcomes_exclusive(
        word in "[A-Z]{1,10}",
        lives in 1u32..8,
        ops in prop::collection::vec(any::<u8>(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut eng = single_word_engine(&word, lives, seed);
        eng.start(Difficulty::Basic);
        for op in ops {
            apply_op(&mut eng, op);
            let st = eng.state().unwrap();
            prop_assert!(st.lives() <= lives);
            prop_assert!(!(st.is_won() && st.is_lost()));
        }
    }

    /// Once a round is won or lost, no operation changes the snapshot.
    #[test]
    fn terminal_rounds_are_frozen(
        word in "[A-Z]{1,6}",
        lives in 1u32..5,
        ops in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let mut eng = single_word_engine(&word, lives, 0);
        eng.start(Difficulty::Basic);
        // Timeouts always reach a terminal state on their own.
        for _ in 0..lives {
            eng.timeout().unwrap();
        }
        let frozen = eng.state().unwrap().clone();
        prop_assert!(frozen.is_over());

        for op in ops {
            apply_op(&mut eng, op);
            prop_assert_eq!(eng.state().unwrap(), &frozen);
        }
    }

    /// A repeated guess never costs a second life, right or wrong.
    #[test]
    fn repeats_cost_at_most_one_life(
        word in "[A-Z]{1,10}",
        letter in prop::char::range('A', 'Z'),
    ) {
        let mut eng = single_word_engine(&word, 6, 1);
        eng.start(Difficulty::Basic);
        let after_first = eng.guess(&letter.to_string()).unwrap().lives();
        let after_second = eng.guess(&letter.to_string()).unwrap().lives();
        prop_assert_eq!(after_first, after_second);
        prop_assert!(after_first >= 5);
    }

    /// The masked view is a pure function of the snapshot: same length as
    /// the answer, spaces preserved, and stable across calls.
    #[test]
    fn masking_is_pure_and_shape_preserving(
        word in "[A-Z]{1,10}",
        ops in prop::collection::vec(any::<u8>(), 0..15),
    ) {
        let mut eng = single_word_engine(&word, 30, 2);
        eng.start(Difficulty::Basic);
        for op in ops {
            apply_op(&mut eng, op);
            let st = eng.state().unwrap();
            let masked = st.masked();
            prop_assert_eq!(&masked, &st.masked());
            prop_assert_eq!(masked.chars().count(), st.answer().chars().count());
            for (m, a) in masked.chars().zip(st.answer().chars()) {
                if a == ' ' {
                    prop_assert_eq!(m, ' ');
                } else {
                    prop_assert!(m == a || m == hangterm::MASK_CHAR);
                }
            }
        }
    }
}
