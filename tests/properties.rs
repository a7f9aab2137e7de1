//! Property tests: puzzle generation, solution derivation and the press state
//! machine hold their guarantees for arbitrary seeds.

use alphabet_buttons::core::{COLOR_COUNT, LETTER_COUNT, Letter, Slot};
use alphabet_buttons::facts::{BombFacts, BombInfo, SerialNumber, generator::random_bomb};
use alphabet_buttons::puzzle::{ModuleId, Outcome, Phase, Puzzle};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn build(seed: u64) -> (BombFacts, Puzzle) {
    let mut rng = StdRng::seed_from_u64(seed);
    let facts = random_bomb(&mut rng);
    let puzzle = Puzzle::new(ModuleId::new(1), &mut rng, &facts);
    (facts, puzzle)
}

/// Serial numbers with at least one letter and one digit
fn arb_serial() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9]{3,4}", "[A-Za-z]", "[0-9]").prop_map(|(body, letter, digit)| {
        format!("{letter}{body}{digit}")
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn layout_is_a_bijection(seed in any::<u64>()) {
        let (_, puzzle) = build(seed);
        let mut seen = [false; LETTER_COUNT];

        for slot in Slot::ALL {
            let letter = puzzle.letter_at(slot);
            prop_assert!(!seen[letter.index()], "{} appears twice", letter);
            seen[letter.index()] = true;
            prop_assert_eq!(puzzle.letters().slot_of(letter), slot);
        }
        prop_assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn colors_stay_in_range(seed in any::<u64>()) {
        let (_, puzzle) = build(seed);
        for letter in Letter::ALL {
            prop_assert!(usize::from(puzzle.colors().color_of(letter).index()) < COLOR_COUNT);
        }
    }

    #[test]
    fn solution_is_never_empty(seed in any::<u64>()) {
        let (facts, puzzle) = build(seed);
        let solution = puzzle.solution();

        prop_assert!(solution.count() >= 1);
        if let Some(letter) = solution.fallback() {
            prop_assert_eq!(solution.count(), 1);
            prop_assert_eq!(letter, facts.serial_number().first_letter());
            prop_assert!(solution.is_correct(letter));
        }
    }

    #[test]
    fn any_press_order_solves(seed in any::<u64>(), order_seed in any::<u64>()) {
        let (_, mut puzzle) = build(seed);
        let mut correct: Vec<Letter> = puzzle.solution().letters().collect();
        correct.shuffle(&mut StdRng::seed_from_u64(order_seed));

        let last = correct.len() - 1;
        for (i, letter) in correct.into_iter().enumerate() {
            let event = puzzle.press_label(letter);
            let expected = if i == last { Outcome::CorrectAndSolved } else { Outcome::Correct };
            prop_assert_eq!(event.outcome, expected);
        }
        prop_assert_eq!(puzzle.phase(), Phase::Solved);
    }

    #[test]
    fn repeat_press_changes_nothing(seed in any::<u64>()) {
        let (_, mut puzzle) = build(seed);
        let Some(letter) = puzzle.solution().letters().next() else {
            return Err(TestCaseError::fail("empty solution"));
        };

        puzzle.press_label(letter);
        let before = puzzle.state().clone();
        let event = puzzle.press_label(letter);

        prop_assert!(event.repeat);
        prop_assert!(!event.outcome.is_strike());
        prop_assert_eq!(puzzle.state(), &before);
    }

    #[test]
    fn wrong_press_changes_nothing(seed in any::<u64>()) {
        let (_, mut puzzle) = build(seed);
        let wrong = Letter::ALL.into_iter().find(|&l| !puzzle.solution().is_correct(l));

        if let Some(letter) = wrong {
            let before = puzzle.state().clone();
            let event = puzzle.press_label(letter);

            prop_assert_eq!(event.outcome, Outcome::Incorrect);
            prop_assert_eq!(puzzle.state(), &before);
        }
    }

    #[test]
    fn same_seed_same_puzzle(seed in any::<u64>()) {
        let (facts_a, a) = build(seed);
        let (facts_b, b) = build(seed);

        prop_assert_eq!(facts_a, facts_b);
        prop_assert_eq!(a.letters(), b.letters());
        prop_assert_eq!(a.colors(), b.colors());
        prop_assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn serial_number_accessors(text in arb_serial()) {
        let serial = SerialNumber::new(text.clone()).unwrap();
        let upper = text.to_ascii_uppercase();

        prop_assert_eq!(serial.as_str(), upper.as_str());
        let last_digit = upper.chars().rev().find_map(|c| c.to_digit(10)).unwrap();
        prop_assert_eq!(u32::from(serial.last_digit()), last_digit);
        let first_letter = upper.chars().find(char::is_ascii_alphabetic).unwrap();
        prop_assert_eq!(serial.first_letter().to_char(), first_letter);
    }
}
