//! One Alphabet Buttons module instance

use super::{
    ColorAssignment, LetterAssignment, Outcome, Phase, PressCommand, PressState, Solution,
    generate,
};
use crate::core::{ButtonColor, Letter, Slot};
use crate::facts::BombInfo;
use rand::Rng;
use std::fmt;

/// Identifies a module instance in log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out module ids 1, 2, 3, ... for one host
#[derive(Debug, Clone)]
pub struct ModuleIdAllocator {
    next: u32,
}

impl Default for ModuleIdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ModuleIdAllocator {
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> ModuleId {
        let id = ModuleId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// What happened on one button press, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent {
    pub slot: Slot,
    pub letter: Letter,
    pub outcome: Outcome,
    /// The slot had already been pressed correctly before
    pub repeat: bool,
}

/// A module on the bomb: assignments, derived solution and press progress
///
/// The solution is computed once, on construction.
#[derive(Debug, Clone)]
pub struct Puzzle {
    id: ModuleId,
    letters: LetterAssignment,
    colors: ColorAssignment,
    solution: Solution,
    state: PressState,
}

impl Puzzle {
    /// Create a puzzle with freshly randomized assignments
    pub fn new<R: Rng + ?Sized>(id: ModuleId, rng: &mut R, facts: &dyn BombInfo) -> Self {
        let (letters, colors) = generate(rng);
        Self::from_assignments(id, letters, colors, facts)
    }

    /// Create a puzzle from known assignments
    #[must_use]
    pub fn from_assignments(
        id: ModuleId,
        letters: LetterAssignment,
        colors: ColorAssignment,
        facts: &dyn BombInfo,
    ) -> Self {
        let solution = Solution::evaluate(&letters, &colors, facts);

        if log::log_enabled!(log::Level::Trace) {
            for verdict in Solution::explain(&letters, &colors, facts) {
                log::trace!(
                    "[Alphabet Buttons {id}] Rule {}: {} ({})",
                    verdict.letter,
                    verdict.description,
                    verdict.holds
                );
            }
        }
        if let Some(letter) = solution.fallback() {
            log::debug!(
                "[Alphabet Buttons {id}] No rule applies, using the first serial number letter {letter}."
            );
        }
        log::info!(
            "[Alphabet Buttons {id}] The buttons that should be pressed are: {}.",
            solution.describe()
        );

        Self {
            id,
            letters,
            colors,
            solution,
            state: PressState::new(),
        }
    }

    /// Press the button in `slot`
    pub fn press(&mut self, slot: Slot) -> Outcome {
        let outcome = self.state.press(slot, &self.letters, &self.solution);
        match outcome {
            Outcome::Incorrect => log::info!(
                "[Alphabet Buttons {}] You pressed {}, it was not a correct button.",
                self.id,
                self.letters.letter_at(slot)
            ),
            Outcome::CorrectAndSolved => log::info!(
                "[Alphabet Buttons {}] All correct buttons pressed, module solved!",
                self.id
            ),
            Outcome::Correct => log::debug!(
                "[Alphabet Buttons {}] Pressed {}, {}/{} correct buttons pressed.",
                self.id,
                self.letters.letter_at(slot),
                self.state.pressed_count(),
                self.solution.count()
            ),
        }
        outcome
    }

    /// Press a slot and describe the result
    pub fn interact(&mut self, slot: Slot) -> PressEvent {
        let repeat = self.state.is_pressed(slot);
        let outcome = self.press(slot);
        PressEvent {
            slot,
            letter: self.letters.letter_at(slot),
            outcome,
            repeat,
        }
    }

    /// Press the button currently showing `letter`
    pub fn press_label(&mut self, letter: Letter) -> PressEvent {
        self.interact(self.letters.slot_of(letter))
    }

    /// Run a text command; presses happen in the order given
    pub fn run_command(&mut self, command: &PressCommand) -> Vec<PressEvent> {
        command
            .labels()
            .iter()
            .map(|&letter| self.press_label(letter))
            .collect()
    }

    #[must_use]
    pub const fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterAssignment {
        &self.letters
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub const fn state(&self) -> &PressState {
        &self.state
    }

    #[must_use]
    pub const fn letter_at(&self, slot: Slot) -> Letter {
        self.letters.letter_at(slot)
    }

    /// Color of the button in `slot`
    #[must_use]
    pub const fn color_at(&self, slot: Slot) -> ButtonColor {
        self.colors.color_of(self.letters.letter_at(slot))
    }

    /// Colorblind label for the button in `slot`
    #[must_use]
    pub const fn colorblind_label(&self, slot: Slot) -> char {
        self.color_at(slot).initial()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{BombFacts, Port, SerialNumber};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn facts() -> BombFacts {
        BombFacts::new(SerialNumber::new("AB1CD7").unwrap())
            .with_port_plate([Port::Rj45])
            .with_port_plate([Port::Parallel])
    }

    /// Solution is A, C, Z with the letters reversed on the board
    fn puzzle() -> Puzzle {
        let letters = LetterAssignment::from_order("ZYXWVUTSRQPONMLKJIHGFEDCBA").unwrap();
        let colors = ColorAssignment::uniform(ButtonColor::Green)
            .with_color(Letter::G, ButtonColor::Cyan)
            .with_color(Letter::V, ButtonColor::Cyan);
        Puzzle::from_assignments(ModuleId::new(4), letters, colors, &facts())
    }

    #[test]
    fn reversed_board_solution() {
        // Z at 0, T at 6, S at 7: none of the position rules hold
        let puzzle = puzzle();
        assert_eq!(puzzle.solution().describe(), "A, C");
    }

    #[test]
    fn press_label_uses_letter_slot() {
        let mut puzzle = puzzle();
        let event = puzzle.press_label(Letter::A);

        assert_eq!(event.slot, Slot::new(25).unwrap());
        assert_eq!(event.letter, Letter::A);
        assert_eq!(event.outcome, Outcome::Correct);
        assert!(!event.repeat);
    }

    #[test]
    fn interact_flags_repeats() {
        let mut puzzle = puzzle();
        let slot = puzzle.letters().slot_of(Letter::C);

        assert!(!puzzle.interact(slot).repeat);
        let again = puzzle.interact(slot);
        assert!(again.repeat);
        assert_eq!(again.outcome, Outcome::Correct);
    }

    #[test]
    fn run_command_presses_in_order() {
        let mut puzzle = puzzle();
        let command = PressCommand::parse("press b a c q").unwrap();

        let outcomes: Vec<Outcome> = puzzle
            .run_command(&command)
            .into_iter()
            .map(|e| e.outcome)
            .collect();

        assert_eq!(
            outcomes,
            vec![
                Outcome::Incorrect,
                Outcome::Correct,
                Outcome::CorrectAndSolved,
                Outcome::Incorrect,
            ]
        );
        assert!(puzzle.is_solved());
    }

    #[test]
    fn color_lookup_by_slot() {
        let puzzle = puzzle();
        let g_slot = puzzle.letters().slot_of(Letter::G);
        assert_eq!(puzzle.color_at(g_slot), ButtonColor::Cyan);
        assert_eq!(puzzle.colorblind_label(g_slot), 'C');
        assert_eq!(puzzle.colorblind_label(Slot::new(0).unwrap()), 'G');
    }

    #[test]
    fn seeded_puzzles_match() {
        let facts = facts();
        let a = Puzzle::new(ModuleId::new(1), &mut StdRng::seed_from_u64(5), &facts);
        let b = Puzzle::new(ModuleId::new(2), &mut StdRng::seed_from_u64(5), &facts);

        assert_eq!(a.letters(), b.letters());
        assert_eq!(a.colors(), b.colors());
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn allocator_counts_up() {
        let mut ids = ModuleIdAllocator::default();
        assert_eq!(ids.allocate(), ModuleId::new(1));
        assert_eq!(ids.allocate(), ModuleId::new(2));
        assert_eq!(ids.allocate().to_string(), "#3");
    }

    #[test]
    fn new_puzzle_is_idle() {
        let puzzle = puzzle();
        assert_eq!(puzzle.phase(), Phase::Idle);
        assert!(!puzzle.is_solved());
    }
}
