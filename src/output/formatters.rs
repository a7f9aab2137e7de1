//! Formatting utilities for terminal output

use crate::core::ButtonColor;
use crate::puzzle::{Outcome, PressEvent};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A button face in its pastel color
#[must_use]
pub fn button_face(label: char, color: ButtonColor, colorblind: bool) -> ColoredString {
    let (r, g, b) = color.rgb();
    let text = if colorblind {
        format!(" {label}{} ", color.initial().to_ascii_lowercase())
    } else {
        format!(" {label} ")
    };
    text.black().on_truecolor(r, g, b)
}

/// One-line description of a press
#[must_use]
pub fn describe_event(event: &PressEvent) -> String {
    match (event.outcome, event.repeat) {
        (Outcome::Incorrect, _) => format!("{}: strike", event.letter),
        (_, true) => format!("{}: already pressed", event.letter),
        (Outcome::Correct, false) => format!("{}: correct", event.letter),
        (Outcome::CorrectAndSolved, false) => format!("{}: correct, module solved", event.letter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Slot};

    fn event(outcome: Outcome, repeat: bool) -> PressEvent {
        PressEvent {
            slot: Slot::new(0).unwrap(),
            letter: Letter::Q,
            outcome,
            repeat,
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn describe_events() {
        assert_eq!(describe_event(&event(Outcome::Incorrect, false)), "Q: strike");
        assert_eq!(describe_event(&event(Outcome::Correct, false)), "Q: correct");
        assert_eq!(
            describe_event(&event(Outcome::Correct, true)),
            "Q: already pressed"
        );
        assert_eq!(
            describe_event(&event(Outcome::CorrectAndSolved, false)),
            "Q: correct, module solved"
        );
    }
}
