//! Text command front-end
//!
//! Chat-style control: `press A B C` presses the buttons labeled A, B and C in
//! that order. Labels are case-insensitive; anything that is not a single
//! letter is ignored.

use crate::core::Letter;

/// Usage hint, `{0}` stands for the module id
pub const HELP_MESSAGE: &str = "Use !{0} press 'A B C' to press the buttons with those labels.";

/// A parsed `press` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressCommand {
    labels: Vec<Letter>,
}

impl PressCommand {
    /// Parse a command line
    ///
    /// Returns `None` unless the first word is `press` and at least one more
    /// word follows.
    ///
    /// # Examples
    /// ```
    /// use alphabet_buttons::core::Letter;
    /// use alphabet_buttons::puzzle::PressCommand;
    ///
    /// let command = PressCommand::parse("PRESS a  z xy").unwrap();
    /// assert_eq!(command.labels(), &[Letter::A, Letter::Z]);
    ///
    /// assert!(PressCommand::parse("press").is_none());
    /// assert!(PressCommand::parse("push a").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let mut words = lowered.split_whitespace();

        if words.next()? != "press" {
            return None;
        }

        let rest: Vec<&str> = words.collect();
        if rest.is_empty() {
            return None;
        }

        let labels = rest.into_iter().filter_map(single_letter).collect();
        Some(Self { labels })
    }

    /// Labels to press, in order
    #[must_use]
    pub fn labels(&self) -> &[Letter] {
        &self.labels
    }
}

fn single_letter(word: &str) -> Option<Letter> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Letter::from_char(ch).ok(),
        _ => None,
    }
}

/// Help text for a module
#[must_use]
pub fn help_message(id: u32) -> String {
    HELP_MESSAGE.replace("{0}", &id.to_string())
}
