//! The rule table
//!
//! One rule per letter. A letter belongs to the solution when its rule holds
//! for the current bomb, color assignment and letter assignment.

use super::{ColorAssignment, LetterAssignment};
use crate::core::{ButtonColor, LETTER_COUNT, Letter};
use crate::facts::{BombInfo, Port};

/// Everything a rule may look at, frozen for one evaluation
pub struct RuleInputs<'a> {
    pub letters: &'a LetterAssignment,
    pub colors: &'a ColorAssignment,
    pub facts: &'a dyn BombInfo,
}

impl RuleInputs<'_> {
    fn color(&self, letter: Letter) -> u8 {
        self.colors.index_of(letter)
    }

    fn position(&self, letter: Letter) -> usize {
        self.letters.slot_of(letter).position()
    }
}

/// A single letter's rule
pub struct Rule {
    pub description: &'static str,
    check: fn(&RuleInputs<'_>) -> bool,
}

impl Rule {
    #[inline]
    #[must_use]
    pub fn holds(&self, inputs: &RuleInputs<'_>) -> bool {
        (self.check)(inputs)
    }
}

/// Rules indexed by letter, A first
pub static RULES: [Rule; LETTER_COUNT] = [
    Rule {
        description: "An RJ-45 port is present",
        check: |i| i.facts.is_port_present(Port::Rj45),
    },
    Rule {
        description: "The last digit of the serial number is 0, 3, 6 or 9",
        check: |i| i.facts.serial_number().last_digit() % 3 == 0,
    },
    Rule {
        description: "A parallel port is present",
        check: |i| i.facts.is_port_present(Port::Parallel),
    },
    Rule {
        description: "A serial port is present",
        check: |i| i.facts.is_port_present(Port::Serial),
    },
    Rule {
        description: "The last digit of the serial number is 0 or 5",
        check: |i| i.facts.serial_number().last_digit() % 5 == 0,
    },
    Rule {
        description: "A CAR indicator is present",
        check: |i| i.facts.is_indicator_present("CAR"),
    },
    Rule {
        description: "A lit SIG indicator is present",
        check: |i| i.facts.is_indicator_lit("SIG"),
    },
    Rule {
        description: "Both a PS/2 port and a DVI-D port are present",
        check: |i| i.facts.is_port_present(Port::Ps2) && i.facts.is_port_present(Port::DviD),
    },
    Rule {
        description: "There is an empty port plate",
        check: |i| i.facts.port_plates().iter().any(|plate| plate.is_empty()),
    },
    Rule {
        description: "J is red, yellow, cyan or magenta",
        check: |i| i.color(Letter::J) % 2 == 0,
    },
    Rule {
        description: "There are at least 4 batteries",
        check: |i| i.facts.battery_count() >= 4,
    },
    Rule {
        description: "One of R, O, Y, G, C, B, M has the color it names",
        check: |i| {
            ButtonColor::ALL.iter().any(|&color| {
                Letter::from_char(color.initial())
                    .is_ok_and(|letter| i.color(letter) == color.index())
            })
        },
    },
    Rule {
        description: "M is red or magenta",
        check: |i| i.color(Letter::M) % 6 == 0,
    },
    Rule {
        description: "The serial number contains an N",
        check: |i| i.facts.serial_number().contains('N'),
    },
    Rule {
        description: "O is red, orange or yellow",
        check: |i| i.color(Letter::O) <= 2,
    },
    Rule {
        description: "P is red, blue or magenta",
        check: |i| {
            let color = i.color(Letter::P);
            color == 0 || color >= 5
        },
    },
    Rule {
        description: "The second character of the serial number is a Q",
        check: |i| i.facts.serial_number().char_at(1) == Some('Q'),
    },
    Rule {
        description: "R is red, orange, cyan or magenta",
        check: |i| matches!(i.color(Letter::R), 0 | 1 | 4 | 6),
    },
    Rule {
        description: "S is on one of the first five buttons",
        check: |i| i.position(Letter::S) <= 4,
    },
    Rule {
        description: "T is on a button whose position is a multiple of 5",
        check: |i| i.position(Letter::T) % 5 == 0,
    },
    Rule {
        description: "U is magenta",
        check: |i| i.color(Letter::U) == 6,
    },
    Rule {
        description: "V is orange, green or blue",
        check: |i| i.color(Letter::V) % 2 == 1,
    },
    Rule {
        description: "The serial number contains a 2",
        check: |i| i.facts.serial_number().contains('2'),
    },
    Rule {
        description: "There are at least 4 battery holders",
        check: |i| i.facts.battery_holder_count() >= 4,
    },
    Rule {
        description: "Y is yellow",
        check: |i| i.color(Letter::Y) == 2,
    },
    Rule {
        description: "Z is on the last button",
        check: |i| i.position(Letter::Z) == LETTER_COUNT - 1,
    },
];

/// The rule for a letter
#[must_use]
pub fn rule_for(letter: Letter) -> &'static Rule {
    &RULES[letter.index()]
}
