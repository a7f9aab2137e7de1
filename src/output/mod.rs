//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    BOARD_ROWS, print_board, print_facts, print_press_events, print_solve_result,
    print_survey_result,
};
