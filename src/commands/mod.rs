//! Command implementations

pub mod session;
pub mod simple;
pub mod solve;
pub mod survey;

pub use session::{FactsSource, Session, SessionConfig};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use survey::{SurveyResult, run_survey};
