//! Value objects - Immutable objects defined by their attributes

mod check;
mod dice;

pub use check::{check_success, CheckRequest, CheckResult, CriticalTier, DifficultyLevel};
pub use dice::{DiceFormula, DiceParseError, RollOutcome};
