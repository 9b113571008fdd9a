//! Dicer domain layer.
//!
//! Pure rules for TRPG dice checks: formula parsing, roll outcomes,
//! difficulty thresholds, and the d100 critical tiers. No I/O and no
//! direct RNG dependency - dice draws are supplied by the caller.

pub mod value_objects;

pub use value_objects::{
    check_success, CheckRequest, CheckResult, CriticalTier, DiceFormula, DiceParseError,
    DifficultyLevel, RollOutcome,
};
