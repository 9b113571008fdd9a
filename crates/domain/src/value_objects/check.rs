//! Threshold-check value objects.
//!
//! CoC-style roll-under adjudication: a rolled total passes when it is
//! less than or equal to the target, scaled down by the difficulty level.
//! Percentile (d100) rolls additionally carry two fixed critical tiers
//! that bypass the threshold comparison entirely.

use serde::{Deserialize, Serialize};

use super::dice::DiceFormula;

/// Difficulty level for a threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Pass when total <= target
    Normal,
    /// Pass when total <= target / 2 (floor)
    Hard,
    /// Pass when total <= target / 5 (floor)
    Extreme,
}

impl DifficultyLevel {
    /// The value actually compared against, as a floor division of the
    /// caller's target.
    pub fn threshold(&self, target: i32) -> i32 {
        match self {
            DifficultyLevel::Normal => target,
            DifficultyLevel::Hard => target.div_euclid(2),
            DifficultyLevel::Extreme => target.div_euclid(5),
        }
    }

    /// Qualifier prefix inserted into the result phrasing ("困难"/"极难",
    /// empty for Normal).
    pub fn qualifier(&self) -> &'static str {
        match self {
            DifficultyLevel::Normal => "",
            DifficultyLevel::Hard => "困难",
            DifficultyLevel::Extreme => "极难",
        }
    }
}

/// Fixed, difficulty-independent outcome tiers for percentile rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalTier {
    None,
    /// Total of 1 on a percentile roll
    CriticalSuccess,
    /// Total of 96 or above on a percentile roll
    CriticalFailure,
}

impl CriticalTier {
    /// Classify a percentile roll total. Only meaningful for rolls whose
    /// dice text triggers the d100 special case.
    pub fn from_percentile_total(total: i32) -> Self {
        if total == 1 {
            CriticalTier::CriticalSuccess
        } else if total >= 96 {
            CriticalTier::CriticalFailure
        } else {
            CriticalTier::None
        }
    }
}

/// A fully parsed check expression, ready to roll and evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    /// Threshold target; absent means no pass/fail comparison at all
    pub target: Option<i32>,
    pub difficulty: DifficultyLevel,
    /// Gamble mode: a failure is reported as a forced critical failure
    pub gamble: bool,
    /// Trimmed dice-expression text, used for display and for the
    /// literal "1d100" percentile trigger (a textual check, deliberately
    /// not structural - "21d100" and "1d100+3" both trigger it)
    pub dice_text: String,
    pub formula: DiceFormula,
}

impl CheckRequest {
    /// Whether this roll is subject to the d100 critical override.
    pub fn triggers_percentile_critical(&self) -> bool {
        self.dice_text.contains("1d100")
    }
}

/// Result of comparing a rolled total against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Meaningless when the request carried no target
    pub success: bool,
    /// The value actually compared against
    pub threshold: i32,
    pub critical: CriticalTier,
    /// True when a failure under gamble mode is escalated in phrasing
    pub gamble_escalated: bool,
}

/// Determine whether a total passes a target under a difficulty level.
/// Returns the pass/fail flag and the threshold actually compared against.
pub fn check_success(total: i32, target: i32, difficulty: DifficultyLevel) -> (bool, i32) {
    let threshold = difficulty.threshold(target);
    (total <= threshold, threshold)
}
