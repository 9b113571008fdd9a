//! Dice rolling value objects and parsing
//!
//! Supports dice formulas like "3d6+2", "1d100", "d20-1". Parsing is a
//! prefix match: the formula is read off the front of the text and any
//! trailing characters are left to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("掷骰表达式为空！")]
    Empty,
    /// Leading text does not match the `<count>d<sides>[+/-modifier]` grammar
    #[error("无效的表达式：{0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("骰子数量至少为 1！")]
    InvalidDiceCount,
    /// Die size must be at least 1
    #[error("骰子面数至少为 1！")]
    InvalidDieSize,
    /// Count, sides, or the maximum possible total exceed the computable range
    #[error("骰点数值超出可计算范围！")]
    Overflow,
}

/// A parsed dice formula like "3d6+2"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY), defaults to 1 when omitted
    pub count: u32,
    /// Size of each die (Y in XdY)
    pub sides: u32,
    /// Modifier added after rolling (+Z or -Z), defaults to 0
    pub modifier: i32,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, DiceParseError> {
        if count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if sides == 0 {
            return Err(DiceParseError::InvalidDieSize);
        }
        // Keep every reachable total (and each draw) within i32 so the
        // simulator and totals never wrap
        let limit = i32::MAX as i64;
        let max_total = count as i64 * sides as i64 + modifier as i64;
        if count as i64 > limit || sides as i64 > limit || max_total > limit {
            return Err(DiceParseError::Overflow);
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Parse the leading `(\d*)d(\d+)([+-]\d+)?` pattern off `input`.
    ///
    /// Trailing characters after the matched prefix are not an error at
    /// this layer; the caller strips flags and target segments first.
    /// A modifier sign without digits is treated as trailing text.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let bytes = input.as_bytes();
        let invalid = || DiceParseError::InvalidFormat(input.to_string());

        // Optional count digits before 'd'
        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let count: u32 = if pos == 0 {
            1 // "d20" means "1d20"
        } else {
            input[..pos].parse().map_err(|_| invalid())?
        };

        // Literal 'd' separator
        if pos >= bytes.len() || bytes[pos] != b'd' {
            return Err(invalid());
        }
        pos += 1;

        // One-or-more side digits
        let sides_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == sides_start {
            return Err(invalid());
        }
        let sides: u32 = input[sides_start..pos].parse().map_err(|_| invalid())?;

        // Optional sign-and-digits modifier
        let mut modifier: i32 = 0;
        if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            let sign_pos = pos;
            let mut end = pos + 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end > pos + 1 {
                modifier = input[sign_pos..end].parse().map_err(|_| invalid())?;
            }
        }

        Self::new(count, sides, modifier)
    }

    /// Get the minimum possible roll
    pub fn min_roll(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Get the maximum possible roll
    pub fn max_roll(&self) -> i32 {
        // In range for any formula accepted by `new`
        (self.count as i64 * self.sides as i64 + self.modifier as i64) as i32
    }

    /// Format as a display string (e.g., "1d100", "3d6+2")
    pub fn display(&self) -> String {
        if self.modifier == 0 {
            format!("{}d{}", self.count, self.sides)
        } else {
            format!("{}d{}{:+}", self.count, self.sides, self.modifier)
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Result of rolling a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    /// Individual die results, each in `1..=sides`
    pub rolls: Vec<i32>,
    /// Modifier that was applied
    pub modifier: i32,
    /// Final total (sum of rolls + modifier)
    pub total: i32,
}

impl RollOutcome {
    /// Create an outcome from per-die draws and a modifier.
    ///
    /// Accumulates in i64: draws from any formula accepted by
    /// `DiceFormula::new` are guaranteed to total within i32.
    pub fn new(rolls: Vec<i32>, modifier: i32) -> Self {
        let total = (rolls.iter().map(|&r| r as i64).sum::<i64>() + modifier as i64) as i32;
        Self {
            rolls,
            modifier,
            total,
        }
    }

    /// Per-die breakdown joined with `+`, with the signed modifier suffix
    /// appended only when the modifier is non-zero (e.g. "4+5+6+2" for
    /// 3d6+2 rolled as 4, 5, 6).
    pub fn breakdown(&self) -> String {
        let mut details = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("+");
        if self.modifier != 0 {
            details.push_str(&format!("{:+}", self.modifier));
        }
        details
    }
}
