//! Unified error type for the engine layer.
//!
//! Every public evaluation entry point is a total function: errors are
//! caught at the boundary and rendered as a fixed-format string rather
//! than propagated to the caller.

use dicer_domain::DiceParseError;
use thiserror::Error;

/// Unified error type for expression and command evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Dice-formula grammar mismatch or degenerate dice values
    #[error(transparent)]
    Dice(#[from] DiceParseError),

    /// Target segment before the '/' is not an integer
    #[error("无效的需求值：{0}")]
    InvalidTarget(String),

    /// Quick-roll command does not match `.r [n]`
    #[error("无效的表达式！")]
    InvalidQuickRoll,

    /// Repeat command does not match `.d/.t <expr>` or `.m -<n> <expr>`
    #[error("无效的重复检定指令！")]
    InvalidRepeatCommand,
}

impl EngineError {
    /// Render in the engine's fixed error-string format.
    pub fn to_user_string(&self) -> String {
        format!("错误：{self}")
    }
}
