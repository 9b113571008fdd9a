//! Check-expression parser.
//!
//! Grammar: `[<target>/]<count>d<sides>[<+/-modifier>] [-h|-e] [-g]` with
//! flags detected anywhere in the text. Flags are stripped before the
//! remaining dice text is handed to the domain formula parser:
//!
//! 1. `-g` (gamble) is extracted first,
//! 2. then `-h` (hard) or `-e` (extreme) - hard wins when both are
//!    present, a preserved tie-break rather than an error,
//! 3. then the text is split on the FIRST `/` into target and dice text.

use dicer_domain::{CheckRequest, DiceFormula, DifficultyLevel};

use crate::error::EngineError;

/// Parse one full check expression into a `CheckRequest`.
pub fn parse_expression(expression: &str) -> Result<CheckRequest, EngineError> {
    let mut text = expression.to_string();

    let gamble = text.contains("-g");
    if gamble {
        text = text.replace("-g", "");
    }

    let difficulty = if text.contains("-h") {
        text = text.replace("-h", "");
        DifficultyLevel::Hard
    } else if text.contains("-e") {
        text = text.replace("-e", "");
        DifficultyLevel::Extreme
    } else {
        DifficultyLevel::Normal
    };

    let (target, dice_text) = match text.find('/') {
        Some(slash) => {
            let raw_target = text[..slash].trim();
            let target: i32 = raw_target
                .parse()
                .map_err(|_| EngineError::InvalidTarget(raw_target.to_string()))?;
            (Some(target), &text[slash + 1..])
        }
        None => (None, text.as_str()),
    };

    let dice_text = dice_text.trim().to_string();
    let formula = DiceFormula::parse(&dice_text)?;

    tracing::debug!("Parsed expression '{}' as {:?}", expression, formula);

    Ok(CheckRequest {
        target,
        difficulty,
        gamble,
        dice_text,
        formula,
    })
}
