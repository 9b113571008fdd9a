//! Command orchestration.
//!
//! Routes raw input lines to the right evaluation path and drives the
//! quick-roll (`.r`) and repeat-check (`.d`/`.t`/`.m -n`) command forms.
//! Every public method is total: failures come back as `"错误：<message>"`
//! strings, never as panics or propagated errors.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use dicer_domain::DiceFormula;

use crate::adapters::ThreadRngAdapter;
use crate::error::EngineError;
use crate::ports::RandomPort;
use crate::{evaluator, parser, simulator};

static QUICK_ROLL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.r\s*(\d+)?").expect("valid quick-roll regex"));
static REPEAT_N_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.m\s+-(\d+)\s+(.+)").expect("valid .m regex"));
static REPEAT_DT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(d|t)\s+(.+)").expect("valid .d/.t regex"));

/// Dice-check engine: one evaluation entry point per command form.
///
/// Holds the random source behind [`RandomPort`] so embedders and tests
/// can substitute deterministic draws. Evaluation is synchronous and
/// stateless apart from that source; repeated trials share nothing else.
pub struct DiceEngine {
    rng: Arc<dyn RandomPort>,
}

impl DiceEngine {
    /// Create an engine drawing from the given random source.
    pub fn new(rng: Arc<dyn RandomPort>) -> Self {
        Self { rng }
    }

    /// Create an engine drawing from the thread-local RNG.
    pub fn with_thread_rng() -> Self {
        Self::new(Arc::new(ThreadRngAdapter::new()))
    }

    /// Route one raw input line to the matching evaluation path.
    ///
    /// `.r*` goes to the quick roll, `.d`/`.t`/`.m` to the repeat roll,
    /// anything else is treated as a check expression. The `.q` exit
    /// command is the embedding shell's concern, not the engine's.
    pub fn dispatch(&self, line: &str) -> String {
        if line.starts_with(".r") {
            self.quick_roll(line)
        } else if line.starts_with(".d") || line.starts_with(".t") || line.starts_with(".m") {
            self.repeat_roll(line)
        } else {
            self.evaluate_expression(line)
        }
    }

    /// Evaluate one check expression, e.g. `"20/1d100+2 -h"`.
    pub fn evaluate_expression(&self, expression: &str) -> String {
        self.try_evaluate(expression)
            .unwrap_or_else(|e| e.to_user_string())
    }

    /// Quick roll: `.r` rolls 1d100, `.r <n>` rolls 1d<n>, no threshold
    /// logic at all.
    pub fn quick_roll(&self, command: &str) -> String {
        self.try_quick_roll(command)
            .unwrap_or_else(|e| e.to_user_string())
    }

    /// Repeat roll: `.d <expr>` twice, `.t <expr>` three times,
    /// `.m -<n> <expr>` n times, each trial drawn independently and
    /// numbered from 1.
    pub fn repeat_roll(&self, command: &str) -> String {
        self.try_repeat_roll(command)
            .unwrap_or_else(|e| e.to_user_string())
    }

    fn try_evaluate(&self, expression: &str) -> Result<String, EngineError> {
        let request = parser::parse_expression(expression)?;
        let outcome = simulator::roll(self.rng.as_ref(), &request.formula);
        Ok(evaluator::evaluate(&request, &outcome))
    }

    fn try_quick_roll(&self, command: &str) -> Result<String, EngineError> {
        let caps = QUICK_ROLL_RE
            .captures(command)
            .ok_or(EngineError::InvalidQuickRoll)?;
        let sides: u32 = match caps.get(1) {
            Some(digits) => digits
                .as_str()
                .parse()
                .map_err(|_| EngineError::InvalidQuickRoll)?,
            None => 100,
        };

        let formula = DiceFormula::new(1, sides, 0)?;
        let outcome = simulator::roll(self.rng.as_ref(), &formula);

        tracing::debug!("Quick roll {} -> {}", formula, outcome.total);

        Ok(format!(
            "{}: {}={}",
            formula.display(),
            outcome.breakdown(),
            outcome.total
        ))
    }

    fn try_repeat_roll(&self, command: &str) -> Result<String, EngineError> {
        if let Some(caps) = REPEAT_N_RE.captures(command) {
            let digits = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let times: u32 = digits
                .parse()
                .map_err(|_| EngineError::InvalidRepeatCommand)?;
            if times == 0 {
                return Err(EngineError::InvalidRepeatCommand);
            }
            let expression = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            return Ok(self.run_trials(times, expression));
        }

        if let Some(caps) = REPEAT_DT_RE.captures(command) {
            let times = if caps.get(1).map(|m| m.as_str()) == Some("d") {
                2
            } else {
                3
            };
            let expression = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            return Ok(self.run_trials(times, expression));
        }

        Err(EngineError::InvalidRepeatCommand)
    }

    /// Run the expression `times` times with fresh draws, one numbered
    /// line per trial. A trial that fails to parse still emits its error
    /// string under its own number.
    fn run_trials(&self, times: u32, expression: &str) -> String {
        tracing::debug!("Running {} trials of '{}'", times, expression);
        (1..=times)
            .map(|i| format!("第 {} 次 -> {}", i, self.evaluate_expression(expression)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
