//! Outcome evaluation and result formatting.
//!
//! Resolution order:
//! 1. d100 critical override - a total of 1 is a critical success and a
//!    total of 96+ a critical failure, skipping the threshold comparison
//!    entirely (even when a target was supplied),
//! 2. threshold comparison under the difficulty level,
//! 3. gamble escalation, which rephrases a failure as a forced critical
//!    failure and never touches a success.
//!
//! The result line is always
//! `"<dice-text>: <breakdown>=<total>, <outcome-clause>"`.

use dicer_domain::{check_success, CheckRequest, CheckResult, CriticalTier, RollOutcome};

/// Resolve a rolled total against the request without formatting.
///
/// `success` and `threshold` are only meaningful when a target was
/// supplied and no critical tier fired.
pub fn classify(request: &CheckRequest, total: i32) -> CheckResult {
    let critical = if request.triggers_percentile_critical() {
        CriticalTier::from_percentile_total(total)
    } else {
        CriticalTier::None
    };

    if critical != CriticalTier::None {
        return CheckResult {
            success: critical == CriticalTier::CriticalSuccess,
            threshold: 0,
            critical,
            gamble_escalated: false,
        };
    }

    match request.target {
        Some(target) => {
            let (success, threshold) = check_success(total, target, request.difficulty);
            CheckResult {
                success,
                threshold,
                critical: CriticalTier::None,
                gamble_escalated: !success && request.gamble,
            }
        }
        None => CheckResult {
            success: false,
            threshold: 0,
            critical: CriticalTier::None,
            gamble_escalated: false,
        },
    }
}

/// Evaluate a roll and render the final result line.
pub fn evaluate(request: &CheckRequest, outcome: &RollOutcome) -> String {
    let result = classify(request, outcome.total);
    let total = outcome.total;

    let clause = match result.critical {
        CriticalTier::CriticalSuccess => "大成功！".to_string(),
        CriticalTier::CriticalFailure => "大失败！".to_string(),
        CriticalTier::None => match request.target {
            None => format!("{total}"),
            Some(_) => {
                let qualifier = request.difficulty.qualifier();
                let threshold = result.threshold;
                if result.success {
                    format!("{total}<={threshold}, {qualifier}检定通过！")
                } else if result.gamble_escalated {
                    format!("{total}>{threshold}, {qualifier}孤注一掷失败，视为大失败！")
                } else {
                    format!("{total}>{threshold}, {qualifier}检定失败！")
                }
            }
        },
    };

    tracing::debug!("Evaluated {} -> total {}, {:?}", request.dice_text, total, result);

    format!(
        "{}: {}={}, {}",
        request.dice_text,
        outcome.breakdown(),
        total,
        clause
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicer_domain::{DiceFormula, DifficultyLevel};

    fn request(
        target: Option<i32>,
        difficulty: DifficultyLevel,
        gamble: bool,
        dice_text: &str,
    ) -> CheckRequest {
        CheckRequest {
            target,
            difficulty,
            gamble,
            dice_text: dice_text.to_string(),
            formula: DiceFormula::parse(dice_text).unwrap(),
        }
    }

    #[test]
    fn test_bare_total_without_target() {
        let req = request(None, DifficultyLevel::Normal, false, "3d6+2");
        let outcome = RollOutcome::new(vec![4, 5, 6], 2);
        assert_eq!(evaluate(&req, &outcome), "3d6+2: 4+5+6+2=17, 17");
    }

    #[test]
    fn test_normal_success_and_failure() {
        let req = request(Some(20), DifficultyLevel::Normal, false, "1d100+2");
        let pass = RollOutcome::new(vec![15], 2);
        assert_eq!(evaluate(&req, &pass), "1d100+2: 15+2=17, 17<=20, 检定通过！");

        let fail = RollOutcome::new(vec![50], 2);
        assert_eq!(evaluate(&req, &fail), "1d100+2: 50+2=52, 52>20, 检定失败！");
    }

    #[test]
    fn test_difficulty_qualifiers_in_phrasing() {
        let req = request(Some(40), DifficultyLevel::Hard, false, "1d100+2");
        let outcome = RollOutcome::new(vec![15], 2);
        assert_eq!(
            evaluate(&req, &outcome),
            "1d100+2: 15+2=17, 17<=20, 困难检定通过！"
        );

        let req = request(Some(50), DifficultyLevel::Extreme, false, "1d100+2");
        let outcome = RollOutcome::new(vec![15], 2);
        assert_eq!(
            evaluate(&req, &outcome),
            "1d100+2: 15+2=17, 17>10, 极难检定失败！"
        );
    }

    #[test]
    fn test_critical_success_skips_threshold() {
        // Even a hopeless target cannot demote a rolled 1
        let req = request(Some(0), DifficultyLevel::Extreme, true, "1d100");
        let outcome = RollOutcome::new(vec![1], 0);
        assert_eq!(evaluate(&req, &outcome), "1d100: 1=1, 大成功！");
    }

    #[test]
    fn test_critical_failure_skips_threshold() {
        // A total of 96+ is a critical failure even against target 100
        let req = request(Some(100), DifficultyLevel::Normal, false, "1d100");
        let outcome = RollOutcome::new(vec![97], 0);
        assert_eq!(evaluate(&req, &outcome), "1d100: 97=97, 大失败！");
    }

    #[test]
    fn test_critical_trigger_is_substring_based() {
        // "21d100" contains "1d100" textually, so the override applies
        let req = request(Some(50), DifficultyLevel::Normal, false, "21d100");
        let mut rolls = vec![1; 20];
        rolls.push(76);
        let outcome = RollOutcome::new(rolls, 0);
        assert_eq!(outcome.total, 96);
        assert!(evaluate(&req, &outcome).ends_with("大失败！"));

        // "2d100" does not, so the threshold comparison runs
        let req = request(Some(50), DifficultyLevel::Normal, false, "2d100");
        let outcome = RollOutcome::new(vec![48, 48], 0);
        assert_eq!(evaluate(&req, &outcome), "2d100: 48+48=96, 96>50, 检定失败！");
    }

    #[test]
    fn test_modifier_shifts_total_into_critical_band() {
        let req = request(Some(50), DifficultyLevel::Normal, false, "1d100+2");
        let outcome = RollOutcome::new(vec![94], 2);
        assert_eq!(evaluate(&req, &outcome), "1d100+2: 94+2=96, 大失败！");
    }

    #[test]
    fn test_gamble_escalates_failures_only() {
        let req = request(Some(20), DifficultyLevel::Normal, true, "1d100");
        let fail = RollOutcome::new(vec![50], 0);
        assert_eq!(
            evaluate(&req, &fail),
            "1d100: 50=50, 50>20, 孤注一掷失败，视为大失败！"
        );

        // Success is unaffected by gamble mode
        let pass = RollOutcome::new(vec![15], 0);
        assert_eq!(evaluate(&req, &pass), "1d100: 15=15, 15<=20, 检定通过！");
    }

    #[test]
    fn test_gamble_with_difficulty_qualifier() {
        let req = request(Some(100), DifficultyLevel::Extreme, true, "1d100");
        let outcome = RollOutcome::new(vec![50], 0);
        assert_eq!(
            evaluate(&req, &outcome),
            "1d100: 50=50, 50>20, 极难孤注一掷失败，视为大失败！"
        );
    }

    #[test]
    fn test_classify_exposes_check_result() {
        let req = request(Some(40), DifficultyLevel::Hard, true, "1d100");
        let result = classify(&req, 30);
        assert!(!result.success);
        assert_eq!(result.threshold, 20);
        assert_eq!(result.critical, CriticalTier::None);
        assert!(result.gamble_escalated);

        let result = classify(&req, 1);
        assert_eq!(result.critical, CriticalTier::CriticalSuccess);
        assert!(result.success);
        assert!(!result.gamble_escalated);
    }
}
