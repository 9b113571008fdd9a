//! Dice simulator.
//!
//! Draws each die independently through the injected `RandomPort` and
//! assembles the domain `RollOutcome`.

use dicer_domain::{DiceFormula, RollOutcome};

use crate::ports::RandomPort;

/// Roll a formula: `count` independent uniform draws in `[1, sides]`,
/// summed and offset by the modifier.
pub fn roll(rng: &dyn RandomPort, formula: &DiceFormula) -> RollOutcome {
    let rolls: Vec<i32> = (0..formula.count)
        .map(|_| rng.random_range(1, formula.sides as i32))
        .collect();
    RollOutcome::new(rolls, formula.modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ThreadRngAdapter;
    use crate::ports::FixedRandomPort;

    #[test]
    fn test_roll_draw_count_and_total() {
        let rng = FixedRandomPort::new(vec![4, 5, 6]);
        let formula = DiceFormula::parse("3d6+2").unwrap();
        let outcome = roll(&rng, &formula);

        assert_eq!(outcome.rolls, vec![4, 5, 6]);
        assert_eq!(outcome.total, 17);
        assert_eq!(outcome.breakdown(), "4+5+6+2");
    }

    #[test]
    fn test_roll_bounds() {
        let rng = ThreadRngAdapter::new();
        let formula = DiceFormula::parse("4d6-2").unwrap();
        for _ in 0..100 {
            let outcome = roll(&rng, &formula);
            assert_eq!(outcome.rolls.len(), 4);
            for d in &outcome.rolls {
                assert!((1..=6).contains(d), "Draw {} out of range", d);
            }
            assert!(outcome.total >= formula.min_roll());
            assert!(outcome.total <= formula.max_roll());
            assert_eq!(outcome.total, outcome.rolls.iter().sum::<i32>() - 2);
        }
    }

    #[test]
    fn test_roll_one_sided_die() {
        let rng = ThreadRngAdapter::new();
        let formula = DiceFormula::parse("2d1").unwrap();
        let outcome = roll(&rng, &formula);
        assert_eq!(outcome.total, 2);
    }
}
