//! Fixed-point cycle detector
//!
//! Deterministic transforms over a finite state space eventually revisit
//! a configuration. Recording each configuration with the step at which
//! it first appeared lets the state after an astronomically large number
//! of applications be read back out of the first cycle occurrence.

use crate::error::CycleError;
use std::collections::HashMap;
use std::hash::Hash;

/// Default iteration budget for [`run_to_step`].
///
/// A repeat must appear within this many applications; exceeding it means
/// the transform is not behaving like a function over a bounded state
/// space and the detector refuses to loop forever.
pub const DEFAULT_STEP_BUDGET: usize = 1 << 20;

/// Compute the configuration after `target_step` applications of
/// `transform`, with the [`DEFAULT_STEP_BUDGET`].
///
/// See [`run_to_step_bounded`].
pub fn run_to_step<S>(
    initial: S,
    transform: impl FnMut(&S) -> S,
    target_step: usize,
) -> Result<S, CycleError>
where
    S: Clone + Eq + Hash,
{
    run_to_step_bounded(initial, transform, target_step, DEFAULT_STEP_BUDGET)
}

/// Compute the configuration after `target_step` applications of
/// `transform`, detecting and exploiting a cycle when one appears.
///
/// Configurations are compared by value. On the first repeat at step `t`
/// of a configuration first seen at step `s`, the cycle has length
/// `t - s` and the answer is the recorded configuration at
/// `s + (target_step - s) % (t - s)` — identical to what direct iteration
/// would produce. If `target_step` is reached before any repeat, the
/// direct result is returned.
///
/// # Errors
///
/// [`CycleError::BudgetExhausted`] if more than `budget` applications
/// happen without reaching `target_step` or finding a repeat.
pub fn run_to_step_bounded<S>(
    initial: S,
    mut transform: impl FnMut(&S) -> S,
    target_step: usize,
    budget: usize,
) -> Result<S, CycleError>
where
    S: Clone + Eq + Hash,
{
    if target_step == 0 {
        return Ok(initial);
    }

    let mut seen: HashMap<S, usize> = HashMap::new();
    let mut history = vec![initial];
    seen.insert(history[0].clone(), 0);

    for step in 1..=target_step {
        if step > budget {
            return Err(CycleError::BudgetExhausted(budget));
        }
        let next = transform(&history[step - 1]);
        if step == target_step {
            return Ok(next);
        }
        if let Some(&cycle_start) = seen.get(&next) {
            let cycle_len = step - cycle_start;
            let effective = cycle_start + (target_step - cycle_start) % cycle_len;
            return Ok(history[effective].clone());
        }
        seen.insert(next.clone(), step);
        history.push(next);
    }
    unreachable!("loop returns at step == target_step")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add3_mod7(x: &u32) -> u32 {
        (x + 3) % 7
    }

    #[test]
    fn matches_direct_iteration_for_small_steps() {
        // step 5: 15 mod 7 == 1
        assert_eq!(run_to_step(0u32, add3_mod7, 5), Ok(1));
    }

    #[test]
    fn skips_over_long_cycles() {
        // (3 * 1000) mod 7 == 2
        assert_eq!(run_to_step(0u32, add3_mod7, 1000), Ok(2));
    }

    #[test]
    fn target_step_zero_returns_initial() {
        assert_eq!(run_to_step(42u32, add3_mod7, 0), Ok(42));
    }

    #[test]
    fn fixed_point_transform() {
        // x -> 5 for all x: repeat appears at step 2 with cycle length 1.
        assert_eq!(run_to_step(1u32, |_| 5, 1_000_000_000), Ok(5));
    }

    #[test]
    fn direct_result_before_any_cycle() {
        // Strictly increasing: no repeat ever, target hit directly.
        assert_eq!(run_to_step(0u64, |x| x + 1, 10), Ok(10));
    }

    #[test]
    fn budget_guards_against_nonrepeating_transforms() {
        let result = run_to_step_bounded(0u64, |x| x + 1, 1_000_000, 100);
        assert_eq!(result, Err(CycleError::BudgetExhausted(100)));
    }
}
