//! Age-out adjustment.
//!
//! Runs as a separate pass after the rule table: whether a patient ages
//! out depends on current age versus a future revisit date, which is
//! orthogonal to the clinical predicates. Review outcomes are never
//! touched; a high-risk finding keeps the patient eligible for rescoping
//! up to an extended ceiling.

use triage_model::{Outcome, RuleId};

/// Default stop age: no ordinary surveillance interval may project the
/// next exam past this age.
pub const DEFAULT_STOP_AGE: u32 = 75;
/// Extended ceiling for high-risk findings (rule_5 through rule_9): the
/// finding outweighs the default stop age while the patient is at most
/// this old.
pub const HIGH_RISK_STOP_AGE: u32 = 78;

/// Apply the age-out override to an evaluated outcome.
///
/// Review outcomes pass through unchanged. High-risk findings age out only
/// when the patient is already older than [`HIGH_RISK_STOP_AGE`]. Any
/// other numeric outcome is overridden to `rule_20` when the projected age
/// at the next exam strictly exceeds [`DEFAULT_STOP_AGE`]; landing exactly
/// on the stop age does not trigger the override.
pub fn apply(age: u32, outcome: Outcome) -> Outcome {
    if outcome.needs_review() {
        return outcome;
    }
    let aged_out = if outcome.rule.is_high_risk_finding() {
        age > HIGH_RISK_STOP_AGE
    } else {
        // Widened arithmetic: the projected age must not wrap for any age
        // the caller can hand us.
        u64::from(age) + u64::from(outcome.follow_up) > u64::from(DEFAULT_STOP_AGE)
    };
    if aged_out {
        tracing::debug!(age, rule = %outcome.rule, "outcome overridden by age-out");
        Outcome::from_rule(RuleId::Rule20)
    } else {
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_model::FOLLOW_UP_AGED_OUT;

    #[test]
    fn ordinary_outcome_ages_out_past_75() {
        let outcome = apply(71, Outcome::from_rule(RuleId::Rule14));
        assert_eq!(outcome.rule, RuleId::Rule20);
        assert_eq!(outcome.follow_up, FOLLOW_UP_AGED_OUT);
        assert_eq!(outcome.reason, "Patient aged out");
    }

    #[test]
    fn landing_exactly_on_the_stop_age_does_not_age_out() {
        // 70 + 5 == 75: strict comparison only.
        let outcome = apply(70, Outcome::from_rule(RuleId::Rule14));
        assert_eq!(outcome.rule, RuleId::Rule14);
    }

    #[test]
    fn high_risk_finding_passes_through_up_to_extended_ceiling() {
        let outcome = apply(76, Outcome::from_rule(RuleId::Rule7));
        assert_eq!(outcome.rule, RuleId::Rule7);
        assert_eq!(apply(78, Outcome::from_rule(RuleId::Rule5)).rule, RuleId::Rule5);
    }

    #[test]
    fn high_risk_finding_ages_out_past_extended_ceiling() {
        let outcome = apply(79, Outcome::from_rule(RuleId::Rule7));
        assert_eq!(outcome.rule, RuleId::Rule20);
    }

    #[test]
    fn extreme_age_ages_out_without_wrapping() {
        let outcome = apply(u32::MAX, Outcome::from_rule(RuleId::Rule14));
        assert_eq!(outcome.rule, RuleId::Rule20);
        assert_eq!(apply(u32::MAX, Outcome::from_rule(RuleId::Rule7)).rule, RuleId::Rule20);
    }

    #[test]
    fn review_outcomes_are_never_touched() {
        for rule in [RuleId::Rule1, RuleId::Rule4, RuleId::Rule19, RuleId::Rule21] {
            let outcome = apply(90, Outcome::from_rule(rule));
            assert_eq!(outcome.rule, rule);
        }
    }
}
