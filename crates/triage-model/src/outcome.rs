//! Rule identifiers, the rule registry, and the triage outcome.
//!
//! The registry is a single immutable mapping from rule id to canonical
//! description and follow-up interval, expressed as associated data on
//! [`RuleId`]. Both the evaluator and any auditing consumer read the same
//! registry; adding a rule means one new variant here and one new row in
//! the engine's table, nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Follow-up sentinel: no guideline-safe interval, refer for human review.
pub const FOLLOW_UP_REVIEW: u8 = 0;
/// Follow-up sentinel: patient aged out of further surveillance.
pub const FOLLOW_UP_AGED_OUT: u8 = 20;

/// Identifier of a surveillance guideline rule.
///
/// Wire form is `rule_1` through `rule_21`. The numbering follows the
/// published table, not evaluation order: `rule_21` (incomplete resection
/// or retrieval) is evaluated among the review short-circuits and
/// `rule_20` is reserved for the age-out override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "rule_1")]
    Rule1,
    #[serde(rename = "rule_2")]
    Rule2,
    #[serde(rename = "rule_3")]
    Rule3,
    #[serde(rename = "rule_4")]
    Rule4,
    #[serde(rename = "rule_5")]
    Rule5,
    #[serde(rename = "rule_6")]
    Rule6,
    #[serde(rename = "rule_7")]
    Rule7,
    #[serde(rename = "rule_8")]
    Rule8,
    #[serde(rename = "rule_9")]
    Rule9,
    #[serde(rename = "rule_10")]
    Rule10,
    #[serde(rename = "rule_11")]
    Rule11,
    #[serde(rename = "rule_12")]
    Rule12,
    #[serde(rename = "rule_13")]
    Rule13,
    #[serde(rename = "rule_14")]
    Rule14,
    #[serde(rename = "rule_15")]
    Rule15,
    #[serde(rename = "rule_16")]
    Rule16,
    #[serde(rename = "rule_17")]
    Rule17,
    #[serde(rename = "rule_18")]
    Rule18,
    #[serde(rename = "rule_19")]
    Rule19,
    #[serde(rename = "rule_20")]
    Rule20,
    #[serde(rename = "rule_21")]
    Rule21,
}

impl RuleId {
    /// Every rule in the registry, in id order. Stable and enumerable for
    /// downstream audit tooling.
    pub const ALL: [RuleId; 21] = [
        RuleId::Rule1,
        RuleId::Rule2,
        RuleId::Rule3,
        RuleId::Rule4,
        RuleId::Rule5,
        RuleId::Rule6,
        RuleId::Rule7,
        RuleId::Rule8,
        RuleId::Rule9,
        RuleId::Rule10,
        RuleId::Rule11,
        RuleId::Rule12,
        RuleId::Rule13,
        RuleId::Rule14,
        RuleId::Rule15,
        RuleId::Rule16,
        RuleId::Rule17,
        RuleId::Rule18,
        RuleId::Rule19,
        RuleId::Rule20,
        RuleId::Rule21,
    ];

    /// Returns the wire id.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Rule1 => "rule_1",
            RuleId::Rule2 => "rule_2",
            RuleId::Rule3 => "rule_3",
            RuleId::Rule4 => "rule_4",
            RuleId::Rule5 => "rule_5",
            RuleId::Rule6 => "rule_6",
            RuleId::Rule7 => "rule_7",
            RuleId::Rule8 => "rule_8",
            RuleId::Rule9 => "rule_9",
            RuleId::Rule10 => "rule_10",
            RuleId::Rule11 => "rule_11",
            RuleId::Rule12 => "rule_12",
            RuleId::Rule13 => "rule_13",
            RuleId::Rule14 => "rule_14",
            RuleId::Rule15 => "rule_15",
            RuleId::Rule16 => "rule_16",
            RuleId::Rule17 => "rule_17",
            RuleId::Rule18 => "rule_18",
            RuleId::Rule19 => "rule_19",
            RuleId::Rule20 => "rule_20",
            RuleId::Rule21 => "rule_21",
        }
    }

    /// Returns the canonical human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            RuleId::Rule1 => "Cecum not reached",
            RuleId::Rule2 => "Inadequate bowel preparation",
            RuleId::Rule3 => "Serrated polyposis syndrome",
            RuleId::Rule4 => "10 or more adenomas",
            RuleId::Rule5 => "SSL >= 10mm",
            RuleId::Rule6 => "SSL with dysplasia",
            RuleId::Rule7 => "Adenoma >= 10mm",
            RuleId::Rule8 => "Tubulovillous or villous adenoma",
            RuleId::Rule9 => "Adenoma with high-grade dysplasia",
            RuleId::Rule10 => "5 or more SSL all less than 10mm, no other polyps, no high risk features",
            RuleId::Rule11 => "5-9 adenomas with no high risk features and no SSL",
            RuleId::Rule12 => "5-9 combined adenomas and SSL",
            RuleId::Rule13 => "Hyperplastic polyp >= 10mm",
            RuleId::Rule14 => "3-4 adenomas, no SSL, no high risk features",
            RuleId::Rule15 => "1-4 SSL less than 10mm, no dysplasia, no other polyps",
            RuleId::Rule16 => "Adenoma and SSL present, less than 5 total polyps, no high risk features",
            RuleId::Rule17 => "1-2 adenomas less than 10mm, no high-grade dysplasia",
            RuleId::Rule18 => "No adenomas or SSL found",
            RuleId::Rule19 => "No criteria met, needs human review",
            RuleId::Rule20 => "Patient aged out",
            RuleId::Rule21 => "Incomplete polyp resection or retrieval",
        }
    }

    /// Returns the follow-up interval (in years) this rule recommends.
    /// `0` means refer for human review; `20` means aged out.
    pub fn follow_up_years(&self) -> u8 {
        match self {
            RuleId::Rule1
            | RuleId::Rule2
            | RuleId::Rule3
            | RuleId::Rule4
            | RuleId::Rule19
            | RuleId::Rule21 => FOLLOW_UP_REVIEW,
            RuleId::Rule5
            | RuleId::Rule6
            | RuleId::Rule7
            | RuleId::Rule8
            | RuleId::Rule9
            | RuleId::Rule10
            | RuleId::Rule11
            | RuleId::Rule12
            | RuleId::Rule13 => 3,
            RuleId::Rule14 | RuleId::Rule15 | RuleId::Rule16 => 5,
            RuleId::Rule17 | RuleId::Rule18 => 10,
            RuleId::Rule20 => FOLLOW_UP_AGED_OUT,
        }
    }

    /// Returns true if this rule recommends human review instead of a
    /// surveillance interval.
    pub fn needs_review(&self) -> bool {
        self.follow_up_years() == FOLLOW_UP_REVIEW
    }

    /// Returns true for the high-risk findings (rule_5 through rule_9)
    /// that keep a patient eligible for rescoping past the default stop
    /// age.
    pub fn is_high_risk_finding(&self) -> bool {
        matches!(
            self,
            RuleId::Rule5 | RuleId::Rule6 | RuleId::Rule7 | RuleId::Rule8 | RuleId::Rule9
        )
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RuleId::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown rule id: {s}"))
    }
}

/// Final triage outcome exposed to downstream callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Recommended follow-up interval in years; `0` = needs human review,
    /// `20` = aged out.
    pub follow_up: u8,
    /// The rule that determined this outcome.
    pub rule: RuleId,
    /// Registry description for `rule`.
    pub reason: String,
}

impl Outcome {
    /// Build the outcome for a matched rule. The interval and reason come
    /// from the registry, so they can never drift from the rule id.
    pub fn from_rule(rule: RuleId) -> Self {
        Outcome {
            follow_up: rule.follow_up_years(),
            rule,
            reason: rule.description().to_string(),
        }
    }

    /// Returns true if this outcome refers the record for human review.
    pub fn needs_review(&self) -> bool {
        self.follow_up == FOLLOW_UP_REVIEW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_complete_and_unique() {
        assert_eq!(RuleId::ALL.len(), 21);
        let mut seen = std::collections::BTreeSet::new();
        for rule in RuleId::ALL {
            assert!(seen.insert(rule.as_str()), "duplicate id {rule}");
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn follow_up_values_stay_in_the_finite_set() {
        for rule in RuleId::ALL {
            assert!(
                matches!(rule.follow_up_years(), 0 | 3 | 5 | 10 | 20),
                "{rule} has interval outside the allowed set"
            );
        }
    }

    #[test]
    fn rule_id_round_trips_through_wire_form() {
        for rule in RuleId::ALL {
            assert_eq!(rule.as_str().parse::<RuleId>().unwrap(), rule);
        }
        assert!("rule_22".parse::<RuleId>().is_err());
    }

    #[test]
    fn outcome_from_rule_matches_registry() {
        let outcome = Outcome::from_rule(RuleId::Rule7);
        assert_eq!(outcome.follow_up, 3);
        assert_eq!(outcome.reason, "Adenoma >= 10mm");
        assert!(!outcome.needs_review());
        assert!(Outcome::from_rule(RuleId::Rule19).needs_review());
    }
}
