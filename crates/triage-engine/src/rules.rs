//! Ordered surveillance rule table.
//!
//! The guideline is encoded as a fixed-priority list of (predicate, rule)
//! rows evaluated top to bottom; the first predicate that holds determines
//! the outcome and nothing later is consulted. Each row is independently
//! testable and reordering is an explicit, reviewable change.

use triage_model::{Outcome, RuleId};

use crate::summary::PolypSummary;

/// Exam-level facts the rule table is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ExamFacts {
    pub cecum_reached: bool,
    pub prep_adequate: bool,
    pub serrated_polyposis: bool,
    /// Total polyps seen during the exam, which may exceed the number of
    /// retrieved observations behind `summary`.
    pub total_polyps: u32,
    pub summary: PolypSummary,
}

struct RuleRow {
    id: RuleId,
    applies: fn(&ExamFacts) -> bool,
}

const SIZE_THRESHOLD_MM: u32 = 10;

/// Guideline decision table in priority order.
///
/// The first five rows are unconditional review short-circuits; the final
/// row is the catch-all referral, which makes evaluation total.
const RULE_TABLE: &[RuleRow] = &[
    RuleRow {
        id: RuleId::Rule1,
        applies: |f| !f.cecum_reached,
    },
    RuleRow {
        id: RuleId::Rule2,
        applies: |f| !f.prep_adequate,
    },
    RuleRow {
        id: RuleId::Rule3,
        applies: |f| f.serrated_polyposis,
    },
    RuleRow {
        id: RuleId::Rule4,
        applies: |f| f.summary.adenoma_count >= 10,
    },
    RuleRow {
        id: RuleId::Rule21,
        applies: |f| f.summary.has_incomplete_resection_or_retrieval,
    },
    RuleRow {
        id: RuleId::Rule5,
        applies: |f| f.summary.max_ssl_size >= SIZE_THRESHOLD_MM,
    },
    RuleRow {
        id: RuleId::Rule6,
        applies: |f| f.summary.has_dysplastic_ssl,
    },
    RuleRow {
        id: RuleId::Rule7,
        applies: |f| f.summary.max_adenoma_size >= SIZE_THRESHOLD_MM,
    },
    RuleRow {
        id: RuleId::Rule8,
        applies: |f| f.summary.has_tva,
    },
    RuleRow {
        id: RuleId::Rule9,
        applies: |f| f.summary.has_high_grade_dysplasia_adenoma,
    },
    RuleRow {
        id: RuleId::Rule10,
        applies: |f| {
            f.summary.adenoma_count == 0
                && f.summary.ssl_count >= 5
                && f.summary.max_ssl_size < SIZE_THRESHOLD_MM
        },
    },
    RuleRow {
        id: RuleId::Rule11,
        applies: |f| {
            f.summary.ssl_count == 0
                && (5..=9).contains(&f.summary.adenoma_count)
                && f.summary.max_adenoma_size < SIZE_THRESHOLD_MM
                && !f.summary.has_high_grade_dysplasia_adenoma
        },
    },
    RuleRow {
        id: RuleId::Rule12,
        applies: |f| {
            f.summary.ssl_count > 0
                && f.summary.adenoma_count > 0
                && (5..=9).contains(&f.total_polyps)
        },
    },
    RuleRow {
        id: RuleId::Rule13,
        applies: |f| f.summary.max_hyperplastic_size >= SIZE_THRESHOLD_MM,
    },
    RuleRow {
        id: RuleId::Rule14,
        applies: |f| {
            f.summary.ssl_count == 0
                && (3..=4).contains(&f.summary.adenoma_count)
                && f.summary.max_adenoma_size < SIZE_THRESHOLD_MM
                && !f.summary.has_high_grade_dysplasia_adenoma
        },
    },
    RuleRow {
        id: RuleId::Rule15,
        applies: |f| {
            (1..=4).contains(&f.summary.ssl_count)
                && f.summary.max_ssl_size < SIZE_THRESHOLD_MM
                && f.summary.adenoma_count == 0
        },
    },
    RuleRow {
        id: RuleId::Rule16,
        applies: |f| {
            f.summary.ssl_count > 0
                && f.total_polyps <= 4
                && f.summary.max_ssl_size < SIZE_THRESHOLD_MM
                && f.summary.max_adenoma_size < SIZE_THRESHOLD_MM
        },
    },
    RuleRow {
        id: RuleId::Rule17,
        applies: |f| {
            f.summary.ssl_count == 0
                && f.summary.adenoma_count > 0
                && f.summary.adenoma_count < 3
                && f.summary.max_adenoma_size < SIZE_THRESHOLD_MM
                && !f.summary.has_high_grade_dysplasia_adenoma
        },
    },
    RuleRow {
        id: RuleId::Rule18,
        applies: |f| f.summary.ssl_count == 0 && f.summary.adenoma_count == 0,
    },
    // Catch-all referral: anything the table above could not classify
    // goes to a human.
    RuleRow {
        id: RuleId::Rule19,
        applies: |_| true,
    },
];

/// Evaluate the rule table against the exam facts, first match wins.
///
/// Total over all inputs: the final catch-all row guarantees a match.
pub fn evaluate(facts: &ExamFacts) -> Outcome {
    for row in RULE_TABLE {
        if (row.applies)(facts) {
            tracing::debug!(rule = %row.id, "rule matched");
            return Outcome::from_rule(row.id);
        }
    }
    // The catch-all row always applies.
    unreachable!("rule table has a catch-all row")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_facts() -> ExamFacts {
        ExamFacts {
            cecum_reached: true,
            prep_adequate: true,
            serrated_polyposis: false,
            total_polyps: 0,
            summary: PolypSummary::default(),
        }
    }

    #[test]
    fn table_ends_with_catch_all() {
        let last = RULE_TABLE.last().expect("non-empty table");
        assert_eq!(last.id, RuleId::Rule19);
        assert!((last.applies)(&clean_facts()));
    }

    #[test]
    fn review_short_circuits_precede_clinical_rows() {
        let review_prefix: Vec<RuleId> = RULE_TABLE.iter().take(5).map(|row| row.id).collect();
        assert_eq!(
            review_prefix,
            vec![
                RuleId::Rule1,
                RuleId::Rule2,
                RuleId::Rule3,
                RuleId::Rule4,
                RuleId::Rule21
            ]
        );
        for row in RULE_TABLE.iter().take(5) {
            assert!(row.id.needs_review());
        }
    }

    #[test]
    fn incomplete_resection_outranks_large_ssl() {
        let mut facts = clean_facts();
        facts.summary.has_incomplete_resection_or_retrieval = true;
        facts.summary.max_ssl_size = 15;
        facts.summary.ssl_count = 1;
        facts.total_polyps = 1;
        assert_eq!(evaluate(&facts).rule, RuleId::Rule21);
    }

    #[test]
    fn five_small_ssl_without_adenomas_hits_rule_10() {
        let mut facts = clean_facts();
        facts.summary.ssl_count = 5;
        facts.summary.max_ssl_size = 6;
        facts.total_polyps = 5;
        assert_eq!(evaluate(&facts).rule, RuleId::Rule10);
    }

    #[test]
    fn mixed_five_to_nine_polyps_hits_rule_12() {
        let mut facts = clean_facts();
        facts.summary.ssl_count = 2;
        facts.summary.max_ssl_size = 5;
        facts.summary.adenoma_count = 4;
        facts.summary.max_adenoma_size = 6;
        facts.total_polyps = 6;
        assert_eq!(evaluate(&facts).rule, RuleId::Rule12);
    }

    #[test]
    fn large_hyperplastic_polyp_hits_rule_13() {
        let mut facts = clean_facts();
        facts.summary.hyperplastic_count = 1;
        facts.summary.max_hyperplastic_size = 11;
        facts.total_polyps = 1;
        assert_eq!(evaluate(&facts).rule, RuleId::Rule13);
    }

    #[test]
    fn small_mixed_findings_hit_rule_16() {
        let mut facts = clean_facts();
        facts.summary.ssl_count = 1;
        facts.summary.max_ssl_size = 4;
        facts.summary.adenoma_count = 1;
        facts.summary.max_adenoma_size = 5;
        facts.total_polyps = 2;
        assert_eq!(evaluate(&facts).rule, RuleId::Rule16);
    }

    #[test]
    fn two_small_adenomas_hit_rule_17() {
        let mut facts = clean_facts();
        facts.summary.adenoma_count = 2;
        facts.summary.max_adenoma_size = 8;
        facts.total_polyps = 2;
        let outcome = evaluate(&facts);
        assert_eq!(outcome.rule, RuleId::Rule17);
        assert_eq!(outcome.follow_up, 10);
    }
}
