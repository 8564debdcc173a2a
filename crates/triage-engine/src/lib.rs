//! Colonoscopy surveillance triage engine.
//!
//! A pure, synchronous computation from a validated [`PatientRecord`] to
//! an [`Outcome`]: aggregate the polyp observations, check preparation
//! adequacy, walk the ordered rule table, then apply the age-out pass.
//! No shared mutable state and no I/O, so it may be called concurrently
//! from any number of request workers.

pub mod age_out;
pub mod prep;
pub mod rules;
pub mod summary;

pub use rules::ExamFacts;
pub use summary::PolypSummary;

use triage_model::{Outcome, PatientRecord, RawPatientRecord, Result};

/// Triage a validated patient record.
///
/// Deterministic and stateless: identical input yields identical output.
pub fn triage(record: &PatientRecord) -> Outcome {
    let summary = summary::summarize(&record.exam.polyps);
    let facts = ExamFacts {
        cecum_reached: record.exam.cecum_reached,
        prep_adequate: prep::is_adequate(&record.exam.prep_score),
        serrated_polyposis: record.indication.is_serrated_polyposis(),
        total_polyps: record.exam.total_polyp_count,
        summary,
    };
    let outcome = rules::evaluate(&facts);
    let outcome = age_out::apply(record.age, outcome);
    tracing::info!(rule = %outcome.rule, follow_up = outcome.follow_up, "triage complete");
    outcome
}

/// Validate an extracted record and triage it.
///
/// # Errors
///
/// Returns the validation error when the record is missing a required
/// field or carries an unrecognized value; the engine is never run against
/// a partial record.
pub fn triage_raw(raw: RawPatientRecord) -> Result<Outcome> {
    let record = PatientRecord::from_raw(raw)?;
    Ok(triage(&record))
}
