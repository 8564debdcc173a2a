pub mod enums;
pub mod error;
pub mod outcome;
pub mod record;

pub use enums::{CompletionStatus, DysplasiaGrade, Indication, PolypType};
pub use error::{Result, TriageError};
pub use outcome::{FOLLOW_UP_AGED_OUT, FOLLOW_UP_REVIEW, Outcome, RuleId};
pub use record::{
    BowelPrepScore, ColonoscopyExam, MAX_PATIENT_AGE, PatientRecord, PolypObservation,
    RawBowelPrepScore, RawExam, RawPatientRecord, RawPolyp,
};
