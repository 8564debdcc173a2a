//! Patient record: wire contract and validated domain types.
//!
//! The extraction collaborator delivers loosely-typed JSON (the `Raw*`
//! structs). [`PatientRecord::from_raw`] is the single validation
//! boundary: every required field is checked for presence and range, and
//! each failure names the exact field path. Past this boundary the typed
//! record is immutable and the engine never sees a partial value.

use serde::{Deserialize, Serialize};

use crate::enums::{CompletionStatus, DysplasiaGrade, Indication, PolypType};
use crate::error::{Result, TriageError};

/// Largest patient age accepted by validation. Anything above this is an
/// extraction artifact, not a plausible age.
pub const MAX_PATIENT_AGE: u32 = 130;

/// Extracted record as received from the upstream collaborator.
///
/// `colonoscopy` is an array on the wire; the first entry is the exam
/// under triage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPatientRecord {
    pub patient_age: Option<i64>,
    #[serde(default)]
    pub indication: Option<String>,
    #[serde(default)]
    pub colonoscopy: Vec<RawExam>,
}

/// One exam entry on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExam {
    pub cecum_reached: Option<bool>,
    #[serde(rename = "bostonBowelPrepScore")]
    pub boston_bowel_prep_score: Option<RawBowelPrepScore>,
    pub number_of_polyps: Option<i64>,
    #[serde(default)]
    pub polyps: Option<Vec<RawPolyp>>,
}

/// Boston Bowel Preparation Score sub-scores on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBowelPrepScore {
    pub total: Option<i64>,
    pub right: Option<i64>,
    pub transverse: Option<i64>,
    pub left: Option<i64>,
}

/// One polyp observation on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPolyp {
    #[serde(rename = "type")]
    pub polyp_type: Option<String>,
    pub size: Option<i64>,
    pub dysplasia: Option<String>,
    pub resection: Option<String>,
    pub retrieval: Option<String>,
}

/// Validated patient record, the engine's sole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    /// Patient age in whole years.
    pub age: u32,
    pub indication: Indication,
    pub exam: ColonoscopyExam,
}

/// Validated colonoscopy exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColonoscopyExam {
    pub cecum_reached: bool,
    pub prep_score: BowelPrepScore,
    /// Total polyps seen during the exam; may exceed the number of
    /// retrieved observations in `polyps`.
    pub total_polyp_count: u32,
    pub polyps: Vec<PolypObservation>,
}

/// Validated Boston Bowel Preparation Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BowelPrepScore {
    pub total: u8,
    pub right: u8,
    pub transverse: u8,
    pub left: u8,
}

/// Validated per-polyp observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolypObservation {
    pub polyp_type: PolypType,
    pub size_mm: u32,
    pub dysplasia: DysplasiaGrade,
    pub resection: CompletionStatus,
    pub retrieval: CompletionStatus,
}

impl PatientRecord {
    /// Validate an extracted record into a typed one.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::MissingField`] for absent or null required
    /// fields, [`TriageError::InvalidValue`] for out-of-range numbers, and
    /// [`TriageError::UnknownPolypType`] for an unrecognized polyp type.
    pub fn from_raw(raw: RawPatientRecord) -> Result<Self> {
        let age = require_u32(raw.patient_age, "patient_age")?;
        if age > MAX_PATIENT_AGE {
            return Err(TriageError::invalid("patient_age", age));
        }
        let indication = Indication::parse(raw.indication.as_deref().unwrap_or(""));
        let exam_raw = raw
            .colonoscopy
            .into_iter()
            .next()
            .ok_or_else(|| TriageError::missing("colonoscopy[0]"))?;
        let exam = ColonoscopyExam::from_raw(exam_raw, "colonoscopy[0]")?;
        Ok(PatientRecord {
            age,
            indication,
            exam,
        })
    }
}

impl ColonoscopyExam {
    fn from_raw(raw: RawExam, path: &str) -> Result<Self> {
        let cecum_reached = raw
            .cecum_reached
            .ok_or_else(|| TriageError::missing(format!("{path}.cecum_reached")))?;
        let prep_raw = raw
            .boston_bowel_prep_score
            .ok_or_else(|| TriageError::missing(format!("{path}.bostonBowelPrepScore")))?;
        let prep_score =
            BowelPrepScore::from_raw(&prep_raw, &format!("{path}.bostonBowelPrepScore"))?;
        let total_polyp_count =
            require_u32(raw.number_of_polyps, &format!("{path}.number_of_polyps"))?;
        let mut polyps = Vec::new();
        for (index, polyp) in raw.polyps.unwrap_or_default().into_iter().enumerate() {
            polyps.push(PolypObservation::from_raw(
                polyp,
                &format!("{path}.polyps[{index}]"),
            )?);
        }
        Ok(ColonoscopyExam {
            cecum_reached,
            prep_score,
            total_polyp_count,
            polyps,
        })
    }
}

impl BowelPrepScore {
    fn from_raw(raw: &RawBowelPrepScore, path: &str) -> Result<Self> {
        Ok(BowelPrepScore {
            total: require_u8(raw.total, &format!("{path}.total"))?,
            right: require_u8(raw.right, &format!("{path}.right"))?,
            transverse: require_u8(raw.transverse, &format!("{path}.transverse"))?,
            left: require_u8(raw.left, &format!("{path}.left"))?,
        })
    }
}

impl PolypObservation {
    fn from_raw(raw: RawPolyp, path: &str) -> Result<Self> {
        let type_path = format!("{path}.type");
        let type_code = raw
            .polyp_type
            .ok_or_else(|| TriageError::missing(&type_path))?;
        let polyp_type =
            type_code
                .parse::<PolypType>()
                .map_err(|_| TriageError::UnknownPolypType {
                    path: type_path,
                    value: type_code,
                })?;
        let size_mm = require_u32(raw.size, &format!("{path}.size"))?;
        let dysplasia = parse_field::<DysplasiaGrade>(raw.dysplasia, &format!("{path}.dysplasia"))?;
        let resection =
            parse_field::<CompletionStatus>(raw.resection, &format!("{path}.resection"))?;
        let retrieval =
            parse_field::<CompletionStatus>(raw.retrieval, &format!("{path}.retrieval"))?;
        Ok(PolypObservation {
            polyp_type,
            size_mm,
            dysplasia,
            resection,
            retrieval,
        })
    }
}

fn require_u32(value: Option<i64>, path: &str) -> Result<u32> {
    let value = value.ok_or_else(|| TriageError::missing(path))?;
    u32::try_from(value).map_err(|_| TriageError::invalid(path, value))
}

fn require_u8(value: Option<i64>, path: &str) -> Result<u8> {
    let value = value.ok_or_else(|| TriageError::missing(path))?;
    u8::try_from(value).map_err(|_| TriageError::invalid(path, value))
}

fn parse_field<T>(value: Option<String>, path: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    let code = value.ok_or_else(|| TriageError::missing(path))?;
    code.parse::<T>()
        .map_err(|_| TriageError::invalid(path, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_age_names_the_field() {
        let raw = RawPatientRecord {
            patient_age: None,
            ..RawPatientRecord::default()
        };
        let err = PatientRecord::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            TriageError::MissingField {
                path: "patient_age".to_string()
            }
        );
    }

    #[test]
    fn implausible_age_is_invalid_with_path() {
        let raw = RawPatientRecord {
            patient_age: Some(4_000_000_000),
            ..RawPatientRecord::default()
        };
        let err = PatientRecord::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            TriageError::InvalidValue {
                path: "patient_age".to_string(),
                value: "4000000000".to_string()
            }
        );
    }

    #[test]
    fn negative_size_is_invalid_with_path() {
        let raw: RawPatientRecord = serde_json::from_str(
            r#"{
                "patient_age": 60,
                "colonoscopy": [{
                    "cecum_reached": true,
                    "bostonBowelPrepScore": {"total": 8, "right": 3, "transverse": 3, "left": 2},
                    "number_of_polyps": 1,
                    "polyps": [{
                        "type": "adenoma",
                        "size": -4,
                        "dysplasia": "none",
                        "resection": "complete",
                        "retrieval": "complete"
                    }]
                }]
            }"#,
        )
        .unwrap();
        let err = PatientRecord::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            TriageError::InvalidValue {
                path: "colonoscopy[0].polyps[0].size".to_string(),
                value: "-4".to_string()
            }
        );
    }

    #[test]
    fn unknown_polyp_type_is_not_skipped() {
        let raw: RawPatientRecord = serde_json::from_str(
            r#"{
                "patient_age": 60,
                "colonoscopy": [{
                    "cecum_reached": true,
                    "bostonBowelPrepScore": {"total": 8, "right": 3, "transverse": 3, "left": 2},
                    "number_of_polyps": 1,
                    "polyps": [{
                        "type": "lipoma",
                        "size": 5,
                        "dysplasia": "none",
                        "resection": "complete",
                        "retrieval": "complete"
                    }]
                }]
            }"#,
        )
        .unwrap();
        let err = PatientRecord::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            TriageError::UnknownPolypType {
                path: "colonoscopy[0].polyps[0].type".to_string(),
                value: "lipoma".to_string()
            }
        );
    }

    #[test]
    fn absent_polyp_array_validates_to_empty() {
        let raw: RawPatientRecord = serde_json::from_str(
            r#"{
                "patient_age": 65,
                "indication": "",
                "colonoscopy": [{
                    "cecum_reached": true,
                    "bostonBowelPrepScore": {"total": 8, "right": 3, "transverse": 3, "left": 2},
                    "number_of_polyps": 0
                }]
            }"#,
        )
        .unwrap();
        let record = PatientRecord::from_raw(raw).unwrap();
        assert!(record.exam.polyps.is_empty());
        assert_eq!(record.indication, Indication::Unspecified);
        assert_eq!(record.age, 65);
    }
}
