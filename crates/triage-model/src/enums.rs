//! Type-safe enumerations for colonoscopy findings.
//!
//! These enums give compile-time safety to concepts the extraction
//! collaborator delivers as strings. Parsing is lenient about separators
//! and casing but never guesses: a value that matches no known code is an
//! error, not a skip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Histological polyp type.
///
/// The surveillance guideline treats each type under its own size and
/// dysplasia thresholds, so the type must be known for every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolypType {
    /// Conventional adenoma.
    Adenoma,
    /// Sessile serrated lesion (SSL), also reported as sessile serrated
    /// polyp in older reports.
    SessileSerratedLesion,
    /// Hyperplastic polyp.
    HyperplasticPolyp,
    /// Tubulovillous or villous adenoma (TVA), high risk regardless of size.
    TubulovillousOrVillousAdenoma,
}

impl PolypType {
    /// Returns the canonical wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolypType::Adenoma => "adenoma",
            PolypType::SessileSerratedLesion => "sessile-serrated-lesion",
            PolypType::HyperplasticPolyp => "hyperplastic-polyp",
            PolypType::TubulovillousOrVillousAdenoma => "tubulovillous-or-villous-adenoma",
        }
    }
}

impl fmt::Display for PolypType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolypType {
    type Err = String;

    /// Parse a polyp type code. Handles separator and casing variants
    /// found in extraction output plus common report abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ADENOMA" | "ADENOMATOUS POLYP" | "TUBULAR ADENOMA" => Ok(PolypType::Adenoma),
            "SESSILE SERRATED LESION" | "SESSILE SERRATED POLYP" | "SSL" | "SSP" => {
                Ok(PolypType::SessileSerratedLesion)
            }
            "HYPERPLASTIC POLYP" | "HYPERPLASTIC" => Ok(PolypType::HyperplasticPolyp),
            "TUBULOVILLOUS OR VILLOUS ADENOMA"
            | "TUBULOVILLOUS ADENOMA"
            | "VILLOUS ADENOMA"
            | "TVA" => Ok(PolypType::TubulovillousOrVillousAdenoma),
            _ => Err(format!("Unknown polyp type: {s}")),
        }
    }
}

/// Dysplasia grade reported for a polyp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DysplasiaGrade {
    /// No dysplasia reported.
    None,
    /// Low-grade dysplasia.
    LowGrade,
    /// High-grade dysplasia (HGD).
    HighGrade,
}

impl DysplasiaGrade {
    /// Returns the canonical wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DysplasiaGrade::None => "none",
            DysplasiaGrade::LowGrade => "low-grade",
            DysplasiaGrade::HighGrade => "high-grade",
        }
    }

    /// Returns true for any reported dysplasia (low or high grade).
    pub fn is_dysplastic(&self) -> bool {
        matches!(self, DysplasiaGrade::LowGrade | DysplasiaGrade::HighGrade)
    }
}

impl fmt::Display for DysplasiaGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DysplasiaGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "NONE" | "NO" | "NO DYSPLASIA" | "ABSENT" => Ok(DysplasiaGrade::None),
            "LOW GRADE" | "LOW GRADE DYSPLASIA" | "LGD" | "LOW" => Ok(DysplasiaGrade::LowGrade),
            "HIGH GRADE" | "HIGH GRADE DYSPLASIA" | "HGD" | "HIGH" => {
                Ok(DysplasiaGrade::HighGrade)
            }
            _ => Err(format!("Unknown dysplasia grade: {s}")),
        }
    }
}

/// Whether a polyp was resected or retrieved as one complete specimen.
///
/// Used for both the resection and the retrieval field; anything other
/// than a complete specimen raises residual-risk concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Complete,
    Incomplete,
}

impl CompletionStatus {
    /// Returns the canonical wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Complete => "complete",
            CompletionStatus::Incomplete => "incomplete",
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, CompletionStatus::Incomplete)
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompletionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "COMPLETE" | "EN BLOC" | "YES" => Ok(CompletionStatus::Complete),
            "INCOMPLETE" | "PIECEMEAL" | "PARTIAL" | "NO" => Ok(CompletionStatus::Incomplete),
            _ => Err(format!("Unknown completion status: {s}")),
        }
    }
}

/// Exam indication code.
///
/// Only serrated polyposis syndrome changes triage; other codes are kept
/// verbatim for traceability rather than rejected, since the indication
/// field is optional and open-ended on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indication {
    /// Field absent or empty.
    Unspecified,
    /// Routine screening exam.
    NormalScreening,
    /// Serrated polyposis syndrome (SPS); always referred for review.
    SerratedPolyposisSyndrome,
    /// Any other indication code, preserved as received.
    Other(String),
}

impl Indication {
    /// Parse an optional indication code. Total: unknown codes become
    /// `Other`, never an error.
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Indication::Unspecified;
        }
        match normalize(trimmed).as_str() {
            "NORMAL SCREENING" | "SCREENING" => Indication::NormalScreening,
            "SERRATED POLYPOSIS SYNDROME" | "SPS" => Indication::SerratedPolyposisSyndrome,
            _ => Indication::Other(trimmed.to_string()),
        }
    }

    pub fn is_serrated_polyposis(&self) -> bool {
        matches!(self, Indication::SerratedPolyposisSyndrome)
    }
}

impl fmt::Display for Indication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indication::Unspecified => write!(f, ""),
            Indication::NormalScreening => write!(f, "normal-screening"),
            Indication::SerratedPolyposisSyndrome => write!(f, "serrated-polyposis-syndrome"),
            Indication::Other(code) => write!(f, "{code}"),
        }
    }
}

/// Normalize a wire code: trim, uppercase, and collapse separators so
/// `sessile-serrated-lesion`, `sessile_serrated_lesion`, and
/// `Sessile Serrated Lesion` all compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|ch| match ch {
            '-' | '_' => ' ',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyp_type_from_str_variants() {
        assert_eq!(
            "sessile-serrated-lesion".parse::<PolypType>().unwrap(),
            PolypType::SessileSerratedLesion
        );
        assert_eq!(
            "Sessile_Serrated_Polyp".parse::<PolypType>().unwrap(),
            PolypType::SessileSerratedLesion
        );
        assert_eq!(
            "tubulovillous-or-villous-adenoma"
                .parse::<PolypType>()
                .unwrap(),
            PolypType::TubulovillousOrVillousAdenoma
        );
        assert!("lipoma".parse::<PolypType>().is_err());
    }

    #[test]
    fn dysplasia_grade_from_str() {
        assert_eq!(
            "low-grade".parse::<DysplasiaGrade>().unwrap(),
            DysplasiaGrade::LowGrade
        );
        assert_eq!(
            "HGD".parse::<DysplasiaGrade>().unwrap(),
            DysplasiaGrade::HighGrade
        );
        assert!(!DysplasiaGrade::None.is_dysplastic());
        assert!(DysplasiaGrade::LowGrade.is_dysplastic());
    }

    #[test]
    fn completion_status_from_str() {
        assert_eq!(
            "piecemeal".parse::<CompletionStatus>().unwrap(),
            CompletionStatus::Incomplete
        );
        assert_eq!(
            "complete".parse::<CompletionStatus>().unwrap(),
            CompletionStatus::Complete
        );
    }

    #[test]
    fn indication_parse_is_total() {
        assert_eq!(Indication::parse(""), Indication::Unspecified);
        assert_eq!(
            Indication::parse("sps"),
            Indication::SerratedPolyposisSyndrome
        );
        assert!(Indication::parse("serrated-polyposis-syndrome").is_serrated_polyposis());
        assert_eq!(
            Indication::parse("diagnostic"),
            Indication::Other("diagnostic".to_string())
        );
    }
}
