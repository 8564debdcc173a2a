//! Polyp summary aggregation.

use triage_model::{DysplasiaGrade, PolypObservation, PolypType};

/// Summary statistics over the polyp observations of one exam.
///
/// Derived by a single fold over the observation list; commutative, so the
/// order the extraction collaborator lists polyps in never matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolypSummary {
    pub adenoma_count: u32,
    pub ssl_count: u32,
    pub hyperplastic_count: u32,
    pub tva_count: u32,
    /// Largest adenoma in millimetres; 0 when none were observed.
    pub max_adenoma_size: u32,
    pub max_ssl_size: u32,
    pub max_hyperplastic_size: u32,
    pub max_tva_size: u32,
    pub has_high_grade_dysplasia_adenoma: bool,
    /// SSL with low- or high-grade dysplasia.
    pub has_dysplastic_ssl: bool,
    pub has_tva: bool,
    /// Any observation, of any type, with incomplete resection or
    /// incomplete retrieval.
    pub has_incomplete_resection_or_retrieval: bool,
}

/// Reduce the observation list to a [`PolypSummary`].
///
/// Empty input yields the all-zero, all-false summary.
pub fn summarize(polyps: &[PolypObservation]) -> PolypSummary {
    polyps.iter().fold(PolypSummary::default(), |mut acc, obs| {
        match obs.polyp_type {
            PolypType::Adenoma => {
                acc.adenoma_count += 1;
                acc.max_adenoma_size = acc.max_adenoma_size.max(obs.size_mm);
                if obs.dysplasia == DysplasiaGrade::HighGrade {
                    acc.has_high_grade_dysplasia_adenoma = true;
                }
            }
            PolypType::SessileSerratedLesion => {
                acc.ssl_count += 1;
                acc.max_ssl_size = acc.max_ssl_size.max(obs.size_mm);
                if obs.dysplasia.is_dysplastic() {
                    acc.has_dysplastic_ssl = true;
                }
            }
            PolypType::HyperplasticPolyp => {
                acc.hyperplastic_count += 1;
                acc.max_hyperplastic_size = acc.max_hyperplastic_size.max(obs.size_mm);
            }
            PolypType::TubulovillousOrVillousAdenoma => {
                acc.tva_count += 1;
                acc.max_tva_size = acc.max_tva_size.max(obs.size_mm);
                acc.has_tva = true;
            }
        }
        if obs.resection.is_incomplete() || obs.retrieval.is_incomplete() {
            acc.has_incomplete_resection_or_retrieval = true;
        }
        acc
    })
}
