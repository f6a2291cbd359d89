//! Advice query data models

use serde::Deserialize;

/// Fixed enumeration of advice categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceCategory {
    SymptomChecker,
    PreventiveMeasures,
    GeneralHealthAdvice,
    MedicalTerms,
    FirstAid,
}

impl AdviceCategory {
    pub const ALL: [AdviceCategory; 5] = [
        AdviceCategory::SymptomChecker,
        AdviceCategory::PreventiveMeasures,
        AdviceCategory::GeneralHealthAdvice,
        AdviceCategory::MedicalTerms,
        AdviceCategory::FirstAid,
    ];

    /// Display label, also the wire value in the form select.
    pub fn label(&self) -> &'static str {
        match self {
            AdviceCategory::SymptomChecker => "Symptom Checker",
            AdviceCategory::PreventiveMeasures => "Preventive Measures",
            AdviceCategory::GeneralHealthAdvice => "General Health Advice",
            AdviceCategory::MedicalTerms => "Medical Terms",
            AdviceCategory::FirstAid => "First Aid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == value)
    }
}

/// Raw submitted form; validated into an [`AdviceQuery`] before use.
#[derive(Debug, Deserialize)]
pub struct AdviceForm {
    pub category: String,
    pub query: String,
    pub max_tokens: u32,
}

/// Validated advice query; exists only for the duration of one request.
#[derive(Debug)]
pub struct AdviceQuery {
    pub category: AdviceCategory,
    pub query: String,
    pub max_tokens: u32,
}
