//! Prompt templates
//!
//! Each category maps to a fixed template interpolating the user's text
//! verbatim; the bounded free text is the only variable part.

use super::models::AdviceCategory;

/// Render the user message for a category. Pure; validation (non-empty,
/// length) happens before this is called.
pub fn render_prompt(category: AdviceCategory, user_text: &str) -> String {
    match category {
        AdviceCategory::SymptomChecker => format!(
            "User has described the following symptoms: {}. What could be the potential conditions?",
            user_text
        ),
        AdviceCategory::PreventiveMeasures => {
            format!("Provide preventive measures for: {}.", user_text)
        }
        AdviceCategory::GeneralHealthAdvice => {
            format!("Give general health advice on the topic: {}.", user_text)
        }
        AdviceCategory::MedicalTerms => {
            format!("Explain the following medical term: {}.", user_text)
        }
        AdviceCategory::FirstAid => format!("Provide first aid tips for: {}.", user_text),
    }
}
