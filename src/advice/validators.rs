// src/advice/validators.rs

use super::models::{AdviceCategory, AdviceForm, AdviceQuery};
use crate::common::{ApiError, ValidationResult, Validator};

/// Maximum query length, matching the UI's character limit.
pub const MAX_QUERY_CHARS: usize = 300;

/// Allowed response-length bounds.
pub const MIN_OUTPUT_TOKENS: u32 = 50;
pub const MAX_OUTPUT_TOKENS: u32 = 300;

// ============================================================================
// Advice Form Validator
// ============================================================================

pub struct AdviceValidator;

impl Validator<AdviceForm> for AdviceValidator {
    fn validate(&self, data: &AdviceForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        if AdviceCategory::parse(&data.category).is_none() {
            result.add_error("category", "Unknown query type");
        }

        if data.query.trim().is_empty() {
            result.add_error("query", "Please enter a query before submitting");
        } else if data.query.chars().count() > MAX_QUERY_CHARS {
            result.add_error("query", "Query must be at most 300 characters");
        }

        if data.max_tokens < MIN_OUTPUT_TOKENS || data.max_tokens > MAX_OUTPUT_TOKENS {
            result.add_error(
                "max_tokens",
                "Response length must be between 50 and 300 tokens",
            );
        }

        result
    }
}

/// Validate a submitted form into a typed query.
///
/// All checks run here, before any network call is made.
pub fn parse_form(form: &AdviceForm) -> Result<AdviceQuery, ApiError> {
    let result = AdviceValidator.validate(form);
    if !result.is_valid {
        return Err(ApiError::from(result));
    }

    // Category parse cannot fail after validation passed.
    let category = AdviceCategory::parse(&form.category)
        .ok_or_else(|| ApiError::ValidationError("Unknown query type".to_string()))?;

    Ok(AdviceQuery {
        category,
        query: form.query.trim().to_string(),
        max_tokens: form.max_tokens,
    })
}
