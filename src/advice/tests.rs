//! Tests for advice module

use super::models::{AdviceCategory, AdviceForm};
use super::prompts::render_prompt;
use super::validators::{parse_form, AdviceValidator};
use crate::common::Validator;

fn form(category: &str, query: &str, max_tokens: u32) -> AdviceForm {
    AdviceForm {
        category: category.to_string(),
        query: query.to_string(),
        max_tokens,
    }
}

#[test]
fn test_category_parse_round_trip() {
    for category in AdviceCategory::ALL {
        assert_eq!(AdviceCategory::parse(category.label()), Some(category));
    }
    assert_eq!(AdviceCategory::parse("Unknown"), None);
    assert_eq!(AdviceCategory::parse("first aid"), None); // labels are exact
}

#[test]
fn test_first_aid_prompt_contains_template_and_text() {
    let prompt = render_prompt(AdviceCategory::FirstAid, "burned hand");
    assert!(prompt.contains("first aid tips for"));
    assert!(prompt.contains("burned hand"));
}

#[test]
fn test_symptom_checker_prompt() {
    let prompt = render_prompt(AdviceCategory::SymptomChecker, "headache and fever");
    assert!(prompt.contains("described the following symptoms"));
    assert!(prompt.contains("headache and fever"));
    assert!(prompt.contains("potential conditions"));
}

#[test]
fn test_user_text_is_interpolated_verbatim() {
    let text = "chest pain & <dizziness>";
    let prompt = render_prompt(AdviceCategory::GeneralHealthAdvice, text);
    assert!(prompt.contains(text));
}

#[test]
fn test_unknown_category_fails_validation() {
    let result = AdviceValidator.validate(&form("Unknown", "x", 100));
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "category"));
}

#[test]
fn test_empty_query_fails_validation() {
    let result = AdviceValidator.validate(&form("First Aid", "   ", 100));
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "query"));
}

#[test]
fn test_query_length_bound() {
    let at_limit = "x".repeat(300);
    assert!(AdviceValidator.validate(&form("First Aid", &at_limit, 100)).is_valid);

    let over_limit = "x".repeat(301);
    let result = AdviceValidator.validate(&form("First Aid", &over_limit, 100));
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "query"));
}

#[test]
fn test_token_bounds() {
    assert!(AdviceValidator.validate(&form("First Aid", "burned hand", 50)).is_valid);
    assert!(AdviceValidator.validate(&form("First Aid", "burned hand", 300)).is_valid);

    for out_of_range in [49, 301, 500] {
        let result = AdviceValidator.validate(&form("First Aid", "burned hand", out_of_range));
        assert!(!result.is_valid, "{} should be rejected", out_of_range);
        assert!(result.errors.iter().any(|e| e.field == "max_tokens"));
    }
}

#[test]
fn test_parse_form_produces_typed_query() {
    let query = parse_form(&form("Medical Terms", "  tachycardia  ", 150)).unwrap();
    assert_eq!(query.category, AdviceCategory::MedicalTerms);
    assert_eq!(query.query, "tachycardia");
    assert_eq!(query.max_tokens, 150);
}

#[test]
fn test_parse_form_rejects_out_of_range_tokens() {
    let err = parse_form(&form("First Aid", "burned hand", 500)).unwrap_err();
    assert!(matches!(err, crate::common::ApiError::ValidationError(_)));
}
