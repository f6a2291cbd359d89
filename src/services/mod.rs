// src/services/mod.rs
//
// External collaborators: the identity provider and the text-generation API.

pub mod google;
pub mod openai;

// Re-export commonly used types for convenience
pub use google::GoogleService;
pub use openai::OpenAIService;
