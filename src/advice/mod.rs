//! # Advice Module
//!
//! Bounded free-text health queries: category-to-template mapping,
//! validation, and the chat page that calls the text-generation service.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::advice_routes;
