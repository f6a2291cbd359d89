// Application state shared across all modules

use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::services::{GoogleService, OpenAIService};

/// Application state containing configuration and services.
///
/// The state is immutable after startup, so it is shared as a plain
/// `Arc<AppState>` via `Extension`. Per-user state lives in the session,
/// never here.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub google_service: Arc<GoogleService>,
    pub openai_service: Arc<OpenAIService>,
}
