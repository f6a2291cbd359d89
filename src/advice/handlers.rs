//! Advice query handlers
//!
//! Authentication is enforced before any advice query: unauthenticated
//! requests are redirected to the login page.

use axum::{
    extract::Extension,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info};

use super::models::{AdviceCategory, AdviceForm};
use super::prompts::render_prompt;
use super::validators::{parse_form, MAX_OUTPUT_TOKENS, MIN_OUTPUT_TOKENS, MAX_QUERY_CHARS};
use crate::auth::session::current_user;
use crate::common::{escape_html, ApiError, AppState};
use crate::services::openai::OpenAIError;

/// Result panel content for a rendered chat page.
enum Outcome {
    None,
    Advice(String),
    Error(String),
}

/// GET /chat - Advice query form
pub async fn chat_page(session: Session) -> Result<Response, ApiError> {
    if current_user(&session).await.is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    let form = AdviceForm {
        category: AdviceCategory::SymptomChecker.label().to_string(),
        query: String::new(),
        max_tokens: 150,
    };
    Ok(render_chat_page(&form, &Outcome::None).into_response())
}

/// POST /chat - Validate the query, call the model, render the result
pub async fn chat_submit(
    Extension(state): Extension<Arc<AppState>>,
    session: Session,
    Form(form): Form<AdviceForm>,
) -> Result<Response, ApiError> {
    if current_user(&session).await.is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    // Validation happens before any network call.
    let query = match parse_form(&form) {
        Ok(q) => q,
        Err(e) => {
            let outcome = Outcome::Error(e.user_message());
            return Ok(render_chat_page(&form, &outcome).into_response());
        }
    };

    let prompt = render_prompt(query.category, &query.query);

    info!(
        category = query.category.label(),
        max_tokens = query.max_tokens,
        "Submitting advice query"
    );

    let outcome = match state
        .openai_service
        .generate_advice(&prompt, query.max_tokens)
        .await
    {
        Ok(advice) => Outcome::Advice(advice),
        Err(e) => {
            error!(error = %e, "Advice generation failed");
            Outcome::Error(map_openai_error(e).user_message())
        }
    };

    Ok(render_chat_page(&form, &outcome).into_response())
}

fn map_openai_error(e: OpenAIError) -> ApiError {
    match e {
        OpenAIError::NotConfigured | OpenAIError::InvalidCredentials(_) => {
            ApiError::CredentialError(e.to_string())
        }
        OpenAIError::Timeout => ApiError::Timeout(e.to_string()),
        OpenAIError::RateLimited
        | OpenAIError::RequestFailed(_)
        | OpenAIError::InvalidResponse(_) => ApiError::UpstreamError(e.to_string()),
    }
}

// ---- Page rendering ----

const PAGE_STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            max-width: 720px;
            margin: 0 auto;
            padding: 30px 20px;
            background: #f5f5f5;
        }
        h1 { text-align: center; }
        .note {
            background: #e7f3fe;
            border-left: 5px solid #2196F3;
            padding: 12px;
            border-radius: 6px;
            margin-bottom: 20px;
        }
        form { background: white; padding: 20px; border-radius: 10px; }
        label { display: block; font-weight: bold; margin: 15px 0 5px; }
        select, textarea, input[type=number] {
            width: 100%;
            font-size: 16px;
            padding: 8px;
            box-sizing: border-box;
        }
        textarea { min-height: 100px; }
        button {
            background-color: #4CAF50;
            color: white;
            font-size: 16px;
            padding: 10px 20px;
            border: none;
            border-radius: 6px;
            margin-top: 20px;
            cursor: pointer;
        }
        .response-box {
            border-left: 5px solid #4CAF50;
            background: white;
            padding: 15px;
            border-radius: 10px;
            font-size: 16px;
            line-height: 1.6;
            margin-top: 20px;
            white-space: pre-wrap;
        }
        .error-box {
            border-left: 5px solid #c00;
            background: #fee;
            color: #c00;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
        }
        .back { display: inline-block; margin-bottom: 10px; }
"#;

fn render_chat_page(form: &AdviceForm, outcome: &Outcome) -> Html<String> {
    let options: String = AdviceCategory::ALL
        .iter()
        .map(|c| {
            let selected = if c.label() == form.category {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{label}"{selected}>{label}</option>"#,
                label = c.label(),
                selected = selected,
            )
        })
        .collect();

    let panel = match outcome {
        Outcome::None => String::new(),
        Outcome::Advice(advice) => format!(
            r#"<div class="response-box">{}</div>"#,
            escape_html(advice)
        ),
        Outcome::Error(message) => format!(
            r#"<div class="error-box">⚠️ {}</div>"#,
            escape_html(message)
        ),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>🩺 Health Advice Chatbot</title>
    <style>{style}</style>
</head>
<body>
    <a class="back" href="/">← Home</a>
    <h1>🩺 Health Advice Chatbot</h1>
    <div class="note">Get preliminary health advice based on your queries.
    <strong>Note:</strong> This is not a substitute for professional medical advice.</div>
    <form method="post" action="/chat">
        <label for="category">📌 Select Query Type</label>
        <select id="category" name="category">{options}</select>
        <label for="query">✍️ Enter your query here (max {max_chars} characters)</label>
        <textarea id="query" name="query" maxlength="{max_chars}">{query}</textarea>
        <label for="max_tokens">🔢 Max Response Length (Tokens, {min_tokens}-{max_tokens_bound})</label>
        <input id="max_tokens" name="max_tokens" type="number"
               min="{min_tokens}" max="{max_tokens_bound}" value="{max_tokens}">
        <button type="submit">🚀 Get Advice</button>
    </form>
    {panel}
</body>
</html>
"#,
        style = PAGE_STYLE,
        options = options,
        query = escape_html(&form.query),
        max_chars = MAX_QUERY_CHARS,
        min_tokens = MIN_OUTPUT_TOKENS,
        max_tokens_bound = MAX_OUTPUT_TOKENS,
        max_tokens = form.max_tokens,
        panel = panel,
    ))
}
