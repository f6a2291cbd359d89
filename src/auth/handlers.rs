//! Authentication handlers
//!
//! The base URL doubles as the OAuth redirect target: Google sends the
//! one-time `code` back to `/`, where it is exchanged exactly once and then
//! stripped by a redirect so a page refresh cannot re-exchange it.

use axum::{
    extract::{Extension, Query},
    response::{Html, IntoResponse, Json, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info, warn};

use super::models::CallbackParams;
use super::session::{current_user, end_session, start_session};
use crate::common::{escape_html, ApiError, AppState};
use crate::services::google::GoogleError;

use super::extractors::AuthedUser;

/// GET / - Login page, welcome page, and OAuth redirect callback
///
/// Three cases:
/// - `error` query parameter: provider denied authorization, render the
///   login page with an inline message.
/// - `code` query parameter: exchange it (unless the session is already
///   authenticated) and redirect to bare `/`.
/// - otherwise: welcome page when authenticated, login page when not.
pub async fn home(
    Extension(state): Extension<Arc<AppState>>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, ApiError> {
    if let Some(provider_error) = params.error {
        warn!(oauth_error = %provider_error, "Provider returned authorization error");
        let page = render_login_page(
            &state.google_service.authorization_url(),
            Some(&format!("Authorization failed: {}", provider_error)),
        );
        return Ok(page.into_response());
    }

    if let Some(code) = params.code {
        // Only exchange once per session: the code is single-use and a
        // refresh must not trigger a second, doomed exchange.
        if current_user(&session).await.is_some() {
            return Ok(Redirect::to("/").into_response());
        }

        info!("Received OAuth callback with authorization code");

        return match state.google_service.exchange_code_for_identity(&code).await {
            Ok(claims) => {
                start_session(&session, claims).await?;
                // Clear the consumed code from the URL
                Ok(Redirect::to("/").into_response())
            }
            Err(e) => {
                error!(error = %e, "Authorization code exchange failed");
                let message = match e {
                    GoogleError::Timeout => {
                        "The login request timed out. Please try again.".to_string()
                    }
                    _ => "Login failed. Please try again.".to_string(),
                };
                let page = render_login_page(
                    &state.google_service.authorization_url(),
                    Some(&message),
                );
                Ok(page.into_response())
            }
        };
    }

    match current_user(&session).await {
        Some(user) => Ok(render_welcome_page(&user.name, &user.email, &user.picture)
            .into_response()),
        None => Ok(render_login_page(&state.google_service.authorization_url(), None)
            .into_response()),
    }
}

/// GET /auth/login - Start the OAuth flow by redirecting to the provider
pub async fn login_start(Extension(state): Extension<Arc<AppState>>) -> Redirect {
    let auth_url = state.google_service.authorization_url();
    info!("Starting Google OAuth flow");
    Redirect::to(&auth_url)
}

/// POST /logout - Clear the session and return to the login page
pub async fn logout(session: Session) -> Result<Redirect, ApiError> {
    end_session(&session).await?;
    Ok(Redirect::to("/"))
}

/// GET /api/me - Current session identity as JSON
pub async fn me(authed: AuthedUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "authenticated": true,
        "user": {
            "email": authed.email,
            "name": authed.name,
            "picture": authed.picture,
        },
    }))
}

// ---- Page rendering ----

const PAGE_STYLE: &str = r#"
        body {
            background: linear-gradient(135deg, #FF8A00, #E52E71);
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 40px 20px;
        }
        .title { text-align: center; font-size: 2.5em; font-weight: bold; color: white; }
        .subtitle { text-align: center; font-size: 1.5em; color: white; }
        .container {
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            margin-top: 20px;
        }
        .button {
            display: inline-flex;
            align-items: center;
            gap: 10px;
            background: #4285F4;
            color: white;
            font-size: 18px;
            padding: 12px 25px;
            border: none;
            border-radius: 30px;
            text-decoration: none;
            cursor: pointer;
            box-shadow: 0px 5px 10px rgba(0,0,0,0.2);
        }
        .button:hover { background: #2C6FDB; }
        .signup-btn { background: #34A853; margin-top: 10px; }
        .signup-btn:hover { background: #2B8A3E; }
        .logout-btn { background: #FF4B2B; margin-top: 15px; }
        .logout-btn:hover { background: #E14020; }
        .chat-btn { background: #4CAF50; margin-top: 15px; }
        .user-info { text-align: center; color: white; }
        .avatar { display: block; margin: 15px auto; border-radius: 50%; width: 100px; }
        .error-box {
            background: #fee;
            border: 1px solid #fcc;
            color: #c00;
            padding: 15px;
            border-radius: 8px;
            max-width: 480px;
            margin: 20px auto;
            text-align: center;
        }
"#;

fn render_login_page(auth_url: &str, error: Option<&str>) -> Html<String> {
    let error_box = error
        .map(|msg| format!(r#"<div class="error-box">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Health Advice Chatbot</title>
    <style>{style}</style>
</head>
<body>
    <h1 class="title">🩺 Health Advice Chatbot</h1>
    <h3 class="subtitle">🔐 Secure Login with Google</h3>
    {error_box}
    <div class="container">
        <a href="{auth_url}" class="button">Login with Google</a>
        <a href="https://accounts.google.com/signup" class="button signup-btn">Sign Up</a>
    </div>
</body>
</html>
"#,
        style = PAGE_STYLE,
        error_box = error_box,
        auth_url = auth_url,
    ))
}

fn render_welcome_page(name: &str, email: &str, picture: &str) -> Html<String> {
    let avatar = if picture.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="avatar" src="{}" alt="avatar">"#,
            escape_html(picture)
        )
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Health Advice Chatbot</title>
    <style>{style}</style>
</head>
<body>
    <h1 class="title">🩺 Health Advice Chatbot</h1>
    <h3 class="user-info">✅ Welcome, {name}!</h3>
    {avatar}
    <h4 class="user-info">📧 Email: {email}</h4>
    <div class="container">
        <a href="/chat" class="button chat-btn">Get Health Advice</a>
        <form method="post" action="/logout">
            <button type="submit" class="button logout-btn">Logout</button>
        </form>
    </div>
</body>
</html>
"#,
        style = PAGE_STYLE,
        name = escape_html(name),
        avatar = avatar,
        email = escape_html(email),
    ))
}
