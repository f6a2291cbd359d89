// Application configuration loaded once at startup

use std::env;
use std::time::Duration;

/// Application configuration read from environment variables.
///
/// Secrets (`google_client_secret`, `openai_api_key`) are treated as opaque
/// strings and are never logged.
#[derive(Clone)]
pub struct AppConfig {
    /// Public base URL of this application. Also the OAuth redirect target:
    /// Google sends the `code` query parameter back to this URL.
    pub base_url: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub redirect_uri: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub auth_http_timeout: Duration,
    pub advice_http_timeout: Duration,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let google_client_id = env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("GOOGLE_CLIENT_ID is required"))?;
        let google_client_secret = env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("GOOGLE_CLIENT_SECRET is required"))?;

        // The original flow returns the code to the base URL itself.
        let redirect_uri = env::var("OAUTH_REDIRECT_URI").unwrap_or_else(|_| base_url.clone());

        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        let auth_http_timeout = Duration::from_secs(
            env::var("AUTH_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        );
        let advice_http_timeout = Duration::from_secs(
            env::var("ADVICE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        );

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            base_url,
            google_client_id,
            google_client_secret,
            redirect_uri,
            openai_api_key,
            openai_model,
            auth_http_timeout,
            advice_http_timeout,
            port,
        })
    }

    /// True when the app is served over HTTPS; controls the Secure cookie flag.
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}
