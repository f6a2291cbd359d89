// src/services/openai.rs
//
// Chat-completions client for the advice feature. One call per query,
// no retries: a failed call surfaces immediately and the user resubmits.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Fixed system instruction sent with every advice request.
pub const SYSTEM_INSTRUCTION: &str = "You are a highly knowledgeable and empathetic health \
assistant dedicated to providing accurate, reliable, and easy-to-understand health and diet \
advice. Your primary role is to assist users with health-related inquiries, including symptoms, \
preventive care, nutrition, fitness, mental well-being, and first aid. When answering, carefully \
analyze the user's query, ensuring that you fully understand their concern before responding. \
Provide clear, concise, and practical advice that is easy for anyone to comprehend, regardless \
of their medical knowledge. If necessary, offer step-by-step guidance, helpful precautions, and \
actionable tips to ensure users can apply the information effectively in real life. You must \
strictly limit your responses to health and diet-related topics. If a user asks a question \
unrelated to health, wellness, or nutrition, politely inform them that you are only trained to \
provide health-related advice and cannot assist with other topics. Ensure that all information \
you provide is based on well-established medical knowledge and best practices. However, always \
include a disclaimer that your advice should not replace professional medical consultation, \
diagnosis, or treatment. Encourage users to seek a healthcare professional when necessary. Your \
goal is to be a friendly, trustworthy, and helpful health assistant that empowers users to make \
informed decisions about their well-being.";

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API key rejected: {0}")]
    InvalidCredentials(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[derive(Debug)]
pub struct OpenAIService {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: Client,
}

impl OpenAIService {
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            model,
            base_url,
            client,
        }
    }

    /// Send a prompt with the fixed system instruction and return the
    /// generated text trimmed of surrounding whitespace.
    ///
    /// `max_tokens` is passed through as given; range checks happen in the
    /// advice validators before any network call.
    pub async fn generate_advice(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, OpenAIError> {
        let api_key = self.api_key.as_ref().ok_or(OpenAIError::NotConfigured)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        debug!(model = %self.model, max_tokens, "Sending advice generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OpenAIError::Timeout
                } else {
                    OpenAIError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(OpenAIError::InvalidCredentials(format!("HTTP {}", status)));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenAIError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Advice generation request failed");
            return Err(OpenAIError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| OpenAIError::InvalidResponse(e.to_string()))?;

        let advice = completion
            .choices
            .first()
            .ok_or_else(|| OpenAIError::InvalidResponse("No choices in response".to_string()))?
            .message
            .content
            .trim()
            .to_string();

        if let Some(usage) = completion.usage {
            info!(
                model = %self.model,
                tokens_used = usage.total_tokens,
                "Advice generation completed"
            );
        }

        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn spawn_mock(app: Router) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn service(addr: std::net::SocketAddr, timeout: Duration) -> OpenAIService {
        OpenAIService::new(
            Some("sk-test".to_string()),
            "gpt-3.5-turbo".to_string(),
            format!("http://{}", addr),
            timeout,
        )
    }

    /// Echoes the received max_tokens and message roles back as the
    /// completion content so the test can assert on the request.
    fn echo_router() -> Router {
        Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<serde_json::Value>| async move {
                let max_tokens = body["max_tokens"].as_u64().unwrap_or(0);
                let roles: Vec<&str> = body["messages"]
                    .as_array()
                    .map(|msgs| {
                        msgs.iter()
                            .filter_map(|m| m["role"].as_str())
                            .collect()
                    })
                    .unwrap_or_default();
                Json(serde_json::json!({
                    "choices": [{
                        "message": {
                            "role": "assistant",
                            "content": format!("  max_tokens={} roles={}  ", max_tokens, roles.join(",")),
                        }
                    }],
                    "usage": {"total_tokens": 42}
                }))
            }),
        )
    }

    #[tokio::test]
    async fn test_request_carries_token_bound_and_system_message() {
        let addr = spawn_mock(echo_router()).await;
        let svc = service(addr, Duration::from_secs(5));

        let advice = svc.generate_advice("some prompt", 50).await.unwrap();

        // Never requests more output tokens than asked for
        assert!(advice.contains("max_tokens=50"));
        assert!(advice.contains("roles=system,user"));
        // Response is trimmed of surrounding whitespace
        assert!(!advice.starts_with(' '));
        assert!(!advice.ends_with(' '));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let svc = OpenAIService::new(
            None,
            "gpt-3.5-turbo".to_string(),
            // Unroutable on purpose: the call must fail before any request
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(1),
        );

        let err = svc.generate_advice("prompt", 100).await.unwrap_err();
        assert!(matches!(err, OpenAIError::NotConfigured));
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { StatusCode::UNAUTHORIZED }),
        );
        let addr = spawn_mock(app).await;
        let svc = service(addr, Duration::from_secs(5));

        let err = svc.generate_advice("prompt", 100).await.unwrap_err();
        assert!(matches!(err, OpenAIError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_upstream_error_is_surfaced() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "provider exploded") }),
        );
        let addr = spawn_mock(app).await;
        let svc = service(addr, Duration::from_secs(5));

        let err = svc.generate_advice("prompt", 100).await.unwrap_err();
        assert!(matches!(err, OpenAIError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_surfaces_timeout_within_bound() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({}))
            }),
        );
        let addr = spawn_mock(app).await;
        let svc = service(addr, Duration::from_millis(500));

        let started = std::time::Instant::now();
        let err = svc.generate_advice("prompt", 100).await.unwrap_err();
        assert!(matches!(err, OpenAIError::Timeout));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
