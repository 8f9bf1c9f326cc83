use async_trait::async_trait;
use lectern_config::UpstreamConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::{InferenceError, Result},
    http_client::http_client,
    protocol::{ChatMessage, ChatRequest, ChatResponse},
};

/// Text produced by one upstream call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceResponse {
    /// First choice's text, `None` when the model returned nothing
    pub text: Option<String>,
}

/// Seam between the task logic and the upstream model service
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Run one chat completion. Single attempt, no retry.
    async fn infer(&self, messages: &[ChatMessage], model: &str) -> Result<InferenceResponse>;
}

/// OpenAI-compatible chat completion client
pub struct ChatCompletionClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl ChatCompletionClient {
    /// Create a client from the upstream configuration
    ///
    /// The credential is taken from the configuration value, never from the
    /// process environment.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl InferenceBackend for ChatCompletionClient {
    async fn infer(&self, messages: &[ChatMessage], model: &str) -> Result<InferenceResponse> {
        let wire_request = ChatRequest {
            model: model.to_owned(),
            messages: messages.to_vec(),
        };

        tracing::debug!(%model, messages = messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%model, error = %e, "chat completion request failed");
                InferenceError::Transport(e.to_string())
            })?;

        let status = response.status();

        let body = response.text().await.map_err(|e| {
            tracing::error!(%model, %status, error = %e, "failed to read chat completion body");
            InferenceError::Transport(e.to_string())
        })?;

        let parsed = interpret(status, &body)?;

        tracing::debug!(%model, "chat completion request complete");

        Ok(parsed)
    }
}

/// Map a status and body to a response or an error
///
/// An `error` object wins over the status code, so a 200 carrying an error
/// payload is still an upstream error.
fn interpret(status: http::StatusCode, body: &str) -> Result<InferenceResponse> {
    match serde_json::from_str::<ChatResponse>(body) {
        Ok(ChatResponse { error: Some(error), .. }) => {
            tracing::error!(%status, message = ?error.message, "upstream reported an error");
            Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: error.message.filter(|m| !m.is_empty()),
            })
        }
        Ok(_) if !status.is_success() => {
            tracing::error!(%status, "upstream returned an error status");
            Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: None,
            })
        }
        Ok(response) => Ok(InferenceResponse {
            text: response.first_text(),
        }),
        Err(_) if !status.is_success() => {
            tracing::error!(%status, body, "upstream returned an error status");
            let body = body.trim();
            Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: (!body.is_empty()).then(|| body.to_owned()),
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to parse chat completion response");
            Err(InferenceError::MalformedResponse(e.to_string()))
        }
    }
}
