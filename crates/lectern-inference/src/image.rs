use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    error::{InferenceError, Result},
    http_client::http_client,
};

/// Browser identity presented to image hosts that refuse bare clients
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Referer accepted by the article image CDN
const ARTICLE_REFERER: &str = "https://mp.weixin.qq.com/";

const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

/// Source of remote images, inlined as data URIs
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Download an image and return it as `data:<type>;base64,<payload>`
    async fn fetch_data_uri(&self, url: &str) -> Result<String>;
}

/// Fetches images over HTTP with browser-like headers
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new() -> Self {
        Self { client: http_client() }
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch_data_uri(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "fetching remote image");

        let response = self
            .client
            .get(url)
            .header(http::header::USER_AGENT, BROWSER_USER_AGENT)
            .header(http::header::REFERER, ARTICLE_REFERER)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, error = %e, "image fetch failed");
                InferenceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "image host returned an error status");
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: None,
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_owned();

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(%url, error = %e, "failed to read image body");
            InferenceError::Transport(e.to_string())
        })?;

        Ok(data_uri(&content_type, &bytes))
    }
}

/// Encode bytes as a base64 data URI
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}
