use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default OpenAI-compatible endpoint of the upstream model service
pub const DEFAULT_UPSTREAM_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";

/// Upstream chat-completion API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Bearer credential sent with every upstream call
    pub api_key: SecretString,
    /// Base URL; `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Vision-and-text model for summary, keyword, book note and PDF tasks
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    /// Audio-capable model for transcription and voice summary
    #[serde(default = "default_omni_model")]
    pub omni_model: String,
}

impl UpstreamConfig {
    /// Configuration pointing at the default endpoint and models
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            vision_model: default_vision_model(),
            omni_model: default_omni_model(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_UPSTREAM_URL).expect("default upstream URL is valid")
}

fn default_vision_model() -> String {
    "qwen-vl-plus".to_owned()
}

fn default_omni_model() -> String {
    "qwen-omni-turbo".to_owned()
}
