use serde::Deserialize;

/// Request body size limits
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyLimits {
    /// Limit for JSON bodies (text, images, PDF)
    #[serde(default = "default_json_body_bytes")]
    pub json_body_bytes: usize,
    /// Limit for audio uploads, multipart or JSON data URI
    #[serde(default = "default_audio_body_bytes")]
    pub audio_body_bytes: usize,
}

impl Default for BodyLimits {
    fn default() -> Self {
        Self {
            json_body_bytes: default_json_body_bytes(),
            audio_body_bytes: default_audio_body_bytes(),
        }
    }
}

const fn default_json_body_bytes() -> usize {
    50 << 20
}

const fn default_audio_body_bytes() -> usize {
    100 << 20
}
