//! OpenAI-compatible chat completion wire format, extended with the
//! document and audio content parts the upstream multimodal models accept

use serde::{Deserialize, Serialize};

// -- Request types --

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// Message within a request or response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Content (string or array of content parts)
    pub content: MessageContent,
}

impl ChatMessage {
    /// System message with plain text
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// User message with plain text
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// User message made of content parts
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }
}

/// Message author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Content can be a string or array of content parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Array of content parts
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Concatenated text of the content, ignoring non-text parts
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// Individual content part in a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text {
        /// The text string
        text: String,
    },
    /// Image content via URL or data URI
    ImageUrl {
        /// Image URL specification
        image_url: ImageUrl,
    },
    /// Inline document
    File {
        /// Document specification
        file: FileData,
    },
    /// Inline audio clip
    InputAudio {
        /// Audio specification
        input_audio: InputAudio,
    },
}

/// Image URL specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUrl {
    /// Image URL or base64 data URI
    pub url: String,
}

/// Inline document specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileData {
    /// Document type, e.g. `pdf`
    pub file_type: String,
    /// Base64-encoded document bytes
    pub file_data: String,
}

/// Inline audio specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputAudio {
    /// Base64 data URI of the clip
    pub data: String,
    /// Declared container format
    pub format: String,
}

// -- Response types --

/// Chat completion response
///
/// Only the fields the gateway reads are modelled. An `error` object may be
/// present even on a 2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// API-reported failure
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Choice within a response
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ChoiceMessage,
}

/// Message within a response choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Generated content
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Error object reported by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, `None` when absent or empty
    pub fn first_text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .map(MessageContent::text)
            .filter(|text| !text.is_empty())
    }
}
