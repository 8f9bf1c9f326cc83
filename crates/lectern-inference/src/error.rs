use thiserror::Error;

pub type Result<T> = std::result::Result<T, InferenceError>;

/// Failures of an outbound call to the upstream API
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Upstream rejected the call or reported an error payload
    ///
    /// `message` carries the upstream's own text when it supplied one.
    #[error("upstream error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Upstream { status: u16, message: Option<String> },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// A success status with a body that is not a chat completion
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    /// Upstream-supplied message, if any
    #[cfg(test)]
    pub(crate) fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Upstream { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
