use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("no Gemini API key configured")]
    MissingCredentials,

    #[error("model request failed: {0}")]
    Request(String),

    #[error("model returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl AssistantError {
    /// Whether the upstream refused for quota or rate-limit reasons.
    pub fn is_quota(&self) -> bool {
        match self {
            AssistantError::Upstream { status: 429, .. } => true,
            AssistantError::Upstream { message, .. } | AssistantError::Request(message) => {
                message.contains("quota")
                    || message.contains("429")
                    || message.contains("RESOURCE_EXHAUSTED")
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(e: reqwest::Error) -> Self {
        AssistantError::Request(e.to_string())
    }
}
