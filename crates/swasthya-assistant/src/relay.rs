use swasthya_core::lang::{Language, Localized};
use tracing::{error, warn};

use crate::chat::ChatMessage;
use crate::error::AssistantError;
use crate::gemini::GeminiClient;
use crate::prompt::transcript;

/// Canned replies returned in place of a model answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Unconfigured,
    Quota,
    Apology,
}

impl Fallback {
    pub fn for_error(err: &AssistantError) -> Self {
        match err {
            AssistantError::MissingCredentials => Fallback::Unconfigured,
            e if e.is_quota() => Fallback::Quota,
            _ => Fallback::Apology,
        }
    }

    pub fn text(self, language: Language) -> &'static str {
        let pair = match self {
            Fallback::Unconfigured => Localized::new(
                "Please try again later or check API configuration.",
                "कृपया बाद में प्रयास करें।",
            ),
            Fallback::Quota => Localized::new(
                "Quota exceeded. Please try again later.",
                "अपर्याप्त कोटा। कृपया बाद में प्रयास करें।",
            ),
            Fallback::Apology => Localized::new(
                "Sorry, I'm having trouble answering your question. Please try again.",
                "क्षमा करें, मुझे आपके प्रश्न का उत्तर देने में समस्या हो रही है।",
            ),
        };
        *pair.get(language)
    }
}

/// Forwards user messages to the model. Without a client every call gets
/// the [`Fallback::Unconfigured`] reply.
pub struct ChatRelay {
    client: Option<GeminiClient>,
}

impl ChatRelay {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Reply to `message`. Always produces text; failures are logged and
    /// replaced by a localized canned reply.
    pub async fn send(&self, message: &str, language: Language, history: &[ChatMessage]) -> String {
        match self.try_send(message, language, history).await {
            Ok(text) => text,
            Err(e) => {
                let fallback = Fallback::for_error(&e);
                match fallback {
                    Fallback::Unconfigured => warn!("chat relay has no API key, using fallback"),
                    _ => error!(error = %e, ?fallback, "chat relay failed"),
                }
                fallback.text(language).to_string()
            }
        }
    }

    /// The unwrapped exchange, for callers that want the error.
    pub async fn try_send(
        &self,
        message: &str,
        language: Language,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        let client = self
            .client
            .as_ref()
            .ok_or(AssistantError::MissingCredentials)?;
        let contents = transcript(language, history, message);
        client.generate(&contents).await
    }
}
