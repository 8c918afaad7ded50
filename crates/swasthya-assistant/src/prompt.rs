//! System framing and transcript assembly.
//!
//! The model is primed with a user/model exchange carrying the system
//! instruction rather than a separate system field, followed by the
//! capped conversation history and the new message.

use swasthya_core::lang::Language;

use crate::chat::{ChatMessage, ChatRole};
use crate::gemini::{Content, GeminiRole};

/// Most recent history turns forwarded to the model.
pub const MAX_HISTORY_TURNS: usize = 20;

const SYSTEM_PROMPT_EN: &str = "You are an AI health assistant helping rural Indians. \
Respond in simple language. You can provide medical guidance but always remind users to \
consult a doctor for serious symptoms. You are empathetic, helpful, and clear.";

const SYSTEM_PROMPT_HI: &str = "आप एक AI स्वास्थ्य सहायक हैं जो ग्रामीण भारत के लोगों की मदद करते हैं। \
आप सरल हिंदी में जवाब दें। आप चिकित्सा सलाह दे सकते हैं लेकिन हमेशा यह याद दिलाएं कि गंभीर लक्षणों के लिए \
डॉक्टर से मिलें। आप सहानुभूतिपूर्ण, मददगार और स्पष्ट हैं।";

const ACKNOWLEDGEMENT: &str = "Understood. I am ready to help as the AI health assistant.";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => SYSTEM_PROMPT_EN,
        Language::Hi => SYSTEM_PROMPT_HI,
    }
}

/// Full request transcript: framing pair, the last [`MAX_HISTORY_TURNS`]
/// history turns, then `message`.
pub fn transcript(language: Language, history: &[ChatMessage], message: &str) -> Vec<Content> {
    let recent = &history[history.len().saturating_sub(MAX_HISTORY_TURNS)..];

    let mut contents = Vec::with_capacity(recent.len() + 3);
    contents.push(Content::text(
        GeminiRole::User,
        format!(
            "System Instruction: {}\n\nPlease switch to the role of the AI health assistant now.",
            system_prompt(language)
        ),
    ));
    contents.push(Content::text(GeminiRole::Model, ACKNOWLEDGEMENT));

    for turn in recent {
        let role = match turn.role {
            ChatRole::User => GeminiRole::User,
            ChatRole::Assistant => GeminiRole::Model,
        };
        contents.push(Content::text(role, turn.content.as_str()));
    }

    contents.push(Content::text(GeminiRole::User, message));
    contents
}
