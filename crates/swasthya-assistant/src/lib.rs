//! swasthya-assistant
//!
//! Conversational health assistant backed by the Gemini
//! `generateContent` API. The relay never fails outward: every upstream
//! problem becomes a localized canned reply.

pub mod chat;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod relay;

pub use chat::{ChatMessage, ChatRole};
pub use gemini::GeminiClient;
pub use relay::ChatRelay;
