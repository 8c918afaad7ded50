//! swasthya-history
//!
//! Persistent chat sessions. The whole session list lives under a single
//! key in a [`KeyValueStore`] and is rewritten after every mutation.

pub mod clock;
pub mod error;
pub mod history;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::HistoryError;
pub use history::{ChatHistory, STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
