use swasthya_core::models::chat_history::{ChatHistoryMessage, ChatSession};
use tracing::{error, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::HistoryError;
use crate::store::KeyValueStore;

/// Key the session list is stored under.
pub const STORAGE_KEY: &str = "swasthya_chat_history";

/// Characters of the first message kept in a session title.
const TITLE_CHARS: usize = 30;

/// Chat sessions, newest first, backed by a [`KeyValueStore`].
///
/// The list is read from the store once in [`ChatHistory::open`] and
/// written back in full on each mutation. A mutation only takes effect in
/// memory once its write has succeeded.
pub struct ChatHistory<S, C> {
    store: S,
    clock: C,
    sessions: Vec<ChatSession>,
}

impl<S: KeyValueStore, C: Clock> ChatHistory<S, C> {
    /// Load the stored sessions. Content that does not parse is logged and
    /// discarded; the next write replaces it.
    pub fn open(store: S, clock: C) -> Result<Self, HistoryError> {
        let sessions = match store.get(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<ChatSession>>(&raw) {
                Ok(sessions) => sessions,
                Err(e) => {
                    error!(error = %e, "failed to parse chat history, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(sessions = sessions.len(), "chat history loaded");
        Ok(Self {
            store,
            clock,
            sessions,
        })
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn get(&self, id: Uuid) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Store `messages` as a session and return its id.
    ///
    /// With a known `current_id` the session's messages are replaced and its
    /// `last_updated` moves to now. Otherwise a new session is put at the
    /// front of the list. Empty `messages` change nothing and return
    /// `current_id`.
    pub fn save_chat(
        &mut self,
        messages: Vec<ChatHistoryMessage>,
        current_id: Option<Uuid>,
    ) -> Result<Option<Uuid>, HistoryError> {
        if messages.is_empty() {
            return Ok(current_id);
        }

        let now = self.clock.now();
        let mut next = self.sessions.clone();

        let existing = current_id.and_then(|id| next.iter_mut().find(|s| s.id == id));
        if let Some(session) = existing {
            session.messages = messages;
            session.last_updated = now;
            let id = session.id;
            self.commit(next)?;
            return Ok(Some(id));
        }

        let session = ChatSession {
            id: Uuid::new_v4(),
            title: title_for(&messages[0].content),
            last_updated: now,
            messages,
        };
        let id = session.id;
        next.insert(0, session);
        self.commit(next)?;

        info!(session_id = %id, "chat session created");
        Ok(Some(id))
    }

    /// Remove a session. Returns whether it existed.
    pub fn delete_chat(&mut self, id: Uuid) -> Result<bool, HistoryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self
            .sessions
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.commit(Vec::new())
    }

    /// Write `next` to the store, then make it the in-memory list. On a
    /// failed write the in-memory list is left as it was.
    fn commit(&mut self, next: Vec<ChatSession>) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&next)?;
        self.store.set(STORAGE_KEY, &json)?;
        self.sessions = next;
        Ok(())
    }
}

fn title_for(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
