use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use jiff::Timestamp;
use swasthya_core::models::chat_history::{ChatHistoryMessage, ChatHistoryRole};
use swasthya_history::{
    ChatHistory, Clock, FileStore, HistoryError, KeyValueStore, MemoryStore, STORAGE_KEY,
};
use uuid::Uuid;

/// Clock that reads a shared counter of seconds since the epoch.
#[derive(Clone, Default)]
struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    fn at(second: i64) -> Self {
        Self(Arc::new(AtomicI64::new(second)))
    }

    fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_second(self.0.load(Ordering::SeqCst)).unwrap()
    }
}

/// In-memory store whose writes fail while `failing` is set.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: Arc<std::sync::Mutex<MemoryStore>>,
    failing: Arc<AtomicBool>,
}

impl FlakyStore {
    fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        self.inner.lock().unwrap().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(HistoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.lock().unwrap().set(key, value)
    }
}

fn message(role: ChatHistoryRole, content: &str) -> ChatHistoryMessage {
    ChatHistoryMessage {
        role,
        content: content.to_string(),
        timestamp: Timestamp::from_second(1_700_000_000).unwrap(),
    }
}

fn exchange(question: &str) -> Vec<ChatHistoryMessage> {
    vec![
        message(ChatHistoryRole::User, question),
        message(ChatHistoryRole::Assistant, "Please rest and drink fluids."),
    ]
}

fn memory_history() -> ChatHistory<MemoryStore, ManualClock> {
    ChatHistory::open(MemoryStore::new(), ManualClock::at(1_700_000_000)).unwrap()
}

#[test]
fn empty_messages_return_current_id() {
    let mut history = memory_history();
    assert_eq!(history.save_chat(Vec::new(), None).unwrap(), None);

    let id = Uuid::new_v4();
    assert_eq!(history.save_chat(Vec::new(), Some(id)).unwrap(), Some(id));
    assert!(history.sessions().is_empty());
}

#[test]
fn new_session_is_titled_from_first_message() {
    let mut history = memory_history();
    let id = history
        .save_chat(exchange("I have had a headache and fever since Monday"), None)
        .unwrap()
        .unwrap();

    let session = history.get(id).unwrap();
    assert_eq!(session.title, "I have had a headache and feve...");
    assert_eq!(session.messages.len(), 2);
}

#[test]
fn short_title_has_no_ellipsis() {
    let mut history = memory_history();
    let id = history.save_chat(exchange("Fever"), None).unwrap().unwrap();
    assert_eq!(history.get(id).unwrap().title, "Fever");
}

#[test]
fn title_counts_characters_not_bytes() {
    let mut history = memory_history();
    let question = "मुझे तीन दिनों से बुखार है और सिर में दर्द भी है";
    let id = history.save_chat(exchange(question), None).unwrap().unwrap();

    let title = &history.get(id).unwrap().title;
    let expected: String = question.chars().take(30).collect();
    assert_eq!(title, &format!("{expected}..."));
}

#[test]
fn new_sessions_are_prepended() {
    let mut history = memory_history();
    let first = history.save_chat(exchange("first"), None).unwrap().unwrap();
    let second = history.save_chat(exchange("second"), None).unwrap().unwrap();

    let ids: Vec<Uuid> = history.sessions().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn saving_known_id_replaces_messages_and_bumps_time() {
    let clock = ManualClock::at(1_700_000_000);
    let mut history = ChatHistory::open(MemoryStore::new(), clock.clone()).unwrap();
    let id = history.save_chat(exchange("cough"), None).unwrap().unwrap();
    let created = history.get(id).unwrap().last_updated;

    clock.advance(60);
    let mut longer = exchange("cough");
    longer.push(message(ChatHistoryRole::User, "It is worse at night"));
    let returned = history.save_chat(longer.clone(), Some(id)).unwrap();

    assert_eq!(returned, Some(id));
    assert_eq!(history.sessions().len(), 1);
    let session = history.get(id).unwrap();
    assert_eq!(session.messages, longer);
    assert_eq!(session.title, "cough");
    assert_eq!(
        session.last_updated,
        created.checked_add(jiff::SignedDuration::from_secs(60)).unwrap()
    );
}

#[test]
fn unknown_id_creates_new_session() {
    let mut history = memory_history();
    let stale = Uuid::new_v4();
    let id = history.save_chat(exchange("rash"), Some(stale)).unwrap().unwrap();

    assert_ne!(id, stale);
    assert!(history.get(id).is_some());
}

#[test]
fn delete_and_clear() {
    let mut history = memory_history();
    let a = history.save_chat(exchange("a"), None).unwrap().unwrap();
    let b = history.save_chat(exchange("b"), None).unwrap().unwrap();

    assert!(history.delete_chat(a).unwrap());
    assert!(!history.delete_chat(a).unwrap());
    assert!(history.get(a).is_none());
    assert!(history.get(b).is_some());

    history.clear().unwrap();
    assert!(history.sessions().is_empty());
}

#[test]
fn sessions_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(1_700_000_000);

    let id = {
        let mut history = ChatHistory::open(FileStore::new(dir.path()), clock.clone()).unwrap();
        history.save_chat(exchange("vomiting"), None).unwrap().unwrap()
    };

    let reopened = ChatHistory::open(FileStore::new(dir.path()), clock).unwrap();
    assert_eq!(reopened.sessions().len(), 1);
    assert_eq!(reopened.get(id).unwrap().title, "vomiting");
}

#[test]
fn corrupt_history_starts_empty() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "{not json").unwrap();

    let mut history = ChatHistory::open(store, ManualClock::default()).unwrap();
    assert!(history.sessions().is_empty());

    history.save_chat(exchange("recovered"), None).unwrap();
    assert_eq!(history.sessions().len(), 1);
}

#[test]
fn file_store_writes_atomically_and_privately() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("nested"));

    assert_eq!(store.get("swasthya_chat_history").unwrap(), None);
    store.set("swasthya_chat_history", "[]").unwrap();
    assert_eq!(
        store.get("swasthya_chat_history").unwrap().as_deref(),
        Some("[]")
    );

    let path = dir.path().join("nested").join("swasthya_chat_history.json");
    assert!(path.exists());
    assert!(!dir.path().join("nested").join("swasthya_chat_history.json.tmp").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    assert!(matches!(
        store.set("../escape", "x"),
        Err(HistoryError::InvalidKey(_))
    ));
    assert!(matches!(store.get(""), Err(HistoryError::InvalidKey(_))));
}

#[test]
fn failed_write_leaves_sessions_unchanged() {
    let store = FlakyStore::default();
    let clock = ManualClock::at(1_700_000_000);
    let mut history = ChatHistory::open(store.clone(), clock.clone()).unwrap();
    let kept = history.save_chat(exchange("kept"), None).unwrap().unwrap();
    let before = history.get(kept).unwrap().clone();

    store.fail_writes(true);

    assert!(history.save_chat(exchange("lost"), None).is_err());
    assert_eq!(history.sessions().len(), 1);

    clock.advance(60);
    let mut longer = exchange("kept");
    longer.push(message(ChatHistoryRole::User, "one more"));
    assert!(history.save_chat(longer, Some(kept)).is_err());
    let after = history.get(kept).unwrap();
    assert_eq!(after.messages, before.messages);
    assert_eq!(after.last_updated, before.last_updated);

    assert!(history.delete_chat(kept).is_err());
    assert!(history.get(kept).is_some());

    assert!(history.clear().is_err());
    assert_eq!(history.sessions().len(), 1);

    // Memory and storage still agree once writes recover.
    store.fail_writes(false);
    let reopened = ChatHistory::open(store.clone(), clock).unwrap();
    assert_eq!(reopened.sessions().len(), 1);
    assert_eq!(reopened.get(kept).unwrap().messages, before.messages);
}
