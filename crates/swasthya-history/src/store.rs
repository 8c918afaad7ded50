use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HistoryError;

/// String values addressed by string keys.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError>;
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a temp file that is renamed over the target, so a reader
/// sees either the old or the new value. On Unix the file is `0o600`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, HistoryError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(HistoryError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let tmp_path = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp_path, value.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "store value written");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
