use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, StackSwipeError};

use super::PreferenceStore;

/// Key under which the liked list is stored.
pub const LIKED_KEY: &str = "likedTech";

/// Preference store backed by a JSON object file.
///
/// The file is a small key-value document; this store owns only the
/// [`LIKED_KEY`] entry and leaves every other key untouched on save. A
/// missing, unreadable or malformed file loads as an empty list.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or `None` if it is absent or unusable.
    fn read_document(&self) -> Option<Map<String, Value>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "cannot read preferences: {e}");
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "preferences file is not a JSON object");
                None
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "malformed preferences file: {e}");
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_liked_ids(&self) -> Result<Vec<String>> {
        let Some(doc) = self.read_document() else {
            return Ok(Vec::new());
        };
        match doc.get(LIKED_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()),
            Some(_) => {
                tracing::warn!(path = %self.path.display(), "'{LIKED_KEY}' is not an array");
                Ok(Vec::new())
            }
        }
    }

    fn save_liked_ids(&self, ids: &[String]) -> Result<()> {
        let mut doc = self.read_document().unwrap_or_default();
        doc.insert(
            LIKED_KEY.to_string(),
            Value::Array(ids.iter().cloned().map(Value::String).collect()),
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StackSwipeError::Storage(format!(
                        "failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&Value::Object(doc))?;
        std::fs::write(&self.path, json).map_err(|e| {
            StackSwipeError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), count = ids.len(), "saved liked technologies");
        Ok(())
    }
}
