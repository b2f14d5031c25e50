use std::sync::Mutex;

use crate::error::{Result, StackSwipeError};

use super::PreferenceStore;

/// In-process store for tests and sessions that shouldn't touch disk.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    liked: Mutex<Vec<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_liked(ids: &[&str]) -> Self {
        Self {
            liked: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_liked_ids(&self) -> Result<Vec<String>> {
        let liked = self
            .liked
            .lock()
            .map_err(|e| StackSwipeError::Storage(format!("failed to acquire store lock: {e}")))?;
        Ok(liked.clone())
    }

    fn save_liked_ids(&self, ids: &[String]) -> Result<()> {
        let mut liked = self
            .liked
            .lock()
            .map_err(|e| StackSwipeError::Storage(format!("failed to acquire store lock: {e}")))?;
        *liked = ids.to_vec();
        Ok(())
    }
}
