mod backend;
mod file;
mod memory;

pub use backend::PreferenceStore;
pub use file::{FilePreferenceStore, LIKED_KEY};
pub use memory::MemoryPreferenceStore;

use std::path::PathBuf;

use crate::config::StackSwipeConfig;
use crate::error::{Result, StackSwipeError};

/// Environment variable that overrides the preference file location.
pub const PREFS_ENV_VAR: &str = "STACKSWIPE_PREFS";

/// Enum wrapper over the preference stores. Dispatches to the concrete
/// implementation.
#[derive(Debug)]
pub enum Store {
    File(FilePreferenceStore),
    Memory(MemoryPreferenceStore),
}

impl PreferenceStore for Store {
    fn load_liked_ids(&self) -> Result<Vec<String>> {
        match self {
            Store::File(s) => s.load_liked_ids(),
            Store::Memory(s) => s.load_liked_ids(),
        }
    }

    fn save_liked_ids(&self, ids: &[String]) -> Result<()> {
        match self {
            Store::File(s) => s.save_liked_ids(ids),
            Store::Memory(s) => s.save_liked_ids(ids),
        }
    }
}

/// Open the file store at `$STACKSWIPE_PREFS`, else `storage.path`, else
/// the default location.
pub fn open_store(config: &StackSwipeConfig) -> Result<Store> {
    let path = resolve_prefs_path(
        std::env::var(PREFS_ENV_VAR).ok().as_deref(),
        config.storage.path.as_deref(),
    )?;
    tracing::debug!(path = %path.display(), "opening preference store");
    Ok(Store::File(FilePreferenceStore::new(path)))
}

fn resolve_prefs_path(env_override: Option<&str>, configured: Option<&str>) -> Result<PathBuf> {
    if let Some(p) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    if let Some(p) = configured.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    default_prefs_path()
}

/// Default preference path: `~/.config/stackswipe/preferences.json`
fn default_prefs_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join("stackswipe").join("preferences.json"))
        .ok_or_else(|| StackSwipeError::Config("cannot determine config directory".to_string()))
}
