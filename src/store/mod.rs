//! Local persistence: the pet-of-the-day cache and the listing preferences
//!
//! Both live as small versioned JSON files under ~/.cache/fever-pets.
//! Unreadable or outdated files read as absent; write failures are ignored.

mod filters;
mod selection;

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::APP_DIR;

pub(crate) use filters::{FilterState, FilterStore};
pub(crate) use selection::FileSelectionStore;

/// Get the default cache directory
pub(crate) fn get_cache_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".cache").join(APP_DIR))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let file = File::open(path).ok()?;
    serde_json::from_reader(file).ok()
}

fn write_json<T: Serialize>(path: &Path, value: &T) {
    if path.as_os_str().is_empty() {
        return;
    }
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut file) = File::create(path) {
        let _ = serde_json::to_writer(&mut file, value);
    }
}
