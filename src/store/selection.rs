use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{DailySelection, SelectionStore};
use crate::utils::debug_log;

use super::{get_cache_dir, read_json, write_json};

const CACHE_VERSION: u32 = 1;
const CACHE_FILE: &str = "pet-of-the-day.json";

#[derive(Debug, Serialize, Deserialize)]
struct SelectionFile {
    version: u32,
    #[serde(flatten)]
    selection: DailySelection,
}

/// Pet of the day cache backed by a JSON file
#[derive(Debug)]
pub(crate) struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location; without a home directory nothing persists
    pub(crate) fn open_default() -> Self {
        let path = get_cache_dir()
            .map(|dir| dir.join(CACHE_FILE))
            .unwrap_or_default();
        Self::new(path)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn read(&self) -> Option<DailySelection> {
        let file: SelectionFile = read_json(&self.path)?;
        if file.version != CACHE_VERSION {
            debug_log(format!(
                "ignoring pet of the day cache version {}",
                file.version
            ));
            return None;
        }
        Some(file.selection)
    }

    fn write(&mut self, selection: &DailySelection) {
        debug_log(format!(
            "caching pet of the day {} for {} in {}",
            selection.pet.id,
            selection.date,
            self.path.display()
        ));
        write_json(
            &self.path,
            &SelectionFile {
                version: CACHE_VERSION,
                selection: selection.clone(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{cat, dog};

    fn store_in(dir: &tempfile::TempDir) -> FileSelectionStore {
        FileSelectionStore::new(dir.path().join("nested").join(CACHE_FILE))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).read().is_none());
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let selection = DailySelection {
            pet: cat(3, 4, 3000.0, 20.0, 40.0),
            date: "2025-01-01".to_string(),
        };
        store.write(&selection);

        let reopened = store_in(&dir);
        assert_eq!(reopened.read(), Some(selection));
    }

    #[test]
    fn corrupted_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn invalid_cached_pet_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            r#"{"version":1,"date":"2025-01-01","pet":{"id":1,"kind":"dog","weight":1,"height":1,"length":1,"number_of_lives":2}}"#,
        )
        .unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn other_version_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.write(&DailySelection {
            pet: dog(1, 1.0, 1.0, 1.0),
            date: "2025-01-01".to_string(),
        });
        let raw = std::fs::read_to_string(store.path()).unwrap();
        std::fs::write(store.path(), raw.replace(r#""version":1"#, r#""version":99"#)).unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn empty_path_never_persists() {
        let mut store = FileSelectionStore::new(PathBuf::new());
        store.write(&DailySelection {
            pet: dog(1, 1.0, 1.0, 1.0),
            date: "2025-01-01".to_string(),
        });
        assert!(store.read().is_none());
    }
}
