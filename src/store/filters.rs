use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::SortOption;

use super::{get_cache_dir, read_json, write_json};

const FILTERS_VERSION: u32 = 1;
const FILTERS_FILE: &str = "filters.json";

/// Listing preferences remembered between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FilterState {
    pub(crate) sort: SortOption,
    pub(crate) page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort: SortOption::default(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Switch ordering; a different ordering starts over from page 1
    pub(crate) fn with_sort(self, sort: SortOption) -> Self {
        if sort == self.sort {
            self
        } else {
            Self { sort, page: 1 }
        }
    }

    pub(crate) fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub(crate) fn has_active_filters(&self) -> bool {
        !self.sort.is_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FiltersFile {
    version: u32,
    #[serde(flatten)]
    state: FilterState,
}

/// Filter preferences backed by a JSON file
#[derive(Debug)]
pub(crate) struct FilterStore {
    path: PathBuf,
}

impl FilterStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn open_default() -> Self {
        let path = get_cache_dir()
            .map(|dir| dir.join(FILTERS_FILE))
            .unwrap_or_default();
        Self::new(path)
    }

    pub(crate) fn load(&self) -> FilterState {
        match read_json::<FiltersFile>(&self.path) {
            Some(file) if file.version == FILTERS_VERSION => file.state.with_page(file.state.page),
            _ => FilterState::default(),
        }
    }

    pub(crate) fn save(&self, state: FilterState) {
        write_json(
            &self.path,
            &FiltersFile {
                version: FILTERS_VERSION,
                state,
            },
        );
    }

    pub(crate) fn reset(&self) -> FilterState {
        let state = FilterState::default();
        self.save(state);
        state
    }
}
