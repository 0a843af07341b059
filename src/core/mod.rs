//! Core module - pet data model and the pure selection/classification logic

mod daily;
mod health;
mod pagination;
mod types;

pub(crate) use daily::{DailySelection, SelectionStore, date_key, pet_of_the_day_with};
pub(crate) use health::classify;
pub(crate) use pagination::{Pagination, next_page, prev_page};
pub(crate) use types::{
    HealthStatus, Pet, PetId, PetPage, RawPet, SortDirection, SortKey, SortOption, Species,
};

#[cfg(test)]
pub(crate) use daily::test_support::MemoryStore;
#[cfg(test)]
pub(crate) use types::test_support;
