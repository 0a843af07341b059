//! Pet of the day
//!
//! The pick is derived from the calendar date alone: the year, month and day
//! are summed and reduced modulo the number of candidates. The pick is then
//! cached with its date so later evaluations on the same day return it
//! unchanged, even if the candidate list has changed in the meantime.
//! The rotation is cosmetic and not uniform across list lengths.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::DATE_FORMAT;

use super::types::Pet;

/// A pick together with the day it was made for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DailySelection {
    pub(crate) pet: Pet,
    /// YYYY-MM-DD in the viewer's calendar
    pub(crate) date: String,
}

/// Storage for the last selection. Implementations hold no policy.
pub(crate) trait SelectionStore {
    /// Last written selection, or `None` when absent or unreadable
    fn read(&self) -> Option<DailySelection>;

    fn write(&mut self, selection: &DailySelection);
}

/// Result of one evaluation of the selector
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DailyOutcome {
    /// Cached pick is for today; nothing to write
    Fresh(Pet),
    /// New pick for today that must be written back
    Selected(DailySelection),
    /// Stale and no candidates; nothing to write
    Empty,
}

impl DailyOutcome {
    pub(crate) fn into_pet(self) -> Option<Pet> {
        match self {
            DailyOutcome::Fresh(pet) => Some(pet),
            DailyOutcome::Selected(selection) => Some(selection.pet),
            DailyOutcome::Empty => None,
        }
    }
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Sum of the year, month and day components
pub(crate) fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) + i64::from(date.month()) + i64::from(date.day())
}

/// Index of the pick for `date` among `len` candidates. `len` must be non-zero.
pub(crate) fn daily_index(date: NaiveDate, len: usize) -> usize {
    (daily_seed(date).unsigned_abs() % len as u64) as usize
}

fn is_fresh(selection: &DailySelection, today: NaiveDate) -> bool {
    selection.date == date_key(today)
}

/// Decide the pet of the day without touching storage.
pub(crate) fn select_daily(
    candidates: &[Pet],
    cached: Option<&DailySelection>,
    today: NaiveDate,
) -> DailyOutcome {
    if let Some(selection) = cached
        && is_fresh(selection, today)
    {
        return DailyOutcome::Fresh(selection.pet.clone());
    }

    if candidates.is_empty() {
        return DailyOutcome::Empty;
    }

    let index = daily_index(today, candidates.len());
    DailyOutcome::Selected(DailySelection {
        pet: candidates[index].clone(),
        date: date_key(today),
    })
}

fn commit<S: SelectionStore + ?Sized>(store: &mut S, outcome: DailyOutcome) -> Option<Pet> {
    if let DailyOutcome::Selected(selection) = &outcome {
        store.write(selection);
    }
    outcome.into_pet()
}

/// Read the store, evaluate the selector and write back a new pick.
pub(crate) fn pet_of_the_day<S: SelectionStore + ?Sized>(
    store: &mut S,
    candidates: &[Pet],
    today: NaiveDate,
) -> Option<Pet> {
    let cached = store.read();
    commit(store, select_daily(candidates, cached.as_ref(), today))
}

/// Like [`pet_of_the_day`], but candidates are only loaded when the cached
/// pick is missing or stale. The store is read once per evaluation.
pub(crate) fn pet_of_the_day_with<S, F, E>(
    store: &mut S,
    today: NaiveDate,
    load: F,
) -> Result<Option<Pet>, E>
where
    S: SelectionStore + ?Sized,
    F: FnOnce() -> Result<Vec<Pet>, E>,
{
    let cached = store.read();
    if let Some(selection) = &cached
        && is_fresh(selection, today)
    {
        return Ok(Some(selection.pet.clone()));
    }

    let candidates = load()?;
    Ok(commit(store, select_daily(&candidates, cached.as_ref(), today)))
}
