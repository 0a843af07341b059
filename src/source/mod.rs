//! Pet data source abstraction layer
//!
//! The catalog is read through the `PetSource` trait so the command handlers
//! can run against the HTTP API or an in-memory fixture.

pub(crate) mod http;
pub(crate) mod validate;

use crate::core::{Pet, PetId, PetPage, SortOption};
use crate::error::AppError;

pub(crate) use http::HttpPetSource;

/// One page request against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageQuery {
    /// 1-based
    pub(crate) page: u32,
    pub(crate) limit: u32,
    pub(crate) sort: SortOption,
}

/// Read-only access to the pet catalog
pub(crate) trait PetSource: Send + Sync {
    /// Human-readable location for status lines
    fn describe(&self) -> String;

    /// One sorted page plus the total collection size
    fn fetch_page(&self, query: &PageQuery) -> Result<PetPage, AppError>;

    /// Whole collection in server order
    fn fetch_all(&self) -> Result<Vec<Pet>, AppError>;

    fn fetch_by_id(&self, id: &PetId) -> Result<Pet, AppError>;
}
