use serde::Serialize;

use crate::core::{HealthStatus, Pagination, Pet, SortOption, classify};

/// Pet in wire shape plus its derived health tier
#[derive(Debug, Serialize)]
struct PetJson<'a> {
    #[serde(flatten)]
    pet: &'a Pet,
    health: HealthStatus,
}

impl<'a> From<&'a Pet> for PetJson<'a> {
    fn from(pet: &'a Pet) -> Self {
        Self {
            pet,
            health: classify(pet),
        }
    }
}

#[derive(Debug, Serialize)]
struct FeaturedJson<'a> {
    date: &'a str,
    pet: Option<PetJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ListingJson<'a> {
    page: u32,
    page_size: u32,
    total_count: u64,
    total_pages: u32,
    sort: SortOption,
    pets: Vec<PetJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pet_of_the_day: Option<FeaturedJson<'a>>,
}

#[derive(Debug, Serialize)]
struct FiltersJson {
    sort: SortOption,
    page: u32,
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

pub(crate) fn output_listing_json(
    pets: &[Pet],
    pagination: &Pagination,
    sort: SortOption,
    featured: Option<(Option<&Pet>, &str)>,
) -> String {
    to_pretty(&ListingJson {
        page: pagination.page,
        page_size: pagination.page_size,
        total_count: pagination.total_count,
        total_pages: pagination.total_pages(),
        sort,
        pets: pets.iter().map(PetJson::from).collect(),
        pet_of_the_day: featured.map(|(pet, date)| FeaturedJson {
            date,
            pet: pet.map(PetJson::from),
        }),
    })
}

pub(crate) fn output_pet_json(pet: &Pet) -> String {
    to_pretty(&PetJson::from(pet))
}

pub(crate) fn output_featured_json(pet: Option<&Pet>, date: &str) -> String {
    to_pretty(&FeaturedJson {
        date,
        pet: pet.map(PetJson::from),
    })
}

pub(crate) fn output_filters_json(sort: SortOption, page: u32) -> String {
    to_pretty(&FiltersJson { sort, page })
}
