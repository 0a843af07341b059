mod detail;
mod format;
mod json;
mod table;

pub(crate) use detail::{print_featured, print_pet_detail};
pub(crate) use format::ViewOptions;
pub(crate) use json::{
    output_featured_json, output_filters_json, output_listing_json, output_pet_json,
};
pub(crate) use table::{ListingView, print_pet_table};
