use comfy_table::{Cell, Table};

use crate::core::{Pagination, Pet, SortOption, classify};
use crate::output::format::{
    ViewOptions, create_styled_table, format_measure, header_cell, health_cell, kind_label,
    right_cell, title,
};

/// Everything the catalog page shows besides the featured pet
#[derive(Debug, Clone, Copy)]
pub(crate) struct ListingView<'a> {
    pub(crate) pets: &'a [Pet],
    pub(crate) pagination: Pagination,
    pub(crate) sort: SortOption,
    pub(crate) has_active_filters: bool,
}

fn build_pet_table(pets: &[Pet], opts: ViewOptions) -> Table {
    let labels = opts.lang.labels();
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell(labels.name, c),
        header_cell(labels.kind, c),
        header_cell(labels.weight, c),
        header_cell(labels.height, c),
        header_cell(labels.length, c),
        header_cell(labels.health, c),
    ]);

    for pet in pets {
        table.add_row(vec![
            right_cell(&pet.id.to_string()),
            Cell::new(&pet.name),
            Cell::new(kind_label(pet.species, opts.lang)),
            right_cell(&format_measure(pet.weight, "g")),
            right_cell(&format_measure(pet.height, "cm")),
            right_cell(&format_measure(pet.length, "cm")),
            health_cell(classify(pet), opts),
        ]);
    }
    table
}

/// "Showing 11 - 20 of 42 pets" plus navigation hints, empty when there is
/// nothing to show
pub(crate) fn pagination_summary(pagination: &Pagination, opts: ViewOptions) -> Vec<String> {
    if pagination.total_count == 0 {
        return Vec::new();
    }
    let labels = opts.lang.labels();
    let (start, end) = pagination.showing();
    let mut lines = vec![format!(
        "{} {} - {} {} {} {} ({} {}/{})",
        labels.showing,
        start,
        end,
        labels.of,
        pagination.total_count,
        labels.pets,
        labels.page,
        pagination.page,
        pagination.total_pages()
    )];
    if pagination.is_last_page() {
        lines.push(labels.last_page.to_string());
    }

    let hints: Vec<&str> = [
        pagination.has_prev().then_some(labels.prev_hint),
        pagination.has_next().then_some(labels.next_hint),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !hints.is_empty() {
        lines.push(hints.join("  |  "));
    }
    lines
}

pub(crate) fn print_pet_table(view: &ListingView<'_>, opts: ViewOptions) {
    let labels = opts.lang.labels();
    println!(
        "\n  {}  ({} {})",
        title(labels.our_pets, opts.use_color),
        labels.sorted_by,
        view.sort
    );

    if view.pets.is_empty() {
        println!("\n  {}\n", labels.no_pets_found);
    } else {
        println!("{}", build_pet_table(view.pets, opts));
        for line in pagination_summary(&view.pagination, opts) {
            println!("  {line}");
        }
    }

    if view.has_active_filters {
        println!("  ({})", labels.reset_hint);
    }
    println!();
}
