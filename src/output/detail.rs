//! Single pet views: the detail page and the pet of the day card

use comfy_table::{Cell, Table};

use crate::core::{Pet, Species, classify};
use crate::output::format::{
    ViewOptions, create_styled_table, format_measure, header_cell, health_cell, kind_label, title,
};

fn build_detail_table(pet: &Pet, opts: ViewOptions) -> Table {
    let labels = opts.lang.labels();
    let c = opts.use_color;
    let mut table = create_styled_table();

    table.add_row(vec![header_cell(labels.name, c), Cell::new(&pet.name)]);
    table.add_row(vec![header_cell("ID", c), Cell::new(pet.id.to_string())]);
    table.add_row(vec![
        header_cell(labels.kind, c),
        Cell::new(kind_label(pet.species, opts.lang)),
    ]);
    table.add_row(vec![
        header_cell(labels.health, c),
        health_cell(classify(pet), opts),
    ]);
    table.add_row(vec![
        header_cell(labels.weight, c),
        Cell::new(format_measure(pet.weight, "g")),
    ]);
    table.add_row(vec![
        header_cell(labels.height, c),
        Cell::new(format_measure(pet.height, "cm")),
    ]);
    table.add_row(vec![
        header_cell(labels.length, c),
        Cell::new(format_measure(pet.length, "cm")),
    ]);
    if let Species::Cat { number_of_lives } = pet.species {
        table.add_row(vec![
            header_cell(labels.lives_left, c),
            Cell::new(format!("{number_of_lives} ♥")),
        ]);
    }
    if let Some(url) = &pet.photo_url {
        table.add_row(vec![header_cell(labels.photo, c), Cell::new(url)]);
    }
    table
}

pub(crate) fn print_pet_detail(pet: &Pet, opts: ViewOptions) {
    let labels = opts.lang.labels();
    println!("\n  {}\n", title(&pet.name, opts.use_color));
    println!("{}", build_detail_table(pet, opts));
    if !pet.description.is_empty() {
        println!("\n  {} {}", labels.about, pet.name);
        println!("  {}", pet.description);
    }
    println!();
}

/// Pet of the day card; `date` is the day it was picked for
pub(crate) fn print_featured(pet: Option<&Pet>, date: &str, opts: ViewOptions) {
    let labels = opts.lang.labels();
    println!(
        "\n  {} ({date})\n",
        title(labels.pet_of_the_day, opts.use_color)
    );
    match pet {
        Some(pet) => println!("{}", build_detail_table(pet, opts)),
        None => println!("  {}", labels.no_pet_of_the_day),
    }
}
