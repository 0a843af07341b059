use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{HealthStatus, Species};
use crate::i18n::Lang;

/// Rendering options shared by every table
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewOptions {
    pub(crate) use_color: bool,
    pub(crate) lang: Lang,
}

/// Measurement without a trailing ".0" for whole numbers
pub(super) fn format_measure(value: f64, unit: &str) -> String {
    format!("{value} {unit}")
}

pub(super) fn kind_label(species: Species, lang: Lang) -> &'static str {
    let labels = lang.labels();
    match species {
        Species::Cat { .. } => labels.cat,
        Species::Dog => labels.dog,
    }
}

pub(super) fn health_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Unhealthy => Color::Red,
        HealthStatus::Healthy => Color::Green,
        HealthStatus::VeryHealthy => Color::Blue,
    }
}

pub(super) fn health_cell(status: HealthStatus, opts: ViewOptions) -> Cell {
    let color = opts.use_color.then(|| health_color(status));
    styled_cell(status.label(opts.lang), color, opts.use_color)
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Bold title line, cyan when colors are on
pub(super) fn title(text: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[1;36m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
