//! `onto search` command implementation
//!
//! Lists classes whose own label contains the term. Use `onto tree --search`
//! to see where the hits sit in the hierarchy.

use crate::error::Result;
use crate::ListFormat;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use onto_core::{IndexOptions, OntologyClass};
use std::path::Path;
use tracing::info;

/// Run `onto search`
pub fn run(file: &Path, index_options: &IndexOptions, term: &str, format: ListFormat) -> Result<()> {
    let index = super::load_index(file, index_options)?;

    if index.is_empty() {
        match format {
            ListFormat::Json => println!("[]"),
            _ => super::print_no_classes(file),
        }
        return Ok(());
    }

    let hits = index.search(term);
    info!(term = %term, hits = hits.len(), "Search complete");

    match format {
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
        _ if hits.is_empty() => println!("{}", format!("No classes match '{}'", term).bold().red()),
        ListFormat::Compact => print!("{}", render_compact(&hits)),
        ListFormat::Table => {
            println!();
            println!("{}", render_table(&hits));
            println!();
            println!("Found {} of {} classes", hits.len(), index.len());
        },
    }

    Ok(())
}

/// One `id<TAB>label` line per class
pub fn render_compact(hits: &[&OntologyClass]) -> String {
    hits.iter()
        .map(|class| format!("{}\t{}\n", class.id, class.label))
        .collect()
}

pub fn render_table(hits: &[&OntologyClass]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Label", "ID", "Children", "Description"]);

    for class in hits {
        let description = if class.description.is_empty() {
            class
                .definition
                .as_deref()
                .map(|d| super::truncate_string(d, 50))
                .unwrap_or_else(|| "-".to_string())
        } else {
            super::truncate_string(&class.description, 50)
        };

        table.add_row(vec![
            class.label.clone(),
            class.id.clone(),
            class.children.len().to_string(),
            description,
        ]);
    }

    table
}
