//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod pathways;
pub mod search;
pub mod show;
pub mod subset;
pub mod tree;

use crate::error::{CliError, Result};
use colored::Colorize;
use onto_core::subset::display_id;
use onto_core::{IndexOptions, OntologyClass, OntologyIndex};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Load an ontology file into an index
pub(crate) fn load_index(file: &Path, options: &IndexOptions) -> Result<OntologyIndex> {
    Ok(onto_core::source::load_index(file, options)?)
}

/// Look up a class by full IRI, compact id ("GO:0008150") or local name ("GO_0008150")
pub fn resolve_class<'a>(index: &'a OntologyIndex, id: &str) -> Result<&'a OntologyClass> {
    if let Some(class) = index.get(id) {
        return Ok(class);
    }

    index
        .classes()
        .iter()
        .find(|class| display_id(&class.id) == id || OntologyClass::fallback_label(&class.id) == id)
        .ok_or_else(|| CliError::class_not_found(id))
}

/// Notice for documents that yielded nothing
pub(crate) fn print_no_classes(file: &Path) {
    println!("{} No classes found in {}", "!".yellow().bold(), file.display());
}

/// Buffered writer for a file, or stdout when no path is given
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

/// Shorten text for table cells
pub(crate) fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
