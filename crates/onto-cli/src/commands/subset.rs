//! `onto subset` command implementation

use crate::error::Result;
use colored::Colorize;
use onto_core::subset::{BranchSubset, SubsetOptions};
use onto_core::IndexOptions;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Run `onto subset`
pub fn run(
    file: &Path,
    index_options: &IndexOptions,
    root: &str,
    subset_options: &SubsetOptions,
    output: Option<&Path>,
    owl: Option<&Path>,
) -> Result<()> {
    let index = super::load_index(file, index_options)?;
    let root = super::resolve_class(&index, root)?;
    let subset = BranchSubset::extract_with(&index, &root.id, subset_options)?;

    let mut out = super::open_output(output)?;
    subset.write_tsv(&mut out)?;
    out.flush()?;

    info!(root = %root.id, terms = subset.terms.len(), "Wrote term table");
    if let Some(path) = output {
        println!(
            "{} Wrote {} terms under '{}' to {}",
            "✓".green(),
            subset.terms.len(),
            root.label,
            path.display()
        );
    }

    if let Some(path) = owl {
        let mut document = BufWriter::new(File::create(path)?);
        subset.write_rdf_xml(&mut document)?;
        document.flush()?;

        info!(path = %path.display(), "Wrote subset document");
        // stdout may be carrying the table
        if output.is_some() {
            println!("{} Wrote OWL subset to {}", "✓".green(), path.display());
        }
    }

    Ok(())
}
