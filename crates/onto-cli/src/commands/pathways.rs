//! `onto pathways` command implementation
//!
//! Works on an events-hierarchy file already on disk.

use crate::error::Result;
use colored::Colorize;
use onto_core::pathways::{count_events, parse_events, PathwayOntology};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run `onto pathways`
pub fn run(file: &Path, namespace: &str, output: Option<&Path>) -> Result<()> {
    let json = onto_core::source::read_document(file)?;
    let events = parse_events(&json)?;
    info!(
        top_level = events.len(),
        total = count_events(&events),
        "Loaded events hierarchy"
    );

    let ontology = PathwayOntology::from_events(&events, namespace);

    let mut out = super::open_output(output)?;
    ontology.write_rdf_xml(&mut out)?;
    out.flush()?;

    if let Some(path) = output {
        println!(
            "{} Converted {} pathways ({} events) to {}",
            "✓".green(),
            ontology.len(),
            count_events(&events),
            path.display()
        );
    }

    Ok(())
}
