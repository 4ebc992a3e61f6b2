// Document Loading (plain or gzip-compressed files)

use crate::index::OntologyIndex;
use crate::models::IndexOptions;
use flate2::read::GzDecoder;
use onto_common::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Read a document as text, gunzipping files whose name ends in `.gz`
pub fn read_document(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut text = String::new();

    if is_gzip(path) {
        debug!(path = %path.display(), "Decompressing gzip document");
        GzDecoder::new(BufReader::new(file)).read_to_string(&mut text)?;
    } else {
        BufReader::new(file).read_to_string(&mut text)?;
    }

    info!(path = %path.display(), bytes = text.len(), "Read document");
    Ok(text)
}

/// Read and index an ontology file
pub fn load_index(path: &Path, options: &IndexOptions) -> Result<OntologyIndex> {
    let text = read_document(path)?;
    Ok(OntologyIndex::parse_with(&text, options))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
