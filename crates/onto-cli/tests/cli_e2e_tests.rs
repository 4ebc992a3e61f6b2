//! End-to-end tests for the onto binary
//!
//! These tests run the compiled CLI against documents written to a temporary
//! directory:
//! - Outline rendering, expansion and search filtering
//! - Class details and label search
//! - Term tables and pathway conversion
//! - Empty and unparseable input, unknown classes

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const ONTOLOGY: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xmlns:obo="http://purl.obolibrary.org/obo/">
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0008150">
    <rdfs:label>biological_process</rdfs:label>
  </owl:Class>
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0008152">
    <rdfs:label>Metabolic Process</rdfs:label>
    <obo:IAO_0000115>The chemical reactions and pathways by which living organisms transform chemical substances.</obo:IAO_0000115>
    <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_0008150"/>
  </owl:Class>
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0009987">
    <rdfs:label>cellular process</rdfs:label>
    <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_0008150"/>
  </owl:Class>
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0006099">
    <rdfs:label>tricarboxylic acid cycle</rdfs:label>
    <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_0008152"/>
  </owl:Class>
</rdf:RDF>
"#;

const EVENTS: &str = r#"[
  {"stId": "R-HSA-1430728", "name": "Metabolism", "type": "TopLevelPathway", "children": [
    {"stId": "R-HSA-71406", "name": "Pyruvate metabolism and Citric Acid (TCA) cycle", "type": "Pathway", "children": [
      {"stId": "R-HSA-70268", "name": "Pyruvate metabolism", "type": "Pathway"},
      {"stId": "R-HSA-70971", "name": "PDH complex decarboxylates pyruvate", "type": "Reaction"}
    ]}
  ]}
]"#;

/// Helper to write a file into the test directory
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn onto() -> Command {
    let mut cmd = Command::cargo_bin("onto").expect("Failed to find onto binary");
    cmd.env("NO_COLOR", "1")
        .env_remove("ONTO_ROOT_FALLBACK_LIMIT")
        .env_remove("ONTO_SUBSET_ROOT")
        .env_remove("ONTO_PATHWAY_NAMESPACE")
        .env_remove("LOG_LEVEL");
    cmd
}

// ============================================================================
// tree
// ============================================================================

#[test]
fn test_tree_default_depth() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("tree")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("▾ biological_process"))
        .stdout(predicate::str::contains("  • cellular process"))
        .stdout(predicate::str::contains("  ▸ Metabolic Process"))
        .stdout(predicate::str::contains("tricarboxylic").not());
}

#[test]
fn test_tree_expand_by_compact_id() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("tree")
        .arg(&file)
        .arg("--expand")
        .arg("GO:0008152")
        .assert()
        .success()
        .stdout(predicate::str::contains("    • tricarboxylic acid cycle"));
}

#[test]
fn test_tree_search_keeps_matching_branches() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("tree")
        .arg(&file)
        .arg("--search")
        .arg("ACID")
        .assert()
        .success()
        .stdout(predicate::str::contains("tricarboxylic acid cycle"))
        .stdout(predicate::str::contains("cellular process").not());
}

#[test]
fn test_tree_json_format() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    let output = onto()
        .arg("tree")
        .arg(&file)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["label"], "biological_process");
    assert_eq!(json[0]["children"][0]["label"], "cellular process");
    assert_eq!(json[0]["children"][1]["label"], "Metabolic Process");
}

#[test]
fn test_tree_reads_gzip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("go.owl.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(ONTOLOGY.as_bytes()).unwrap();
    encoder.finish().unwrap();

    onto()
        .arg("tree")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("biological_process"));
}

#[test]
fn test_tree_unparseable_document_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "broken.owl", "<rdf:RDF><owl:Class>");

    onto()
        .arg("tree")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No classes found"));
}

#[test]
fn test_tree_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    onto()
        .arg("tree")
        .arg(dir.path().join("absent.owl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

// ============================================================================
// show / search
// ============================================================================

#[test]
fn test_show_class_details() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("show")
        .arg(&file)
        .arg("GO:0008152")
        .assert()
        .success()
        .stdout(predicate::str::contains("Metabolic Process"))
        .stdout(predicate::str::contains("The chemical reactions"))
        .stdout(predicate::str::contains("Parents (1)"))
        .stdout(predicate::str::contains("tricarboxylic acid cycle"));
}

#[test]
fn test_show_unknown_class_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("show")
        .arg(&file)
        .arg("GO:9999999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Class not found"));
}

#[test]
fn test_search_compact() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("search")
        .arg(&file)
        .arg("process")
        .arg("--format")
        .arg("compact")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "http://purl.obolibrary.org/obo/GO_0008150\tbiological_process\n\
             http://purl.obolibrary.org/obo/GO_0009987\tcellular process\n\
             http://purl.obolibrary.org/obo/GO_0008152\tMetabolic Process\n",
        ));
}

#[test]
fn test_search_no_results() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("search")
        .arg(&file)
        .arg("photosynthesis")
        .assert()
        .success()
        .stdout(predicate::str::contains("No classes match 'photosynthesis'"));
}

// ============================================================================
// subset / pathways
// ============================================================================

#[test]
fn test_subset_to_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);

    onto()
        .arg("subset")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("GO_ID\tGO_BP_ID\tLabel\tDefinition\tURI\n"))
        .stdout(predicate::str::contains(
            "GO:0006099\tGO:0008152\ttricarboxylic acid cycle\t\thttp://purl.obolibrary.org/obo/GO_0006099",
        ));
}

#[test]
fn test_subset_to_file_with_custom_root() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "go.owl", ONTOLOGY);
    let output = dir.path().join("terms.tsv");

    onto()
        .arg("subset")
        .arg(&file)
        .arg("--root")
        .arg("GO:0008152")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 terms"));

    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table.lines().count(), 3);
}

#[test]
fn test_subset_owl_document_with_restrictions() {
    let dir = TempDir::new().unwrap();
    let part_of = r#"
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0006121">
    <rdfs:label>electron transport, succinate to ubiquinone</rdfs:label>
    <rdfs:subClassOf>
      <owl:Restriction>
        <owl:onProperty rdf:resource="http://purl.obolibrary.org/obo/BFO_0000050"/>
        <owl:someValuesFrom rdf:resource="http://purl.obolibrary.org/obo/GO_0006099"/>
      </owl:Restriction>
    </rdfs:subClassOf>
  </owl:Class>
</rdf:RDF>"#;
    let file = write_file(&dir, "go.owl", &ONTOLOGY.replace("</rdf:RDF>", part_of));
    let table = dir.path().join("terms.tsv");
    let owl = dir.path().join("bp.owl");

    onto()
        .arg("subset")
        .arg(&file)
        .arg("--follow-restrictions")
        .arg("--output")
        .arg(&table)
        .arg("--owl")
        .arg(&owl)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 terms"))
        .stdout(predicate::str::contains("Wrote OWL subset"));

    assert!(fs::read_to_string(&table).unwrap().contains("GO:0006121\t\telectron transport"));

    onto()
        .arg("show")
        .arg(&owl)
        .arg("GO:0008152")
        .assert()
        .success()
        .stdout(predicate::str::contains("The chemical reactions"))
        .stdout(predicate::str::contains("tricarboxylic acid cycle"));
}

#[test]
fn test_tree_reads_dtd_entities() {
    let dir = TempDir::new().unwrap();
    let document = ONTOLOGY
        .replace("http://purl.obolibrary.org/obo/GO_", "&go;")
        .replace(
            "<?xml version=\"1.0\"?>",
            "<?xml version=\"1.0\"?>\n<!DOCTYPE rdf:RDF [\n  <!ENTITY go \"http://purl.obolibrary.org/obo/GO_\">\n]>",
        );
    let file = write_file(&dir, "go.owl", &document);

    onto()
        .arg("tree")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "▾ biological_process  http://purl.obolibrary.org/obo/GO_0008150",
        ))
        .stdout(predicate::str::contains("  ▸ Metabolic Process"));
}

#[test]
fn test_pathways_round_trip_through_tree() {
    let dir = TempDir::new().unwrap();
    let events = write_file(&dir, "events.json", EVENTS);
    let owl = dir.path().join("pathways.owl");

    onto()
        .arg("pathways")
        .arg(&events)
        .arg("--output")
        .arg(&owl)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 3 pathways (4 events)"));

    onto()
        .arg("tree")
        .arg(&owl)
        .arg("--depth")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("▾ Metabolism  https://reactome.org/pathway/R-HSA-1430728"))
        .stdout(predicate::str::contains("    • Pyruvate metabolism  "))
        .stdout(predicate::str::contains("PDH complex").not());
}

#[test]
fn test_pathways_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let events = write_file(&dir, "events.json", "{ not json");

    onto()
        .arg("pathways")
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_no_subcommand_is_usage_error() {
    onto().assert().code(2);
}
