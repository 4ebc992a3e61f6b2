//! `onto show` command implementation

use crate::error::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use onto_core::{IndexOptions, OntologyClass, OntologyIndex};
use std::path::Path;

/// Run `onto show`
pub fn run(file: &Path, index_options: &IndexOptions, id: &str) -> Result<()> {
    let index = super::load_index(file, index_options)?;
    let class = super::resolve_class(&index, id)?;

    print!("{}", render_details(&index, class));
    Ok(())
}

/// Details panel: class fields, then parents and children
pub fn render_details(index: &OntologyIndex, class: &OntologyClass) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n", "═".repeat(60).blue()));
    out.push_str(&format!("{}\n", format!("  {}", class.label).bold()));
    out.push_str(&format!("{}\n", "═".repeat(60).blue()));
    out.push('\n');

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.add_row(vec!["ID", class.id.as_str()]);
    table.add_row(vec!["Label", class.label.as_str()]);
    if !class.description.is_empty() {
        table.add_row(vec!["Description", class.description.as_str()]);
    }
    if let Some(ref definition) = class.definition {
        table.add_row(vec!["Definition", definition.as_str()]);
    }
    out.push_str(&format!("{}\n\n", table));

    // Parents may name classes the document never declares
    let declared_parents = index.parents_of(&class.id);
    let undeclared: Vec<&String> = class.parents.iter().filter(|p| !index.contains(p)).collect();

    out.push_str(&format!("{}\n", format!("Parents ({})", class.parents.len()).bold()));
    for parent in &declared_parents {
        out.push_str(&format!("  {}  {}\n", parent.label, parent.id.dimmed()));
    }
    for parent in undeclared {
        out.push_str(&format!("  {}  {}\n", parent, "(not declared)".dimmed()));
    }
    out.push('\n');

    let children = index.children_of(&class.id);
    out.push_str(&format!("{}\n", format!("Children ({})", children.len()).bold()));
    for child in &children {
        out.push_str(&format!("  {}  {}\n", child.label, child.id.dimmed()));
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_details_lists_relations() {
        colored::control::set_override(false);
        let index = onto_core::parse(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                        xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
                        xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="p"><rdfs:label>Parent</rdfs:label></owl:Class>
  <owl:Class rdf:about="x">
    <rdfs:label>Middle</rdfs:label>
    <rdfs:comment>In between.</rdfs:comment>
    <rdfs:subClassOf rdf:resource="p"/>
    <rdfs:subClassOf rdf:resource="http://elsewhere/Q"/>
  </owl:Class>
  <owl:Class rdf:about="c"><rdfs:label>Child</rdfs:label><rdfs:subClassOf rdf:resource="x"/></owl:Class>
</rdf:RDF>"#,
        );

        let text = render_details(&index, index.get("x").unwrap());
        assert!(text.contains("In between."));
        assert!(text.contains("Parents (2)"));
        assert!(text.contains("  Parent  p"));
        assert!(text.contains("http://elsewhere/Q  (not declared)"));
        assert!(text.contains("Children (1)"));
        assert!(text.contains("  Child  c"));
        assert!(!text.contains("Definition"));
    }
}
