// Branch Subset Extraction
//
// Collects every class under a root term and tags each with the top-level
// branch it belongs to (the ancestor that is a direct child of the root).

use crate::index::OntologyIndex;
use crate::models::Restriction;
use crate::parser::{OBO_NS, OWL_NS, RDFS_NS, RDF_NS};
use onto_common::{OntoError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::io::Write;
use tracing::{debug, info};

/// GO "biological_process"
pub const BIOLOGICAL_PROCESS_ROOT: &str = "http://purl.obolibrary.org/obo/GO_0008150";

pub const TSV_HEADER: [&str; 5] = ["GO_ID", "GO_BP_ID", "Label", "Definition", "URI"];

/// Textual definition annotation
const DEFINITION_PROPERTY: &str = "http://purl.obolibrary.org/obo/IAO_0000115";

/// How members are collected below the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubsetOptions {
    /// Also take in classes that only reach the root through a restriction
    /// (e.g., `part_of some` a member)
    pub follow_restrictions: bool,
}

/// One row of the subset table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsetTerm {
    /// Compact id (e.g., "GO:0006915")
    pub id: String,
    /// Compact id of the root's direct child this term falls under
    pub branch: Option<String>,
    pub label: String,
    /// `rdfs:comment`; empty when absent
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub definition: Option<String>,
    pub uri: String,
    /// Is-a parents inside the subset
    pub parents: Vec<String>,
    /// Restrictions whose filler is inside the subset
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<Restriction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchSubset {
    pub root: String,
    pub terms: Vec<SubsetTerm>,
}

impl BranchSubset {
    /// Collect `root_id` and all its descendants
    pub fn extract(index: &OntologyIndex, root_id: &str) -> Result<Self> {
        Self::extract_with(index, root_id, &SubsetOptions::default())
    }

    pub fn extract_with(index: &OntologyIndex, root_id: &str, options: &SubsetOptions) -> Result<Self> {
        let root = index
            .get(root_id)
            .ok_or_else(|| OntoError::unknown_class(root_id))?;

        let below = if options.follow_restrictions {
            index.descendants_with_restrictions(root_id)
        } else {
            index.descendants_of(root_id)
        };
        let members: Vec<_> = std::iter::once(root).chain(below).collect();
        let uris: HashSet<&str> = members.iter().map(|class| class.id.as_str()).collect();

        let mut terms: Vec<SubsetTerm> = members
            .iter()
            .map(|class| SubsetTerm {
                id: display_id(&class.id),
                branch: branch_of(index, &class.id, root_id).map(display_id),
                label: class.label.clone(),
                description: class.description.clone(),
                definition: class.definition.clone(),
                uri: class.id.clone(),
                parents: class
                    .parents
                    .iter()
                    .filter(|p| uris.contains(p.as_str()))
                    .cloned()
                    .collect(),
                restrictions: class
                    .restrictions
                    .iter()
                    .filter(|r| uris.contains(r.target.as_str()))
                    .cloned()
                    .collect(),
            })
            .collect();

        terms.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.uri.cmp(&b.uri)));

        let branches: HashSet<&str> = terms.iter().filter_map(|t| t.branch.as_deref()).collect();
        info!(
            root = %root_id,
            terms = terms.len(),
            branches = branches.len(),
            "Extracted branch subset"
        );

        Ok(BranchSubset {
            root: root_id.to_string(),
            terms,
        })
    }

    /// Write the subset as a tab-separated table with a header row
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<()> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        tsv.write_record(TSV_HEADER)?;
        for term in &self.terms {
            let label = single_line(&term.label);
            let definition = single_line(term.definition.as_deref().unwrap_or_default());
            tsv.write_record([
                term.id.as_str(),
                term.branch.as_deref().unwrap_or_default(),
                label.as_str(),
                definition.as_str(),
                term.uri.as_str(),
            ])?;
        }
        tsv.flush()?;

        Ok(())
    }

    /// Write the members as an OWL document in RDF/XML
    ///
    /// Keeps each member's label, comment and definition, and only the
    /// subclass edges and restrictions that stay inside the subset.
    pub fn write_rdf_xml<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("rdf:RDF").with_attributes([
            ("xmlns:rdf", RDF_NS),
            ("xmlns:rdfs", RDFS_NS),
            ("xmlns:owl", OWL_NS),
            ("xmlns:obo", OBO_NS),
        ])))?;

        xml.create_element("owl:AnnotationProperty")
            .with_attribute(("rdf:about", DEFINITION_PROPERTY))
            .write_empty()?;

        for term in &self.terms {
            xml.write_event(Event::Start(
                BytesStart::new("owl:Class").with_attributes([("rdf:about", term.uri.as_str())]),
            ))?;

            xml.create_element("rdfs:label")
                .write_text_content(BytesText::new(&term.label))?;
            if !term.description.is_empty() {
                xml.create_element("rdfs:comment")
                    .write_text_content(BytesText::new(&term.description))?;
            }
            if let Some(definition) = &term.definition {
                xml.create_element("obo:IAO_0000115")
                    .write_text_content(BytesText::new(definition))?;
            }

            for parent in &term.parents {
                xml.create_element("rdfs:subClassOf")
                    .with_attribute(("rdf:resource", parent.as_str()))
                    .write_empty()?;
            }

            for restriction in &term.restrictions {
                xml.write_event(Event::Start(BytesStart::new("rdfs:subClassOf")))?;
                xml.write_event(Event::Start(BytesStart::new("owl:Restriction")))?;
                if let Some(property) = &restriction.property {
                    xml.create_element("owl:onProperty")
                        .with_attribute(("rdf:resource", property.as_str()))
                        .write_empty()?;
                }
                xml.create_element("owl:someValuesFrom")
                    .with_attribute(("rdf:resource", restriction.target.as_str()))
                    .write_empty()?;
                xml.write_event(Event::End(BytesEnd::new("owl:Restriction")))?;
                xml.write_event(Event::End(BytesEnd::new("rdfs:subClassOf")))?;
            }

            xml.write_event(Event::End(BytesEnd::new("owl:Class")))?;
        }

        xml.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;
        xml.get_mut().write_all(b"\n")?;

        debug!(terms = self.terms.len(), "Wrote subset document");
        Ok(())
    }
}

/// Compact identifier: last path segment with every `_` turned into `:`
///
/// "http://purl.obolibrary.org/obo/GO_0008150" -> "GO:0008150"
pub fn display_id(id: &str) -> String {
    let segment = id.rsplit('/').next().unwrap_or(id);
    segment.replace('_', ":")
}

/// Breadth-first walk up from `id` to the first class that sits directly
/// under `root_id`
fn branch_of<'a>(index: &'a OntologyIndex, id: &'a str, root_id: &str) -> Option<&'a str> {
    if id == root_id {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([id]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let Some(class) = index.get(current) else {
            continue;
        };
        if class.parents.contains(root_id) {
            return Some(class.id.as_str());
        }
        queue.extend(class.parents.iter().map(String::as_str));
    }

    None
}

fn single_line(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

// ============================================================================
// Tests
// ============================================================================
