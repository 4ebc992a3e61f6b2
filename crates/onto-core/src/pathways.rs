// Pathway Hierarchy to OWL
//
// Turns an events-hierarchy JSON document (nested pathways, reactions and
// other events) into an OWL class hierarchy of pathways only.

use crate::parser::{OWL_NS, RDFS_NS, RDF_NS};
use onto_common::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use tracing::{debug, info};

pub const DEFAULT_PATHWAY_NAMESPACE: &str = "https://reactome.org/pathway/";

/// Event types that become classes
const PATHWAY_TYPES: [&str; 2] = ["Pathway", "TopLevelPathway"];

// ============================================================================
// Events Hierarchy Model
// ============================================================================

/// One node of an events hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayEvent {
    /// Stable identifier (e.g., "R-HSA-1640170")
    pub st_id: Option<String>,
    pub db_id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub children: Vec<PathwayEvent>,
}

impl PathwayEvent {
    /// Missing type counts as "Pathway"
    pub fn is_pathway(&self) -> bool {
        self.event_type
            .as_deref()
            .map_or(true, |t| PATHWAY_TYPES.contains(&t))
    }

    /// Stable id, else the database id
    pub fn identifier(&self) -> Option<String> {
        self.st_id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| self.db_id.map(|id| id.to_string()))
    }
}

/// Decode an events-hierarchy document (a JSON array of top-level events)
pub fn parse_events(json: &str) -> Result<Vec<PathwayEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Number of events at every nesting level
pub fn count_events(events: &[PathwayEvent]) -> usize {
    events.len() + events.iter().map(|e| count_events(&e.children)).sum::<usize>()
}

// ============================================================================
// Pathway Ontology
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayClass {
    /// Identifier relative to the namespace
    pub id: String,
    pub label: String,
    /// Relative ids of the enclosing pathways, first encounter first
    pub parents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayOntology {
    namespace: String,
    pathways: Vec<PathwayClass>,
    positions: HashMap<String, usize>,
}

impl PathwayOntology {
    pub fn from_events(events: &[PathwayEvent], namespace: &str) -> Self {
        let mut ontology = PathwayOntology {
            namespace: namespace.to_string(),
            pathways: Vec::new(),
            positions: HashMap::new(),
        };

        for event in events {
            ontology.visit(event, None);
        }

        info!(
            events = count_events(events),
            pathways = ontology.pathways.len(),
            "Converted events hierarchy"
        );
        ontology
    }

    fn visit(&mut self, event: &PathwayEvent, parent: Option<&str>) {
        let label = event.name.as_deref().filter(|name| !name.trim().is_empty());
        let id = event.identifier();

        let (Some(label), Some(id), true) = (label, id, event.is_pathway()) else {
            // Not a class of its own; its children hang off the same parent
            if event.is_pathway() {
                debug!(st_id = ?event.st_id, "Pathway without name or identifier passed through");
            }
            for child in &event.children {
                self.visit(child, parent);
            }
            return;
        };

        let pos = match self.positions.get(&id) {
            Some(&pos) => pos,
            None => {
                self.pathways.push(PathwayClass {
                    id: id.clone(),
                    label: label.to_string(),
                    parents: Vec::new(),
                });
                self.positions.insert(id.clone(), self.pathways.len() - 1);
                self.pathways.len() - 1
            },
        };

        if let Some(parent) = parent {
            let parents = &mut self.pathways[pos].parents;
            if !parents.iter().any(|p| p == parent) {
                parents.push(parent.to_string());
            }
        }

        for child in &event.children {
            self.visit(child, Some(&id));
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn pathways(&self) -> &[PathwayClass] {
        &self.pathways
    }

    pub fn len(&self) -> usize {
        self.pathways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pathways.is_empty()
    }

    /// Full class IRI for a relative id
    pub fn iri(&self, id: &str) -> String {
        format!("{}{}", self.namespace, id)
    }

    /// Serialize as an OWL document in RDF/XML
    pub fn write_rdf_xml<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("rdf:RDF").with_attributes([
            ("xmlns:rdf", RDF_NS),
            ("xmlns:rdfs", RDFS_NS),
            ("xmlns:owl", OWL_NS),
            ("xmlns:reactome", self.namespace.as_str()),
        ])))?;

        let id_property = self.iri("id");
        xml.create_element("owl:AnnotationProperty")
            .with_attribute(("rdf:about", id_property.as_str()))
            .write_empty()?;

        for pathway in &self.pathways {
            let about = self.iri(&pathway.id);
            xml.write_event(Event::Start(
                BytesStart::new("owl:Class").with_attributes([("rdf:about", about.as_str())]),
            ))?;

            xml.create_element("rdfs:label")
                .write_text_content(BytesText::new(&pathway.label))?;
            xml.create_element("reactome:id")
                .write_text_content(BytesText::new(&pathway.id))?;

            for parent in &pathway.parents {
                let resource = self.iri(parent);
                xml.create_element("rdfs:subClassOf")
                    .with_attribute(("rdf:resource", resource.as_str()))
                    .write_empty()?;
            }

            xml.write_event(Event::End(BytesEnd::new("owl:Class")))?;
        }

        xml.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;
        xml.get_mut().write_all(b"\n")?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
