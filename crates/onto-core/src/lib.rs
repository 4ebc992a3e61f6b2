//! Ontology Core Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Loads OWL class hierarchies serialized as RDF/XML into an immutable
//! [`OntologyIndex`] and answers the queries a tree view needs.
//!
//! - **Loading**: [`parse`], [`OntologyIndex::parse_with`], [`source::load_index`]
//! - **Hierarchy**: roots, children, parents, descendants
//! - **Search**: [`OntologyIndex::matches_search`], [`OntologyIndex::visible_roots`]
//! - **Subsets**: [`subset::BranchSubset`] term tables under a root class
//! - **Pathways**: [`pathways::PathwayOntology`] events hierarchy to OWL
//!
//! # Example
//!
//! ```
//! let index = onto_core::parse(
//!     r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                 xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
//!                 xmlns:owl="http://www.w3.org/2002/07/owl#">
//!          <owl:Class rdf:about="http://example.org/A"><rdfs:label>Animal</rdfs:label></owl:Class>
//!          <owl:Class rdf:about="http://example.org/B">
//!            <rdfs:label>Bird</rdfs:label>
//!            <rdfs:subClassOf rdf:resource="http://example.org/A"/>
//!          </owl:Class>
//!        </rdf:RDF>"#,
//! );
//!
//! assert_eq!(index.roots()[0].label, "Animal");
//! assert_eq!(index.children_of("http://example.org/A")[0].label, "Bird");
//! assert!(index.matches_search("http://example.org/A", "BIRD"));
//! ```

pub mod collation;
pub mod index;
pub mod models;
pub mod parser;
pub mod pathways;
pub mod source;
pub mod subset;

pub use index::OntologyIndex;
pub use models::{
    ClassDeclaration, IndexOptions, OntologyClass, Restriction, RestrictionEdge, SubclassEdge,
    DEFAULT_ROOT_FALLBACK_LIMIT,
};
pub use parser::{ParsedDocument, RdfXmlParser};

/// Parse an RDF/XML document with default [`IndexOptions`]
pub fn parse(content: &str) -> OntologyIndex {
    OntologyIndex::parse(content)
}
