// Ontology Data Models

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Ontology Class
// ============================================================================

/// One node of the class hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyClass {
    /// Identifier taken from `rdf:about` or `rdf:ID`
    /// (e.g., "http://purl.obolibrary.org/obo/GO_0008150")
    pub id: String,

    /// Display name (e.g., "biological_process")
    pub label: String,

    /// Free-text comment; empty when the document has none
    pub description: String,

    /// Textual definition (`obo:IAO_0000115`), as used by OBO ontologies
    pub definition: Option<String>,

    /// Identifiers of the direct subclasses
    pub children: BTreeSet<String>,

    /// Identifiers this class directly specializes; may name classes the
    /// document never declares
    pub parents: BTreeSet<String>,

    /// Existential restrictions on this class (e.g., part_of some X)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub restrictions: BTreeSet<Restriction>,

    /// Classes carrying a restriction whose filler is this class
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub restricted_by: BTreeSet<String>,
}

impl OntologyClass {
    /// Derive a display label from an identifier
    ///
    /// Takes the last non-empty segment after splitting on `#` and `/`.
    /// Example: "http://purl.obolibrary.org/obo/GO_0008150" -> "GO_0008150"
    pub fn fallback_label(id: &str) -> String {
        id.split(['#', '/'])
            .filter(|segment| !segment.is_empty())
            .last()
            .unwrap_or(id)
            .to_string()
    }

    /// Build a class from a parsed declaration, with no edges yet
    pub(crate) fn from_declaration(declaration: ClassDeclaration) -> Self {
        let label = declaration
            .label
            .unwrap_or_else(|| Self::fallback_label(&declaration.id));

        OntologyClass {
            id: declaration.id,
            label,
            description: declaration.description.unwrap_or_default(),
            definition: declaration.definition,
            children: BTreeSet::new(),
            parents: BTreeSet::new(),
            restrictions: BTreeSet::new(),
            restricted_by: BTreeSet::new(),
        }
    }

    /// True when the class has no declared parent at all
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

// ============================================================================
// Parsed Document Pieces
// ============================================================================

/// A class declaration as found in the document, before indexing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub id: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub definition: Option<String>,
}

impl ClassDeclaration {
    pub fn new(id: impl Into<String>) -> Self {
        ClassDeclaration {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Fill fields still missing here from a later declaration of the same id
    pub fn absorb(&mut self, other: ClassDeclaration) {
        if self.label.is_none() {
            self.label = other.label;
        }
        if self.description.is_none() {
            self.description = other.description;
        }
        if self.definition.is_none() {
            self.definition = other.definition;
        }
    }
}

/// A directed is-a edge (child specializes parent)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubclassEdge {
    /// Subject (child) identifier
    pub child: String,

    /// Object (parent) identifier
    pub parent: String,
}

impl SubclassEdge {
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        SubclassEdge {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

/// `rdfs:subClassOf [ owl:onProperty P ; owl:someValuesFrom T ]`
///
/// Not an is-a edge: it never shows up in `parents` or `children`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Restriction {
    /// Property IRI (e.g., "http://purl.obolibrary.org/obo/BFO_0000050")
    pub property: Option<String>,

    /// Filler class IRI
    pub target: String,
}

/// A restriction found under a class declaration, before indexing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestrictionEdge {
    pub child: String,
    pub restriction: Restriction,
}

impl RestrictionEdge {
    pub fn new(child: impl Into<String>, property: Option<String>, target: impl Into<String>) -> Self {
        RestrictionEdge {
            child: child.into(),
            restriction: Restriction {
                property,
                target: target.into(),
            },
        }
    }
}

// ============================================================================
// Index Options
// ============================================================================

/// Default number of classes shown as roots when no class lacks a parent
pub const DEFAULT_ROOT_FALLBACK_LIMIT: usize = 10;

/// Tunables for building an [`crate::OntologyIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// How many declared classes (in declaration order) stand in for roots
    /// when every class has a parent
    pub root_fallback_limit: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            root_fallback_limit: DEFAULT_ROOT_FALLBACK_LIMIT,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_label_uses_last_segment() {
        assert_eq!(
            OntologyClass::fallback_label("http://purl.obolibrary.org/obo/GO_0008150"),
            "GO_0008150"
        );
        assert_eq!(
            OntologyClass::fallback_label("http://example.org/onto#Metabolism"),
            "Metabolism"
        );
        assert_eq!(OntologyClass::fallback_label("https://reactome.org/pathway/"), "pathway");
        assert_eq!(OntologyClass::fallback_label("LocalName"), "LocalName");
    }

    #[test]
    fn test_fallback_label_without_segments_is_raw_id() {
        assert_eq!(OntologyClass::fallback_label("#/"), "#/");
        assert_eq!(OntologyClass::fallback_label("///"), "///");
    }

    #[test]
    fn test_from_declaration_defaults() {
        let class = OntologyClass::from_declaration(ClassDeclaration::new("http://x.org/a#B"));
        assert_eq!(class.label, "B");
        assert_eq!(class.description, "");
        assert!(class.definition.is_none());
        assert!(class.children.is_empty());
        assert!(class.restrictions.is_empty());
        assert!(class.is_root());
    }

    #[test]
    fn test_absorb_keeps_first_values() {
        let mut first = ClassDeclaration::new("A");
        first.label = Some("Alpha".to_string());

        let mut second = ClassDeclaration::new("A");
        second.label = Some("Other".to_string());
        second.description = Some("from the second declaration".to_string());

        first.absorb(second);
        assert_eq!(first.label.as_deref(), Some("Alpha"));
        assert_eq!(first.description.as_deref(), Some("from the second declaration"));
    }

    #[test]
    fn test_index_options_default() {
        assert_eq!(IndexOptions::default().root_fallback_limit, 10);
    }
}
