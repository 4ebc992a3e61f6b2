// OWL RDF/XML Parser (class declarations, labels, comments, subclass edges)

use crate::models::{ClassDeclaration, RestrictionEdge, SubclassEdge};
use onto_common::{OntoError, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::reader::NsReader;
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, info, warn};

// ============================================================================
// Vocabulary
// ============================================================================

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const OBO_NS: &str = "http://purl.obolibrary.org/obo/";

/// Elements the parser cares about, identified by resolved namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Class,
    Label,
    Comment,
    Definition,
    SubClassOf,
    Restriction,
    OnProperty,
    /// `owl:someValuesFrom` or `owl:allValuesFrom`
    Filler,
    Other,
}

impl Term {
    fn of<R>(reader: &NsReader<R>, name: QName<'_>) -> Self {
        let (namespace, local) = reader.resolve_element(name);
        let ResolveResult::Bound(Namespace(ns)) = namespace else {
            return Term::Other;
        };

        match local.as_ref() {
            b"Class" if ns == OWL_NS.as_bytes() || ns == RDFS_NS.as_bytes() => Term::Class,
            b"label" if ns == RDFS_NS.as_bytes() => Term::Label,
            b"comment" if ns == RDFS_NS.as_bytes() => Term::Comment,
            b"subClassOf" if ns == RDFS_NS.as_bytes() => Term::SubClassOf,
            b"IAO_0000115" if ns == OBO_NS.as_bytes() => Term::Definition,
            b"Restriction" if ns == OWL_NS.as_bytes() => Term::Restriction,
            b"onProperty" if ns == OWL_NS.as_bytes() => Term::OnProperty,
            b"someValuesFrom" | b"allValuesFrom" if ns == OWL_NS.as_bytes() => Term::Filler,
            _ => Term::Other,
        }
    }
}

/// The `rdf:` attributes of one element
#[derive(Debug, Default)]
struct RdfAttributes {
    about: Option<String>,
    id: Option<String>,
    resource: Option<String>,
}

impl RdfAttributes {
    /// Values whose entity references cannot be resolved are left unset
    fn read<R>(reader: &NsReader<R>, element: &BytesStart<'_>, entities: &Entities) -> Result<Self> {
        let mut attrs = RdfAttributes::default();

        for attr in element.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let (namespace, local) = reader.resolve_attribute(attr.key);

            // Unprefixed about/ID/resource is legacy RDF/XML but still seen in the wild
            let in_rdf = match namespace {
                ResolveResult::Bound(Namespace(ns)) => ns == RDF_NS.as_bytes(),
                ResolveResult::Unbound => true,
                ResolveResult::Unknown(_) => false,
            };
            if !in_rdf {
                continue;
            }

            let slot = match local.as_ref() {
                b"about" => &mut attrs.about,
                b"ID" => &mut attrs.id,
                b"resource" => &mut attrs.resource,
                _ => continue,
            };
            match attr.unescape_value_with(|name| entities.resolve(name)) {
                Ok(value) => *slot = Some(value.into_owned()),
                Err(e) => debug!(error = %e, "Ignoring rdf attribute with an unresolvable entity reference"),
            }
        }

        Ok(attrs)
    }

    /// Class identity: `rdf:about` first, then `rdf:ID`
    fn identity(self) -> Option<String> {
        self.about
            .filter(|v| !v.trim().is_empty())
            .or(self.id.filter(|v| !v.trim().is_empty()))
    }
}

/// General entities declared in the document's internal DTD subset
///
/// OWL tools write `<!ENTITY obo "http://purl.obolibrary.org/obo/">` and
/// then `rdf:about="&obo;GO_0008150"`.
#[derive(Debug, Default)]
struct Entities {
    declared: HashMap<String, String>,
}

impl Entities {
    /// Collect `<!ENTITY name "value">` declarations from a DOCTYPE body
    ///
    /// Parameter entities and external (SYSTEM/PUBLIC) entities are ignored.
    /// The first declaration of a name is binding.
    fn declare_from(&mut self, doctype: &str) {
        const MARKER: &str = "<!ENTITY";

        let mut rest = doctype;
        while let Some(start) = rest.find(MARKER) {
            rest = rest[start + MARKER.len()..].trim_start();
            if rest.starts_with('%') {
                continue;
            }

            let Some(name_end) = rest.find(char::is_whitespace) else {
                break;
            };
            let name = &rest[..name_end];
            rest = rest[name_end..].trim_start();

            let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
                continue;
            };
            let Some(len) = rest[1..].find(quote) else {
                break;
            };
            let value = &rest[1..1 + len];
            rest = &rest[1 + len + 1..];

            let value = self.expand(value);
            self.declared.entry(name.to_string()).or_insert(value);
        }

        debug!(entities = self.declared.len(), "Read DTD entity declarations");
    }

    /// Expand references to entities declared earlier; raw text when that fails
    fn expand(&self, value: &str) -> String {
        quick_xml::escape::unescape_with(value, |name| self.resolve(name))
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string())
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.declared.get(name).map(String::as_str))
    }
}

// ============================================================================
// Parsed Document
// ============================================================================

/// Everything the loader extracts from one document
///
/// Declarations are in document order and may repeat an id; edges may repeat.
/// Merging happens when the index is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub declarations: Vec<ClassDeclaration>,
    pub edges: Vec<SubclassEdge>,
    /// Restrictions under `rdfs:subClassOf`, kept apart from the is-a edges
    pub restrictions: Vec<RestrictionEdge>,
}

// ============================================================================
// RDF/XML Parser
// ============================================================================

pub struct RdfXmlParser;

impl RdfXmlParser {
    /// Parse an OWL document serialized as RDF/XML
    ///
    /// Never fails. Declarations without an identifier are skipped, and a
    /// document that is not well-formed XML yields an empty result.
    pub fn parse(content: &str) -> ParsedDocument {
        match Self::scan(content) {
            Ok(parsed) => {
                info!(
                    "Parsed {} class declarations, {} subclass edges and {} restrictions",
                    parsed.declarations.len(),
                    parsed.edges.len(),
                    parsed.restrictions.len()
                );
                parsed
            },
            Err(e) => {
                warn!(error = %e, "Document is not well-formed RDF/XML, nothing indexed");
                ParsedDocument::default()
            },
        }
    }

    fn scan(content: &str) -> Result<ParsedDocument> {
        let mut reader = NsReader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut scan = Scan::default();
        let mut entities = Entities::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let term = Term::of(&reader, e.name());
                    let attrs = RdfAttributes::read(&reader, &e, &entities)?;
                    scan.open(term, attrs, false)?;
                },
                Event::Empty(e) => {
                    let term = Term::of(&reader, e.name());
                    let attrs = RdfAttributes::read(&reader, &e, &entities)?;
                    scan.open(term, attrs, true)?;
                },
                Event::End(_) => scan.close()?,
                Event::Text(t) => match t.unescape_with(|name| entities.resolve(name)) {
                    Ok(text) => scan.text(&text)?,
                    Err(e) => scan.unreadable_text(e)?,
                },
                Event::CData(c) => scan.text(&String::from_utf8_lossy(&c))?,
                Event::DocType(d) => entities.declare_from(&String::from_utf8_lossy(&d)),
                Event::Eof => break,
                _ => {}, // declarations, comments, processing instructions
            }
        }

        scan.finish()
    }
}

// ============================================================================
// Scan State
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Field {
    Label,
    Description,
    Definition,
}

/// One open element
#[derive(Debug, Clone, Copy)]
struct Frame {
    term: Term,
    /// Declaration this element belongs to: the class itself for a class
    /// element, the enclosing class for a direct subclass-of child
    owner: Option<usize>,
}

/// Text being collected for a label, comment or definition
#[derive(Debug)]
struct Capture {
    owner: usize,
    field: Field,
    depth: usize,
    text: String,
    /// Part of the text could not be unescaped; the field is dropped
    unreadable: bool,
}

/// An `owl:Restriction` directly under a class's `rdfs:subClassOf`
#[derive(Debug)]
struct PendingRestriction {
    owner: usize,
    depth: usize,
    property: Option<String>,
    target: Option<String>,
}

#[derive(Debug, Default)]
struct Scan {
    declarations: Vec<ClassDeclaration>,
    edges: Vec<SubclassEdge>,
    restrictions: Vec<RestrictionEdge>,
    elements: Vec<Frame>,
    capture: Option<Capture>,
    restriction: Option<PendingRestriction>,
    saw_root: bool,
    skipped: usize,
}

impl Scan {
    fn open(&mut self, term: Term, attrs: RdfAttributes, empty: bool) -> Result<()> {
        if self.elements.is_empty() {
            if self.saw_root {
                return Err(OntoError::parse("more than one root element"));
            }
            self.saw_root = true;
        }

        let parent = self.elements.last().copied();
        let owned_by_class = match parent {
            Some(Frame {
                term: Term::Class,
                owner: Some(idx),
            }) => Some(idx),
            _ => None,
        };

        let owner = match term {
            Term::Class => self.declare(attrs, parent),
            Term::SubClassOf => {
                if let (Some(idx), Some(parent_id)) = (owned_by_class, attrs.resource) {
                    let child_id = self.declarations[idx].id.clone();
                    self.edges.push(SubclassEdge::new(child_id, parent_id));
                }
                owned_by_class
            },
            Term::OnProperty | Term::Filler => {
                let depth = self.elements.len();
                if let Some(pending) = self.restriction.as_mut().filter(|r| r.depth == depth) {
                    let slot = match term {
                        Term::OnProperty => &mut pending.property,
                        _ => &mut pending.target,
                    };
                    if slot.is_none() {
                        *slot = attrs.resource;
                    }
                }
                None
            },
            _ => None,
        };

        if empty {
            return Ok(());
        }

        self.elements.push(Frame { term, owner });

        let restriction_owner = match parent {
            Some(Frame {
                term: Term::SubClassOf,
                owner,
            }) if term == Term::Restriction && self.restriction.is_none() => owner,
            _ => None,
        };
        if let Some(owner) = restriction_owner {
            self.restriction = Some(PendingRestriction {
                owner,
                depth: self.elements.len(),
                property: None,
                target: None,
            });
        }

        let field = match term {
            Term::Label => Some(Field::Label),
            Term::Comment => Some(Field::Description),
            Term::Definition => Some(Field::Definition),
            _ => None,
        };
        if let (Some(field), Some(owner), None) = (field, owned_by_class, &self.capture) {
            self.capture = Some(Capture {
                owner,
                field,
                depth: self.elements.len(),
                text: String::new(),
                unreadable: false,
            });
        }

        Ok(())
    }

    /// Record a class element, returning its declaration slot
    fn declare(&mut self, attrs: RdfAttributes, parent: Option<Frame>) -> Option<usize> {
        let nested_in_subclass_of = match parent {
            Some(Frame {
                term: Term::SubClassOf,
                owner,
            }) => Some(owner),
            _ => None,
        };

        let Some(id) = attrs.identity() else {
            // Anonymous class expressions inside subClassOf are expected in OWL
            if nested_in_subclass_of.is_none() {
                self.skipped += 1;
                debug!("Skipping class declaration without rdf:about or rdf:ID");
            }
            return None;
        };

        // <rdfs:subClassOf><owl:Class rdf:about="parent"/></rdfs:subClassOf>
        if let Some(Some(child_idx)) = nested_in_subclass_of {
            let child_id = self.declarations[child_idx].id.clone();
            self.edges.push(SubclassEdge::new(child_id, id.clone()));
        }

        self.declarations.push(ClassDeclaration::new(id));
        Some(self.declarations.len() - 1)
    }

    fn close(&mut self) -> Result<()> {
        let depth = self.elements.len();
        self.elements
            .pop()
            .ok_or_else(|| OntoError::parse("closing tag without an open element"))?;

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let Some(capture) = self.capture.take() {
                self.store(capture);
            }
        }

        if self.restriction.as_ref().is_some_and(|r| r.depth == depth) {
            if let Some(PendingRestriction {
                owner,
                property,
                target: Some(target),
                ..
            }) = self.restriction.take()
            {
                let child_id = self.declarations[owner].id.clone();
                self.restrictions.push(RestrictionEdge::new(child_id, property, target));
            }
        }

        Ok(())
    }

    fn store(&mut self, capture: Capture) {
        let text = capture.text.trim();
        if capture.unreadable || text.is_empty() {
            return;
        }

        let declaration = &mut self.declarations[capture.owner];
        let slot = match capture.field {
            Field::Label => &mut declaration.label,
            Field::Description => &mut declaration.description,
            Field::Definition => &mut declaration.definition,
        };
        if slot.is_none() {
            *slot = Some(text.to_string());
        }
    }

    fn text(&mut self, text: &str) -> Result<()> {
        if self.elements.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(OntoError::parse("text outside the root element"));
        }

        if let Some(capture) = self.capture.as_mut() {
            if !capture.text.is_empty() {
                capture.text.push(' ');
            }
            capture.text.push_str(text);
        }

        Ok(())
    }

    /// Text whose entity references cannot be resolved
    ///
    /// Only the field being captured is lost; the rest of the document is
    /// still read.
    fn unreadable_text(&mut self, error: impl Display) -> Result<()> {
        if self.elements.is_empty() {
            return Err(OntoError::parse("text outside the root element"));
        }

        if let Some(capture) = self.capture.as_mut() {
            debug!(error = %error, "Dropping text with an unresolvable entity reference");
            capture.unreadable = true;
        }

        Ok(())
    }

    fn finish(self) -> Result<ParsedDocument> {
        if !self.saw_root {
            return Err(OntoError::parse("no root element"));
        }
        if let Some(open) = self.elements.last() {
            return Err(OntoError::parse(format!(
                "document ends inside an open element ({:?})",
                open.term
            )));
        }

        if self.skipped > 0 {
            debug!(skipped = self.skipped, "Class declarations without identifier skipped");
        }

        Ok(ParsedDocument {
            declarations: self.declarations,
            edges: self.edges,
            restrictions: self.restrictions,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn rdf(body: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xmlns:obo="http://purl.obolibrary.org/obo/">
{}
</rdf:RDF>"#,
            body
        )
    }

    #[test]
    fn test_parse_class_with_label_comment_and_edge() {
        let doc = rdf(r#"
  <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0008152">
    <rdfs:label>metabolic process</rdfs:label>
    <rdfs:comment>Chemical reactions and pathways.</rdfs:comment>
    <obo:IAO_0000115>The chemical reactions by which living organisms transform chemical substances.</obo:IAO_0000115>
    <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_0008150"/>
  </owl:Class>"#);

        let parsed = RdfXmlParser::parse(&doc);
        assert_eq!(parsed.declarations.len(), 1);

        let class = &parsed.declarations[0];
        assert_eq!(class.id, "http://purl.obolibrary.org/obo/GO_0008152");
        assert_eq!(class.label.as_deref(), Some("metabolic process"));
        assert_eq!(class.description.as_deref(), Some("Chemical reactions and pathways."));
        assert!(class.definition.as_deref().unwrap().starts_with("The chemical reactions"));

        assert_eq!(
            parsed.edges,
            vec![SubclassEdge::new(
                "http://purl.obolibrary.org/obo/GO_0008152",
                "http://purl.obolibrary.org/obo/GO_0008150"
            )]
        );
    }

    #[test]
    fn test_rdf_id_is_used_when_about_is_missing() {
        let parsed = RdfXmlParser::parse(&rdf(r#"<owl:Class rdf:ID="Local"/>"#));
        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].id, "Local");
    }

    #[test]
    fn test_class_without_identifier_is_skipped() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class><rdfs:label>nameless</rdfs:label></owl:Class>
  <owl:Class rdf:about="http://example.org/A"/>"#));

        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].id, "http://example.org/A");
    }

    #[test]
    fn test_restriction_is_kept_apart_from_is_a_edges() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class rdf:about="http://example.org/A">
    <rdfs:subClassOf>
      <owl:Restriction>
        <owl:onProperty rdf:resource="http://purl.obolibrary.org/obo/BFO_0000050"/>
        <owl:someValuesFrom rdf:resource="http://example.org/B"/>
      </owl:Restriction>
    </rdfs:subClassOf>
    <rdfs:label>Alpha</rdfs:label>
  </owl:Class>"#));

        assert!(parsed.edges.is_empty());
        assert_eq!(parsed.declarations[0].label.as_deref(), Some("Alpha"));
        assert_eq!(
            parsed.restrictions,
            vec![RestrictionEdge::new(
                "http://example.org/A",
                Some("http://purl.obolibrary.org/obo/BFO_0000050".to_string()),
                "http://example.org/B"
            )]
        );
    }

    #[test]
    fn test_restriction_without_filler_is_dropped() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class rdf:about="http://example.org/A">
    <rdfs:subClassOf>
      <owl:Restriction>
        <owl:onProperty rdf:resource="http://purl.obolibrary.org/obo/BFO_0000050"/>
        <owl:someValuesFrom>
          <owl:Class><owl:unionOf rdf:parseType="Collection"/></owl:Class>
        </owl:someValuesFrom>
      </owl:Restriction>
    </rdfs:subClassOf>
  </owl:Class>"#));

        assert_eq!(parsed.declarations.len(), 1);
        assert!(parsed.restrictions.is_empty());
    }

    #[test]
    fn test_nested_named_class_in_subclass_of_is_an_edge() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class rdf:about="http://example.org/B">
    <rdfs:subClassOf>
      <owl:Class rdf:about="http://example.org/A">
        <rdfs:label>Alpha</rdfs:label>
      </owl:Class>
    </rdfs:subClassOf>
  </owl:Class>"#));

        assert_eq!(parsed.declarations.len(), 2);
        assert_eq!(parsed.declarations[0].id, "http://example.org/B");
        assert!(parsed.declarations[0].label.is_none());
        assert_eq!(parsed.declarations[1].label.as_deref(), Some("Alpha"));
        assert_eq!(
            parsed.edges,
            vec![SubclassEdge::new("http://example.org/B", "http://example.org/A")]
        );
    }

    #[test]
    fn test_first_label_wins_and_entities_are_unescaped() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class rdf:about="http://example.org/A">
    <rdfs:label xml:lang="en">DNA &amp; RNA</rdfs:label>
    <rdfs:label xml:lang="fr">ADN et ARN</rdfs:label>
  </owl:Class>"#));

        assert_eq!(parsed.declarations[0].label.as_deref(), Some("DNA & RNA"));
    }

    #[test]
    fn test_prefixes_are_resolved_by_namespace() {
        let doc = r#"<r:RDF xmlns:r="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
       xmlns:s="http://www.w3.org/2000/01/rdf-schema#"
       xmlns:o="http://www.w3.org/2002/07/owl#">
  <o:Class r:about="http://example.org/A"><s:label>Alpha</s:label></o:Class>
  <label>not a class label</label>
</r:RDF>"#;

        let parsed = RdfXmlParser::parse(doc);
        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].label.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_empty_label_counts_as_absent() {
        let parsed = RdfXmlParser::parse(&rdf(
            r#"<owl:Class rdf:about="http://example.org/A"><rdfs:label>  </rdfs:label></owl:Class>"#,
        ));
        assert!(parsed.declarations[0].label.is_none());
    }

    #[test]
    fn test_cdata_label() {
        let parsed = RdfXmlParser::parse(&rdf(
            r#"<owl:Class rdf:about="http://example.org/A"><rdfs:label><![CDATA[a < b]]></rdfs:label></owl:Class>"#,
        ));
        assert_eq!(parsed.declarations[0].label.as_deref(), Some("a < b"));
    }

    #[test]
    fn test_dtd_entities_are_expanded() {
        let doc = r#"<?xml version="1.0"?>
<!DOCTYPE rdf:RDF [
    <!ENTITY obo "http://purl.obolibrary.org/obo/" >
    <!ENTITY rdfs 'http://www.w3.org/2000/01/rdf-schema#' >
    <!ENTITY obo "ignored, first declaration wins" >
    <!ENTITY go "&obo;GO_" >
    <!ENTITY % local SYSTEM "local.dtd" >
]>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="&obo;GO_0008150"><rdfs:label>biological_process</rdfs:label></owl:Class>
  <owl:Class rdf:about="&go;0008152">
    <rdfs:label>metabolic process &amp; more</rdfs:label>
    <rdfs:subClassOf rdf:resource="&obo;GO_0008150"/>
  </owl:Class>
</rdf:RDF>"#;

        let parsed = RdfXmlParser::parse(doc);
        let ids: Vec<&str> = parsed.declarations.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "http://purl.obolibrary.org/obo/GO_0008150",
                "http://purl.obolibrary.org/obo/GO_0008152"
            ]
        );
        assert_eq!(parsed.declarations[1].label.as_deref(), Some("metabolic process & more"));
        assert_eq!(
            parsed.edges,
            vec![SubclassEdge::new(
                "http://purl.obolibrary.org/obo/GO_0008152",
                "http://purl.obolibrary.org/obo/GO_0008150"
            )]
        );
    }

    #[test]
    fn test_unknown_entity_only_loses_its_field() {
        let parsed = RdfXmlParser::parse(&rdf(r#"
  <owl:Class rdf:about="http://example.org/A"><rdfs:label>Alpha</rdfs:label></owl:Class>
  <owl:Class rdf:about="http://example.org/B">
    <rdfs:label>Bravo&nbsp;one</rdfs:label>
    <rdfs:comment>still read</rdfs:comment>
    <rdfs:subClassOf rdf:resource="&undeclared;X"/>
  </owl:Class>
  <owl:Class rdf:about="&undeclared;C"/>"#));

        assert_eq!(parsed.declarations.len(), 2);
        assert_eq!(parsed.declarations[0].label.as_deref(), Some("Alpha"));

        let b = &parsed.declarations[1];
        assert_eq!(b.id, "http://example.org/B");
        assert!(b.label.is_none());
        assert_eq!(b.description.as_deref(), Some("still read"));
        assert!(parsed.edges.is_empty());
    }

    #[test]
    fn test_malformed_documents_yield_nothing() {
        for doc in [
            "",
            "not xml at all",
            "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">",
            "<a></b>",
            "<a/><b/>",
        ] {
            assert_eq!(RdfXmlParser::parse(doc), ParsedDocument::default(), "input: {:?}", doc);
        }
    }
}
