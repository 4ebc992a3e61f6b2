// Ontology Index (immutable class hierarchy and tree-view queries)

use crate::collation::compare_labels;
use crate::models::{ClassDeclaration, IndexOptions, OntologyClass};
use crate::parser::{ParsedDocument, RdfXmlParser};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, info};

/// Read-only view of a parsed class hierarchy
///
/// Built once from a document; every query borrows. Classes keep declaration
/// order internally, which is also the tie-breaker of every label sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyIndex {
    classes: Vec<OntologyClass>,
    positions: HashMap<String, usize>,
    roots: Vec<usize>,
}

impl OntologyIndex {
    /// Parse RDF/XML text with default options
    pub fn parse(content: &str) -> Self {
        Self::parse_with(content, &IndexOptions::default())
    }

    /// Parse RDF/XML text
    pub fn parse_with(content: &str, options: &IndexOptions) -> Self {
        Self::from_parsed(RdfXmlParser::parse(content), options)
    }

    /// Build the index from already-extracted declarations and edges
    pub fn from_parsed(parsed: ParsedDocument, options: &IndexOptions) -> Self {
        let mut declarations: Vec<ClassDeclaration> = Vec::with_capacity(parsed.declarations.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for declaration in parsed.declarations {
            match positions.get(&declaration.id) {
                Some(&pos) => declarations[pos].absorb(declaration),
                None => {
                    positions.insert(declaration.id.clone(), declarations.len());
                    declarations.push(declaration);
                },
            }
        }

        let mut classes: Vec<OntologyClass> = declarations
            .into_iter()
            .map(OntologyClass::from_declaration)
            .collect();

        // Both directions come from the same edge, so they stay inverse
        for edge in parsed.edges {
            if let Some(&child) = positions.get(&edge.child) {
                classes[child].parents.insert(edge.parent.clone());
            }
            if let Some(&parent) = positions.get(&edge.parent) {
                classes[parent].children.insert(edge.child);
            }
        }

        for edge in parsed.restrictions {
            if let Some(&target) = positions.get(&edge.restriction.target) {
                classes[target].restricted_by.insert(edge.child.clone());
            }
            if let Some(&child) = positions.get(&edge.child) {
                classes[child].restrictions.insert(edge.restriction);
            }
        }

        let mut roots: Vec<usize> = (0..classes.len()).filter(|&i| classes[i].is_root()).collect();
        if roots.is_empty() && !classes.is_empty() {
            let limit = options.root_fallback_limit.max(1).min(classes.len());
            debug!(limit, "No parentless class, falling back to first declared classes as roots");
            roots = (0..limit).collect();
        }
        sort_by_label(&classes, &mut roots);

        info!(classes = classes.len(), roots = roots.len(), "Built ontology index");

        OntologyIndex {
            classes,
            positions,
            roots,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: &str) -> Option<&OntologyClass> {
        self.positions.get(id).map(|&i| &self.classes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes in declaration order
    pub fn classes(&self) -> &[OntologyClass] {
        &self.classes
    }

    /// Top-level display set, label-sorted
    pub fn roots(&self) -> Vec<&OntologyClass> {
        self.roots.iter().map(|&i| &self.classes[i]).collect()
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Declared direct subclasses of `id`, label-sorted; empty for unknown ids
    pub fn children_of(&self, id: &str) -> Vec<&OntologyClass> {
        match self.get(id) {
            Some(class) => self.resolve_sorted(class.children.iter()),
            None => Vec::new(),
        }
    }

    /// Declared direct superclasses of `id`, label-sorted
    pub fn parents_of(&self, id: &str) -> Vec<&OntologyClass> {
        match self.get(id) {
            Some(class) => self.resolve_sorted(class.parents.iter()),
            None => Vec::new(),
        }
    }

    /// Declared classes whose restrictions point at `id`, label-sorted
    pub fn restricted_by(&self, id: &str) -> Vec<&OntologyClass> {
        match self.get(id) {
            Some(class) => self.resolve_sorted(class.restricted_by.iter()),
            None => Vec::new(),
        }
    }

    /// Every class reachable from `id` through children, breadth-first
    ///
    /// Each class appears once, and `id` itself never does, even when a cycle
    /// leads back to it.
    pub fn descendants_of(&self, id: &str) -> Vec<&OntologyClass> {
        self.walk_down(id, false)
    }

    /// Like [`Self::descendants_of`], also stepping from a class to the
    /// classes that restrict it (e.g., the parts of a process)
    pub fn descendants_with_restrictions(&self, id: &str) -> Vec<&OntologyClass> {
        self.walk_down(id, true)
    }

    fn walk_down(&self, id: &str, follow_restrictions: bool) -> Vec<&OntologyClass> {
        let Some(&start) = self.positions.get(id) else {
            return Vec::new();
        };

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut found = Vec::new();

        while let Some(current) = queue.pop_front() {
            let class = &self.classes[current];
            let mut next = self.sorted_positions(class.children.iter());
            if follow_restrictions {
                next.extend(self.sorted_positions(class.restricted_by.iter()));
            }

            for position in next {
                if visited.insert(position) {
                    found.push(&self.classes[position]);
                    queue.push_back(position);
                }
            }
        }

        found
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Whether `term` occurs in the label of `id` or of any of its descendants
    ///
    /// Case-insensitive substring match. An empty term matches any known class.
    pub fn matches_search(&self, id: &str, term: &str) -> bool {
        let Some(&start) = self.positions.get(id) else {
            return false;
        };

        let needle = term.to_lowercase();
        let mut visited = HashSet::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }

            let class = &self.classes[current];
            if label_contains(&class.label, &needle) {
                return true;
            }

            stack.extend(class.children.iter().filter_map(|c| self.positions.get(c).copied()));
        }

        false
    }

    /// Ids of every class for which [`Self::matches_search`] holds
    ///
    /// One upward pass from the direct hits instead of one descendant walk
    /// per class.
    pub fn matching_ids(&self, term: &str) -> HashSet<&str> {
        let needle = term.to_lowercase();
        let mut matched: HashSet<usize> = HashSet::new();
        let mut stack: Vec<usize> = (0..self.classes.len())
            .filter(|&i| label_contains(&self.classes[i].label, &needle))
            .collect();

        while let Some(current) = stack.pop() {
            if !matched.insert(current) {
                continue;
            }
            stack.extend(
                self.classes[current]
                    .parents
                    .iter()
                    .filter_map(|p| self.positions.get(p).copied()),
            );
        }

        matched.into_iter().map(|i| self.classes[i].id.as_str()).collect()
    }

    /// Classes whose own label contains `term`, label-sorted
    pub fn search(&self, term: &str) -> Vec<&OntologyClass> {
        let needle = term.to_lowercase();
        let mut hits: Vec<usize> = (0..self.classes.len())
            .filter(|&i| label_contains(&self.classes[i].label, &needle))
            .collect();
        sort_by_label(&self.classes, &mut hits);
        hits.into_iter().map(|i| &self.classes[i]).collect()
    }

    /// Roots that stay visible while `term` filters the tree
    pub fn visible_roots(&self, term: &str) -> Vec<&OntologyClass> {
        self.roots
            .iter()
            .map(|&i| &self.classes[i])
            .filter(|class| self.matches_search(&class.id, term))
            .collect()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn sorted_positions<'a>(&self, ids: impl Iterator<Item = &'a String>) -> Vec<usize> {
        let mut found: Vec<usize> = ids.filter_map(|id| self.positions.get(id).copied()).collect();
        sort_by_label(&self.classes, &mut found);
        found
    }

    fn resolve_sorted<'a>(&self, ids: impl Iterator<Item = &'a String>) -> Vec<&OntologyClass> {
        self.sorted_positions(ids)
            .into_iter()
            .map(|i| &self.classes[i])
            .collect()
    }
}

fn label_contains(label: &str, lowercase_needle: &str) -> bool {
    label.to_lowercase().contains(lowercase_needle)
}

/// Sort class positions by label; equal labels keep declaration order
fn sort_by_label(classes: &[OntologyClass], positions: &mut [usize]) {
    positions.sort_by(|&a, &b| compare_labels(&classes[a].label, &classes[b].label).then(a.cmp(&b)));
}

// ============================================================================
// Tests
// ============================================================================
