//! `onto tree` command implementation
//!
//! Prints the visible roots and their expanded subtrees. A class shows up
//! under every parent it has, but its subtree is expanded only the first
//! time; a class already on the current path is printed once more and not
//! descended into.

use crate::error::Result;
use crate::TreeFormat;
use colored::Colorize;
use onto_core::{IndexOptions, OntologyClass, OntologyIndex};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// One printed class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    /// Visible children, whether expanded or not
    pub child_count: usize,
    pub expanded: bool,
    /// Already an ancestor on this path
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
    /// Subtree already expanded earlier in the outline
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Active search filter
    pub search: Option<String>,
    /// Levels expanded below the roots
    pub depth: usize,
    /// Classes expanded regardless of depth
    pub expand: HashSet<String>,
}

impl TreeOptions {
    fn term(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}

/// Build the outline for the current filter and expansion settings
///
/// Under a search filter, branches that contain a match are expanded all the
/// way down so every hit is on screen.
pub fn build_tree(index: &OntologyIndex, options: &TreeOptions) -> Vec<TreeNode> {
    let mut outline = Outline {
        index,
        options,
        matching: options.search.as_deref().map(|term| index.matching_ids(term)),
        shown: HashSet::new(),
        path: Vec::new(),
    };

    let roots: Vec<&OntologyClass> = index
        .roots()
        .into_iter()
        .filter(|root| outline.visible(&root.id))
        .collect();
    roots.into_iter().map(|root| outline.node(root, 0)).collect()
}

/// State of one outline build
struct Outline<'a> {
    index: &'a OntologyIndex,
    options: &'a TreeOptions,
    /// Classes passing the search filter, computed once
    matching: Option<HashSet<&'a str>>,
    /// Classes whose subtree is already in the outline
    shown: HashSet<&'a str>,
    /// Ancestors of the node being built
    path: Vec<&'a str>,
}

impl<'a> Outline<'a> {
    fn visible(&self, id: &str) -> bool {
        self.matching.as_ref().is_none_or(|matching| matching.contains(id))
    }

    fn node(&mut self, class: &'a OntologyClass, level: usize) -> TreeNode {
        let id = class.id.as_str();
        let cycle = self.path.contains(&id);
        let visible: Vec<&'a OntologyClass> = self
            .index
            .children_of(id)
            .into_iter()
            .filter(|child| self.visible(&child.id))
            .collect();

        let wants_expansion = level < self.options.depth
            || self.options.expand.contains(id)
            || self.options.search.is_some();
        let expandable = !cycle && !visible.is_empty() && wants_expansion;
        let repeated = expandable && self.shown.contains(id);
        let expanded = expandable && !repeated;

        let mut children = Vec::new();
        if expanded {
            self.shown.insert(id);
            self.path.push(id);
            children = visible
                .iter()
                .map(|&child| self.node(child, level + 1))
                .collect();
            self.path.pop();
        }

        TreeNode {
            id: class.id.clone(),
            label: class.label.clone(),
            child_count: visible.len(),
            expanded,
            cycle,
            repeated,
            children,
        }
    }
}

/// Render nodes as an indented outline, one class per line
pub fn render_text(nodes: &[TreeNode], search: Option<&str>) -> String {
    let mut out = String::new();
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());
    for node in nodes {
        render_node(node, 0, needle.as_deref(), &mut out);
    }
    out
}

fn render_node(node: &TreeNode, level: usize, needle: Option<&str>, out: &mut String) {
    let marker = if node.cycle {
        "↺"
    } else if node.repeated {
        "↷"
    } else if node.expanded {
        "▾"
    } else if node.child_count > 0 {
        "▸"
    } else {
        "•"
    };

    let is_hit = needle.is_some_and(|n| node.label.to_lowercase().contains(n));
    let label = if is_hit {
        node.label.bold().yellow().to_string()
    } else {
        node.label.clone()
    };

    let mut line = format!("{}{} {}  {}", "  ".repeat(level), marker, label, node.id.dimmed());
    if !node.expanded && node.child_count > 0 && !node.cycle {
        line.push_str(&format!(" ({})", node.child_count));
    }
    out.push_str(&line);
    out.push('\n');

    for child in &node.children {
        render_node(child, level + 1, needle, out);
    }
}

/// Run `onto tree`
pub fn run(
    file: &Path,
    index_options: &IndexOptions,
    search: Option<String>,
    depth: usize,
    expand: &[String],
    format: TreeFormat,
) -> Result<()> {
    let index = super::load_index(file, index_options)?;

    if index.is_empty() {
        match format {
            TreeFormat::Text => super::print_no_classes(file),
            TreeFormat::Json => println!("[]"),
        }
        return Ok(());
    }

    let expand = expand
        .iter()
        .map(|id| super::resolve_class(&index, id).map(|class| class.id.clone()))
        .collect::<Result<HashSet<String>>>()?;

    let options = TreeOptions {
        search: search.filter(|s| !s.is_empty()),
        depth,
        expand,
    };
    let tree = build_tree(&index, &options);
    debug!(roots = tree.len(), depth, "Built outline");

    match format {
        TreeFormat::Text => {
            if tree.is_empty() {
                println!("{}", format!("No classes match '{}'", options.term()).bold().red());
            } else {
                print!("{}", render_text(&tree, options.search.as_deref()));
            }
        },
        TreeFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(())
}
