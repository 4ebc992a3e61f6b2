//! Onto CLI Library
//!
//! Command-line browser for OWL class hierarchies.
//!
//! - **Browsing**: print the hierarchy as an outline (`onto tree`)
//! - **Details**: one class with its parents and children (`onto show`)
//! - **Search**: find classes by label (`onto search`)
//! - **Subsets**: term table under a root class (`onto subset`)
//! - **Pathways**: events-hierarchy JSON to OWL (`onto pathways`)

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Onto - browse and extract OWL class hierarchies
#[derive(Parser, Debug)]
#[command(name = "onto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Classes shown as roots when every class has a parent
    #[arg(long, env = "ONTO_ROOT_FALLBACK_LIMIT", global = true)]
    pub root_fallback_limit: Option<usize>,

    /// Print the full command reference as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the class hierarchy as an outline
    Tree {
        /// Ontology file (RDF/XML, optionally .gz)
        file: PathBuf,

        /// Keep only branches with a label containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Levels expanded below the roots
        #[arg(short, long, default_value_t = 1)]
        depth: usize,

        /// Always expand these classes (full or compact id)
        #[arg(short, long, value_name = "ID")]
        expand: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Text)]
        format: TreeFormat,
    },

    /// Show one class with its parents and children
    Show {
        /// Ontology file (RDF/XML, optionally .gz)
        file: PathBuf,

        /// Class identifier (full IRI or compact form such as GO:0008150)
        id: String,
    },

    /// List classes whose label contains a term
    Search {
        /// Ontology file (RDF/XML, optionally .gz)
        file: PathBuf,

        /// Case-insensitive text to look for
        term: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Write a term table for a class and all its descendants
    Subset {
        /// Ontology file (RDF/XML, optionally .gz)
        file: PathBuf,

        /// Root class [default: http://purl.obolibrary.org/obo/GO_0008150]
        #[arg(short, long, env = "ONTO_SUBSET_ROOT")]
        root: Option<String>,

        /// Output TSV file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the subset as an OWL document
        #[arg(long, value_name = "PATH")]
        owl: Option<PathBuf>,

        /// Include classes linked to a member only by a restriction (e.g., part_of)
        #[arg(long)]
        follow_restrictions: bool,
    },

    /// Convert an events-hierarchy JSON file into an OWL pathway ontology
    Pathways {
        /// Events hierarchy JSON (optionally .gz)
        file: PathBuf,

        /// Namespace for pathway classes [default: https://reactome.org/pathway/]
        #[arg(short, long, env = "ONTO_PATHWAY_NAMESPACE")]
        namespace: Option<String>,

        /// Output OWL file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Indented outline
    Text,
    /// Nested JSON array
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Bordered table
    Table,
    /// One `id<TAB>label` line per class
    Compact,
    /// JSON array
    Json,
}
