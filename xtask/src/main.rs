//! Build automation tasks for the ontology toolkit
//!
//! - Generating the CLI reference from the clap definitions

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the ontology toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &Path) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<onto_cli::Cli>();

    let content = format!(
        r#"# onto CLI Reference

Generated from the CLI source. Do not edit by hand; run `cargo xtask generate-cli-docs`.

## Quick Start

```bash
# Outline of the hierarchy, roots plus one level
onto tree go-basic.owl.gz

# Only branches mentioning "apoptotic", fully expanded
onto tree go-basic.owl.gz --search apoptotic

# Details for one class
onto show go-basic.owl.gz GO:0006915

# Biological process term table with top-level branch per term
onto subset go-basic.owl.gz --output biological_process_terms.tsv

# Reactome events hierarchy (downloaded beforehand) to OWL
onto pathways eventsHierarchy-9606.json --output reactome_pathways.owl
```

## Commands

{}

## Environment Variables

- `ONTO_ROOT_FALLBACK_LIMIT` - Classes shown as roots when every class has a parent (default: `10`)
- `ONTO_SUBSET_ROOT` - Root class for `onto subset` (default: `http://purl.obolibrary.org/obo/GO_0008150`)
- `ONTO_PATHWAY_NAMESPACE` - Namespace for `onto pathways` classes (default: `https://reactome.org/pathway/`)
- `LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT`, `LOG_DIR` - Logging (see `onto_common::logging`)

Values may also be placed in a `.env` file in the working directory.
"#,
        markdown
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let file_path = output_dir.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
