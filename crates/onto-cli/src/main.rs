//! Onto CLI - Main entry point

use anyhow::Context;
use clap::Parser;
use onto_cli::config::Config;
use onto_cli::{Cli, Commands};
use onto_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use onto_core::subset::SubsetOptions;
use std::process;
use tracing::error;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    let Some(ref command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    // Verbose mode logs debug to the console; otherwise warnings only
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("onto-cli")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(&cli, command) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
fn execute_command(cli: &Cli, command: &Commands) -> anyhow::Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(limit) = cli.root_fallback_limit {
        config.root_fallback_limit = limit;
        config.validate()?;
    }
    let options = config.index_options();

    match command {
        Commands::Tree {
            file,
            search,
            depth,
            expand,
            format,
        } => onto_cli::commands::tree::run(file, &options, search.clone(), *depth, expand, *format)?,
        Commands::Show { file, id } => onto_cli::commands::show::run(file, &options, id)?,
        Commands::Search { file, term, format } => {
            onto_cli::commands::search::run(file, &options, term, *format)?
        },
        Commands::Subset {
            file,
            root,
            output,
            owl,
            follow_restrictions,
        } => {
            let root = root.as_deref().unwrap_or(&config.subset_root);
            let subset_options = SubsetOptions {
                follow_restrictions: *follow_restrictions,
            };
            onto_cli::commands::subset::run(
                file,
                &options,
                root,
                &subset_options,
                output.as_deref(),
                owl.as_deref(),
            )?
        },
        Commands::Pathways {
            file,
            namespace,
            output,
        } => {
            let namespace = namespace.as_deref().unwrap_or(&config.pathway_namespace);
            onto_cli::commands::pathways::run(file, namespace, output.as_deref())?
        },
    }

    Ok(())
}
