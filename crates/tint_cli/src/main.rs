//! Tint - design-token color tooling

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tint_cli::{generate, inspect, write_default, TintConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate color tables from design tokens and inspect app color files
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(about = "Design-token color resolution and discovery")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./tint.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve tagged token documents and write generated sources
    Generate {
        /// Directory holding light/dark/primitive token documents
        tokens: Option<PathBuf>,

        /// Directory the generated files are written to
        output: Option<PathBuf>,
    },

    /// Load app color files and print a setup report
    Inspect {
        /// Directory holding `<name>.json` or `<name>-light.json` / `<name>-dark.json`
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Base resource name
        #[arg(long)]
        name: Option<String>,

        /// List every color and identifier
        #[arg(long)]
        all: bool,

        /// Show keys containing a term
        #[arg(long)]
        search: Option<String>,
    },

    /// Write a default tint.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate { tokens, output } => {
            let config = TintConfig::load(cli.config.as_deref(), Path::new("."))?
                .with_dirs(tokens, output);
            let summary = generate(&config.tokens, &config.output)?;
            for file in &summary.files {
                println!("Generated {}", file.display());
            }
            if summary.collisions > 0 {
                println!(
                    "{} identifier collisions resolved; see warnings above",
                    summary.collisions
                );
            }
        }
        Commands::Inspect {
            dir,
            name,
            all,
            search,
        } => {
            let config = TintConfig::load(cli.config.as_deref(), Path::new("."))?;
            let dir = dir.unwrap_or(config.discovery.dir);
            let name = name.unwrap_or(config.discovery.name);
            let inspection = inspect(&dir, &name, all, search.as_deref());
            print!("{}", inspection.text);
            if !inspection.ready {
                anyhow::bail!("colors for '{}' are not ready", name);
            }
        }
        Commands::Init { path, force } => {
            let file = write_default(&path, force)?;
            info!("Wrote {}", file.display());
        }
    }

    Ok(())
}
