use std::{env, error::Error, io, path::PathBuf};

use clap::{Parser, Subcommand};
use icon_pipeline::{run_build, run_normalize, BuildConfig, BuildSummary};

fn main() {
    if let Err(err) = Xtask::parse().run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "xtask",
    about = "Workspace utilities for the GrowthPlan icon library",
    version
)]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Debug, Subcommand)]
enum XtaskCommand {
    /// Normalize raw SVG assets and regenerate icon components, the
    /// registries, and the build manifest.
    Build {
        /// Directory containing raw SVG assets. Defaults to `assets/svg`.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Normalize raw SVG assets without regenerating components.
    Normalize {
        /// Directory containing raw SVG assets. Defaults to `assets/svg`.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Xtask {
    fn run(self) -> Result<(), Box<dyn Error>> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .init();

        match self.command {
            XtaskCommand::Build { input } => {
                let config = config(input)?;
                let summary = run_build(&config)?;
                report("Generated", &summary);
                println!("Components written to {}", config.components_dir.display());
                Ok(())
            }
            XtaskCommand::Normalize { input } => {
                let config = config(input)?;
                let summary = run_normalize(&config)?;
                report("Normalized", &summary);
                println!(
                    "Normalized assets written to {}",
                    config.normalized_dir.display()
                );
                Ok(())
            }
        }
    }
}

fn config(input: Option<PathBuf>) -> Result<BuildConfig, Box<dyn Error>> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "workspace root"))?
        .to_path_buf();
    let mut config = BuildConfig::with_root(&workspace_root);
    if let Some(input) = input {
        config.input_dir = if input.is_relative() {
            env::current_dir()?.join(input)
        } else {
            input
        };
    }
    if !config.input_dir.exists() {
        return Err(format!(
            "input directory '{}' not found",
            config.input_dir.display()
        )
        .into());
    }
    Ok(config)
}

fn report(verb: &str, summary: &BuildSummary) {
    println!("{verb} {} icon(s)", summary.generated);
    for failure in &summary.failures {
        println!("  skipped {}: {}", failure.file, failure.error);
    }
}
