//! weavegitops - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use weavegitops_tooling::ci::{current_ref_is_release_tag, github_output_path};
use weavegitops_tooling::release::{BumpConfig, run_bump};
use weavegitops_tooling::version::BumpKind;

/// Weave GitOps tooling: release version bumps and CI helpers.
#[derive(Parser, Debug)]
#[command(name = "weavegitops")]
#[command(about = "Weave GitOps tooling: release bump and CI helpers")]
#[command(version)]
struct Cli {
    /// Project root containing charts/gitops-server and package.json
    #[arg(long, env = "WEAVE_GITOPS_PROJECT_ROOT", default_value = ".", global = true)]
    project_root: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Release commands
    #[command(subcommand)]
    Release(ReleaseCommands),

    /// CI helper commands
    #[command(subcommand)]
    Ci(CiCommands),
}

#[derive(Subcommand, Debug)]
enum ReleaseCommands {
    /// Bump version from Chart.yaml; update Chart, values, package.json
    Bump {
        /// patch|minor|major|rc|patch-rc|minor-rc|major-rc. minor-rc: 0.39.x -> 0.40.0-rc.1
        #[arg(default_value = "patch")]
        kind: BumpKind,

        /// Print the next version without writing any file
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CiCommands {
    /// Print 'true' if GITHUB_REF is a release tag (refs/tags/v*), else 'false'
    IsTag,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Release(ReleaseCommands::Bump { kind, dry_run }) => {
            let project_root = resolve_project_root(&cli.project_root)?;
            let config = BumpConfig {
                project_root,
                kind,
                github_output: github_output_path(),
                dry_run,
            };

            let outcome = run_bump(&config).context("Release bump failed")?;

            println!("{}", outcome.summary());
            for path in &outcome.updated {
                println!("  {}", path.display());
            }
        }
        Commands::Ci(CiCommands::IsTag) => {
            println!("{}", current_ref_is_release_tag());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_project_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("Project root {} is not accessible", root.display()))
}
