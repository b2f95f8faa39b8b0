//! revlens command line - main entry point.
//!
//! Two jobs:
//! - `install`: provision an Unreal project with the context-menu scripts
//! - `show`: run the resolve-and-dispatch pipeline directly from a shell,
//!   which is also how the pipeline is exercised without an editor

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use revlens_core::{AppConfig, DispatchOutcome, HistoryAction, PackageName};
use revlens_installer::{
    detect_workspace, enable_startup_script, find_project_root, install_scripts,
};
use revlens_pipeline::{
    ExternalClientDispatcher, HistoryPipeline, LogNotifier, PackageResolver, StaticSelection,
};

#[derive(Debug, Parser)]
#[command(name = "revlens", version, about = "Asset revision-history integration for Unreal projects")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Install the context-menu scripts into a project and enable them.
    Install {
        /// Project root. Detected by upward .uproject search when omitted.
        #[arg(long)]
        project: Option<PathBuf>,
    },
    /// Resolve packages and open them in the external client.
    Show {
        /// Project root. Detected by upward .uproject search when omitted.
        #[arg(long)]
        project: Option<PathBuf>,

        /// What to open in the client.
        #[arg(long, value_enum, default_value_t = CliAction::Select)]
        action: CliAction,

        /// Logical package names, e.g. /Game/Characters/BP_Player
        #[arg(required = true)]
        packages: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliAction {
    /// Reveal and select the files in the client's workspace view.
    Select,
    /// Open the client's revision history view.
    History,
}

impl From<CliAction> for HistoryAction {
    fn from(action: CliAction) -> Self {
        match action {
            CliAction::Select => HistoryAction::ShowInClient,
            CliAction::History => HistoryAction::ViewHistory,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        CliCommand::Install { project } => run_install(project),
        CliCommand::Show {
            project,
            action,
            packages,
        } => run_show(project, action.into(), packages),
    }
}

/// Resolve the project root from the flag or by searching upward from the
/// current directory.
fn project_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        if !root.is_dir() {
            bail!("project root {} is not a directory", root.display());
        }
        return Ok(root);
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    find_project_root(&cwd)
        .with_context(|| format!("no .uproject found at or above {}", cwd.display()))
}

fn run_install(project: Option<PathBuf>) -> Result<()> {
    let project = project_root(project)?;
    tracing::info!("installing into {}", project.display());

    let workspace = detect_workspace(&project);
    tracing::info!(
        "using workspace root {} ({:?})",
        workspace.root.display(),
        workspace.source
    );

    let written = install_scripts(&project).context("failed to install startup scripts")?;
    for path in &written {
        println!("installed {}", path.display());
    }

    let config_path = project.join("Config").join("DefaultEngine.ini");
    let update = enable_startup_script(&config_path)
        .with_context(|| format!("failed to update {}", config_path.display()))?;
    println!("{}: {update:?}", config_path.display());

    println!("Done. Restart the editor to pick up the context menu.");
    Ok(())
}

fn run_show(project: Option<PathBuf>, action: HistoryAction, packages: Vec<String>) -> Result<()> {
    let project = project_root(project)?;
    let config = AppConfig::load(&project)
        .with_context(|| format!("failed to load config for {}", project.display()))?;

    let resolver = PackageResolver::new(&project, &config.resolver)
        .context("failed to set up the package resolver")?;
    let dispatcher =
        ExternalClientDispatcher::from_config(&config.client).with_working_dir(&project);
    let selection = StaticSelection::new(packages.into_iter().map(PackageName::from));

    let pipeline = HistoryPipeline::new(selection, resolver, dispatcher, LogNotifier);
    match pipeline.run(action) {
        DispatchOutcome::Dispatched { path_count } => {
            println!("dispatched {path_count} path(s) to {}", config.client.binary);
            Ok(())
        }
        DispatchOutcome::EmptySelection => bail!("no packages given"),
        DispatchOutcome::NothingResolved => {
            bail!("none of the packages resolved to a file under {}", project.display())
        }
        DispatchOutcome::Failed => bail!("dispatch failed, see log output"),
    }
}
