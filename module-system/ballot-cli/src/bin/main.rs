use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use ballot_cli::{from_toml_path, state, CliConfig, Workflow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
/// Open ballots, vote and finalize them
struct App {
    /// JSON file holding the module state. Created on first use.
    #[clap(long, global = true, default_value = "ballot_state.json")]
    state: PathBuf,
    /// TOML configuration file, read when the state file is created
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    workflow: Workflow,
}

fn main() -> Result<ExitCode, anyhow::Error> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global default subscriber")?;

    let invocation = App::parse();

    let config: CliConfig = match &invocation.config {
        Some(path) => from_toml_path(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?,
        None => CliConfig::default(),
    };
    debug!(?config, "Loaded configuration");

    let storage = state::load(&invocation.state, &config.ballot)?;
    let output = invocation.workflow.run(&storage)?;
    if output.modified || !invocation.state.exists() {
        state::save(&storage, &invocation.state)?;
    }

    println!("{}", output.text);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
