mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "mssqlbuild",
    about = "Print docker build and push commands for every SQL Server base image tag"
)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./mssqlbuild.toml when present)
    #[arg(long, global = true, env = "MSSQLBUILD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print build commands for each tag followed by a push (default)
    Emit {
        /// Leave out the trailing docker push
        #[arg(long)]
        no_push: bool,
    },
    /// List the resolved tag set
    Tags,
    /// Print the version number of mssqlbuild
    Version,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the emitted commands; logs go to stderr.
    // Invalid RUST_LOG directives are skipped; unset falls back to warn.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    // arch-lint: allow(no-silent-result-drop) reason="cli.command is an Option; a missing subcommand defaults to emit, no error is dropped"
    match cli.command.unwrap_or(Commands::Emit { no_push: false }) {
        Commands::Emit { no_push } => commands::emit(config, no_push)?,
        Commands::Tags => commands::tags(config)?,
        Commands::Version => commands::version(),
    }

    Ok(())
}
