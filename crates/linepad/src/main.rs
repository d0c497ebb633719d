mod demo;
mod repl;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linepad_config::AppConfig;

/// An editable list with linear undo/redo, driven from the terminal.
#[derive(Parser, Debug)]
#[command(name = "linepad", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Interactive editing session (the default).
    Repl,
    /// Scripted walkthrough of add, insert, edit, undo and redo.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so it never interleaves with session output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::info!("Starting linepad");

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);
    tracing::debug!(path = %config_path.display(), ?config, "Loaded config");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Mode::Repl) {
        Mode::Repl => {
            let stdin = std::io::stdin();
            repl::Repl::new(&config).run(stdin.lock(), &mut out)
        }
        Mode::Demo => demo::run(&mut out),
    }
}
