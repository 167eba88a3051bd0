use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Check {
            repo,
            output,
            format,
            on_fetch_error,
            exit_zero,
        } => commands::handle_check(
            cli.policy,
            repo,
            output,
            format,
            on_fetch_error,
            exit_zero,
            cli.quiet,
        ),
        Commands::Report {
            owner,
            output_dir,
            on_fetch_error,
        } => commands::handle_report(owner, output_dir, on_fetch_error, cli.quiet),
        Commands::Init { preset, force } => commands::handle_init(cli.policy, preset, force, cli.quiet),
        Commands::Config { show, validate } => {
            commands::handle_config(cli.policy, show, validate, cli.quiet)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked from the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
