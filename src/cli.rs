use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use repo_license_auditor::config::DEFAULT_COMPLIANCE_REPORT;

#[derive(Parser)]
#[command(name = "repo-license-auditor")]
#[command(about = "Check GitHub repository dependency licenses against a policy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the license policy file (YAML or TOML)
    #[arg(short, long, global = true)]
    pub policy: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one repository's dependencies against the license policy
    Check {
        /// Repository as owner/name (default: $GITHUB_REPOSITORY)
        #[arg(short, long)]
        repo: Option<String>,

        /// Report file
        #[arg(short, long, default_value = DEFAULT_COMPLIANCE_REPORT)]
        output: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// What to do when the SBOM cannot be fetched
        #[arg(long, value_enum, default_value_t = OnFetchError::Fail)]
        on_fetch_error: OnFetchError,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,
    },
    /// Write license and vulnerability reports for every repository of an owner
    Report {
        /// Account whose public repositories are listed (default: $GITHUB_REPOSITORY_OWNER)
        #[arg(long)]
        owner: Option<String>,

        /// Directory receiving licenses.md and vulnerabilities.md
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// What to do when a repository's SBOM cannot be fetched
        #[arg(long, value_enum, default_value_t = OnFetchError::Skip)]
        on_fetch_error: OnFetchError,
    },
    /// Write a starter policy file from a preset
    Init {
        /// Policy preset
        preset: InitPreset,

        /// Overwrite an existing policy file
        #[arg(long)]
        force: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate the policy file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnFetchError {
    Fail,
    Skip,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}
