//! CLI argument parsing module for tagwatch

use crate::config::{DEFAULT_MAX_CHUNK, DEFAULT_REPO_URL};
use clap::Parser;
use std::path::PathBuf;

/// Upstream version checker for package-manifest repositories
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tagwatch",
    version,
    about = "Report packages whose upstream has a newer (or older) version"
)]
pub struct CliArgs {
    // Source options
    /// Scan an existing directory instead of cloning the repository
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Manifest repository to clone
    #[arg(long, env = "REPO_URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Directory the repository is cloned into
    #[arg(long, default_value = "./repo")]
    pub workdir: PathBuf,

    /// Keep the cloned repository after the run
    #[arg(long)]
    pub keep: bool,

    // Delivery options
    /// Webhook endpoint receiving the report
    #[arg(long, env = "WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Line placed before the report header (e.g. a role mention)
    #[arg(long, env = "MENTION")]
    pub mention: Option<String>,

    /// Maximum characters per delivered message
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK)]
    pub max_chunk: usize,

    /// Print the report to stdout instead of posting it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Provider credentials
    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitLab API token
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: Option<String>,

    /// Codeberg API token
    #[arg(long, env = "CODEBERG_TOKEN", hide_env_values = true)]
    pub codeberg_token: Option<String>,

    /// Delay between packages in milliseconds
    #[arg(long, default_value_t = 800)]
    pub throttle_ms: u64,

    // Output options
    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
