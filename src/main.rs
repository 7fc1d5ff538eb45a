//! tagwatch - upstream version checker CLI
//!
//! Scans a package-manifest repository, resolves the latest upstream version
//! of every package and posts the findings to a chat webhook.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tagwatch::cli::CliArgs;
use tagwatch::config::Config;
use tagwatch::logging;
use tagwatch::orchestrator;
use tagwatch::report::print_summary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Values from .env fill in unset environment variables
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    logging::init(args.json_logs, logging::default_level(args.verbose));

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = Config::from_cli(&args)?;
    let result = orchestrator::run(&config).await?;

    if !args.quiet {
        let mut stderr = io::stderr().lock();
        print_summary(&result.scan.report, &mut stderr)?;
        stderr.flush()?;
    }

    if args.verbose && !result.scan.skipped.is_empty() {
        eprintln!();
        eprintln!("Skipped packages:");
        for skipped in &result.scan.skipped {
            eprintln!("  - {}: {}", skipped.package_name, skipped.reason);
        }
    }

    if result.dispatch.has_failures() {
        // Partial delivery
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
