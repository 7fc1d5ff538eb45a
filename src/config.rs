//! Run configuration
//!
//! Built once at startup from CLI arguments (which fall back to environment
//! variables) and passed explicitly to the resolver and the dispatcher.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Default spacing between successive package resolutions
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(800);

/// Default maximum chunk length accepted by the sink (in characters)
pub const DEFAULT_MAX_CHUNK: usize = 1900;

/// Repository scanned when neither `--path` nor `--repo-url` is given
pub const DEFAULT_REPO_URL: &str = "https://github.com/Aperture-OS/testing-blink-repo.git";

/// Per-provider API credentials; absent tokens mean anonymous requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub github: Option<String>,
    pub gitlab: Option<String>,
    pub codeberg: Option<String>,
}

impl ProviderCredentials {
    /// Create credentials, treating blank tokens as absent
    pub fn new(
        github: Option<String>,
        gitlab: Option<String>,
        codeberg: Option<String>,
    ) -> Self {
        Self {
            github: non_blank(github),
            gitlab: non_blank(gitlab),
            codeberg: non_blank(codeberg),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Where the manifest tree comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Scan an existing directory in place
    Local(PathBuf),
    /// Clone `url` into `dest`, scan, then remove unless `keep`
    Clone {
        url: String,
        dest: PathBuf,
        keep: bool,
    },
}

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Webhook(String),
    Stdout,
}

/// Immutable configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceLocation,
    pub delivery: Delivery,
    pub credentials: ProviderCredentials,
    pub throttle: Duration,
    pub max_chunk: usize,
    /// Optional first line of the report (e.g. a role ping)
    pub mention: Option<String>,
    pub show_progress: bool,
}

impl Config {
    /// Build the configuration from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.verbose && args.quiet {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }

        if args.max_chunk == 0 {
            return Err(ConfigError::InvalidChunkSize {
                value: args.max_chunk,
            });
        }

        let delivery = if args.dry_run {
            Delivery::Stdout
        } else {
            match non_blank(args.webhook_url.clone()) {
                Some(url) => Delivery::Webhook(url),
                None => return Err(ConfigError::MissingWebhook),
            }
        };

        let source = match &args.path {
            Some(path) => SourceLocation::Local(path.clone()),
            None => SourceLocation::Clone {
                url: args.repo_url.clone(),
                dest: args.workdir.clone(),
                keep: args.keep,
            },
        };

        Ok(Self {
            source,
            delivery,
            credentials: ProviderCredentials::new(
                args.github_token.clone(),
                args.gitlab_token.clone(),
                args.codeberg_token.clone(),
            ),
            throttle: Duration::from_millis(args.throttle_ms),
            max_chunk: args.max_chunk,
            mention: non_blank(args.mention.clone()),
            show_progress: !args.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn make_args(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(args)
    }

    #[test]
    fn test_credentials_blank_is_absent() {
        let creds = ProviderCredentials::new(Some("  ".to_string()), Some("glpat".to_string()), None);
        assert_eq!(creds.github, None);
        assert_eq!(creds.gitlab.as_deref(), Some("glpat"));
        assert_eq!(creds.codeberg, None);
    }

    #[test]
    fn test_missing_webhook_is_error() {
        let args = make_args(&["tagwatch", "--webhook-url", ""]);
        let err = Config::from_cli(&args).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebhook));
    }

    #[test]
    fn test_dry_run_does_not_need_webhook() {
        let args = make_args(&["tagwatch", "--dry-run", "--webhook-url", ""]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(config.delivery, Delivery::Stdout);
    }

    #[test]
    fn test_webhook_delivery() {
        let args = make_args(&["tagwatch", "--webhook-url", "https://hooks.example/abc"]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(
            config.delivery,
            Delivery::Webhook("https://hooks.example/abc".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let args = make_args(&["tagwatch", "--dry-run"]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(config.throttle, DEFAULT_THROTTLE);
        assert_eq!(config.max_chunk, DEFAULT_MAX_CHUNK);
        assert!(config.show_progress);
    }

    #[test]
    fn test_local_path_source() {
        let args = make_args(&["tagwatch", "--dry-run", "--path", "/srv/pkgs"]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(config.source, SourceLocation::Local(PathBuf::from("/srv/pkgs")));
    }

    #[test]
    fn test_clone_source() {
        let args = make_args(&[
            "tagwatch",
            "--dry-run",
            "--repo-url",
            "https://example.org/pkgs.git",
            "--workdir",
            "/tmp/pkgs",
            "--keep",
        ]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(
            config.source,
            SourceLocation::Clone {
                url: "https://example.org/pkgs.git".to_string(),
                dest: PathBuf::from("/tmp/pkgs"),
                keep: true,
            }
        );
    }

    #[test]
    fn test_zero_chunk_rejected() {
        let args = make_args(&["tagwatch", "--dry-run", "--max-chunk", "0"]);
        assert!(matches!(
            Config::from_cli(&args).unwrap_err(),
            ConfigError::InvalidChunkSize { value: 0 }
        ));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let args = make_args(&["tagwatch", "--dry-run", "--quiet", "--verbose"]);
        assert!(matches!(
            Config::from_cli(&args).unwrap_err(),
            ConfigError::ConflictingOptions { .. }
        ));
    }
}
