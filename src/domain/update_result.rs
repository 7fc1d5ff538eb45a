//! Update detection result types

use std::fmt;
use std::path::PathBuf;

/// Highest upstream version found for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLatest {
    /// Normalized version string (no `v` prefix)
    pub version: String,
}

impl ResolvedLatest {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Difference between a declared version and the resolved upstream version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Declared version, verbatim from the manifest
    pub current: String,
    /// Resolved upstream version
    pub latest: String,
    /// Declared version is ahead of upstream
    pub is_regression: bool,
}

/// A reportable difference for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// First directory segment of the manifest below the scan root
    pub repo_group: String,
    pub package_name: String,
    pub current_version: String,
    pub latest_version: String,
    /// Declared version is ahead of upstream (retroceded package)
    pub is_regression: bool,
    /// Manifest the outcome was derived from
    pub manifest_path: PathBuf,
}

impl UpdateOutcome {
    /// Create an outcome from an evaluated change
    pub fn new(
        repo_group: impl Into<String>,
        package_name: impl Into<String>,
        change: VersionChange,
        manifest_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_group: repo_group.into(),
            package_name: package_name.into(),
            current_version: change.current,
            latest_version: change.latest,
            is_regression: change.is_regression,
            manifest_path: manifest_path.into(),
        }
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} → {}",
            self.repo_group, self.package_name, self.current_version, self.latest_version
        )
    }
}

/// Reason why a package produced no outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Manifest has no source URL
    NoSourceUrl,
    /// Upstream resolution failed
    ResolveFailed(String),
    /// Declared or resolved version is not a semantic version
    InvalidVersion,
    /// Declared version matches upstream
    UpToDate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSourceUrl => write!(f, "no source URL"),
            SkipReason::ResolveFailed(msg) => write!(f, "resolve failed: {}", msg),
            SkipReason::InvalidVersion => write!(f, "invalid version"),
            SkipReason::UpToDate => write!(f, "up to date"),
        }
    }
}

/// A package that was scanned but not reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    pub package_name: String,
    pub manifest_path: PathBuf,
    pub reason: SkipReason,
}

impl SkipRecord {
    pub fn new(
        package_name: impl Into<String>,
        manifest_path: impl Into<PathBuf>,
        reason: SkipReason,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            manifest_path: manifest_path.into(),
            reason,
        }
    }
}
