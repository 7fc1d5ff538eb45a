//! Working copy of the manifest repository
//!
//! This module provides:
//! - Scanning an existing local directory in place
//! - Shallow `git clone` into a scratch directory, removed after the run
//! - An existing destination is only replaced when it holds an earlier clone

use crate::config::SourceLocation;
use crate::error::SourceError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, error, info};

/// Supplies a readable directory tree to scan
pub trait RepoSource {
    /// Make the tree available and return its root
    fn prepare(&self) -> Result<PathBuf, SourceError>;

    /// Release the tree after the run
    fn cleanup(&self);
}

/// An existing directory, scanned in place and never removed
#[derive(Debug, Clone)]
pub struct LocalDir {
    path: PathBuf,
}

impl LocalDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RepoSource for LocalDir {
    fn prepare(&self) -> Result<PathBuf, SourceError> {
        if !self.path.is_dir() {
            return Err(SourceError::DirectoryNotFound {
                path: self.path.clone(),
            });
        }
        Ok(self.path.clone())
    }

    fn cleanup(&self) {}
}

/// A shallow clone made with the system `git`
#[derive(Debug, Clone)]
pub struct GitClone {
    url: String,
    dest: PathBuf,
    keep: bool,
}

impl GitClone {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
            keep,
        }
    }

    fn run_clone(&self) -> std::io::Result<Output> {
        Command::new("git")
            .args(["clone", "--depth", "1", "--quiet"])
            .arg(&self.url)
            .arg(&self.dest)
            .output()
    }
}

/// Whether `path` is a directory left behind by an earlier clone
fn is_previous_clone(path: &Path) -> bool {
    path.join(".git").is_dir()
}

fn is_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

fn remove_dir(path: &Path) -> Result<(), SourceError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|source| SourceError::RemoveFailed {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

impl RepoSource for GitClone {
    fn prepare(&self) -> Result<PathBuf, SourceError> {
        if is_previous_clone(&self.dest) {
            debug!("removing stale working copy {}", self.dest.display());
            remove_dir(&self.dest)?;
        } else if self.dest.exists() && !is_empty_dir(&self.dest) {
            return Err(SourceError::DestinationExists {
                path: self.dest.clone(),
            });
        }

        info!("cloning {} into {}", self.url, self.dest.display());
        let output = self.run_clone().map_err(|e| SourceError::CloneFailed {
            url: self.url.clone(),
            message: format!("failed to execute git: {}", e),
        })?;

        if !output.status.success() {
            return Err(SourceError::CloneFailed {
                url: self.url.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(self.dest.clone())
    }

    fn cleanup(&self) {
        if self.keep {
            debug!("keeping working copy {}", self.dest.display());
            return;
        }
        match remove_dir(&self.dest) {
            Ok(()) => debug!("removed working copy {}", self.dest.display()),
            Err(e) => error!("{}", e),
        }
    }
}

/// Build the source for a configured location
pub fn source_for(location: &SourceLocation) -> Box<dyn RepoSource> {
    match location {
        SourceLocation::Local(path) => Box::new(LocalDir::new(path)),
        SourceLocation::Clone { url, dest, keep } => Box::new(GitClone::new(url, dest, *keep)),
    }
}
