//! Semantic version values
//!
//! Wraps `semver::Version` so that tag names such as `v1.2.3` parse the same
//! as `1.2.3`, and so that ordering follows semver precedence (build metadata
//! never makes two versions differ).

use crate::error::VersionError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed `major.minor.patch[-pre][+build]` version
#[derive(Debug, Clone)]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    /// Parse a version string, accepting one leading `v` or `V`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let bare = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        semver::Version::parse(bare)
            .map(SemanticVersion)
            .map_err(|e| VersionError::new(input, e.to_string()))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Returns true if this version carries a pre-release suffix
    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }
}

/// Highest version among `candidates`, ignoring entries that do not parse
pub fn latest_of<'a, I>(candidates: I) -> Option<SemanticVersion>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter_map(|c| SemanticVersion::parse(c).ok())
        .max()
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
