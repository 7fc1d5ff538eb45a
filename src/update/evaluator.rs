//! Update evaluation: declared version vs. resolved upstream version

use crate::domain::{SemanticVersion, VersionChange};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Compare a declared version against the resolved latest version
///
/// Returns `None` when either side is not a semantic version or when both are
/// equal. A declared version ahead of upstream yields a change with
/// `is_regression` set (a retroceded package).
pub fn evaluate(declared: &str, latest: &str) -> Option<VersionChange> {
    let current = match SemanticVersion::parse(declared) {
        Ok(v) => v,
        Err(e) => {
            warn!("manifest has invalid declared version: {}", e);
            return None;
        }
    };
    let upstream = match SemanticVersion::parse(latest) {
        Ok(v) => v,
        Err(e) => {
            debug!("resolved version is not semver: {}", e);
            return None;
        }
    };

    let is_regression = match current.cmp(&upstream) {
        Ordering::Equal => return None,
        Ordering::Greater => true,
        Ordering::Less => false,
    };

    Some(VersionChange {
        current: declared.to_string(),
        latest: latest.to_string(),
        is_regression,
    })
}
