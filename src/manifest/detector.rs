//! Manifest file detection
//!
//! Walks the repository tree and returns every `.json` file in discovery
//! order. Entries are sorted by file name within each directory so that two
//! runs over the same tree report in the same order.

use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &[".git"];

/// Group used for manifests that sit directly in the scan root
pub const ROOT_GROUP: &str = ".";

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn is_manifest_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(".json"))
            .unwrap_or(false)
}

/// Detect all manifest files below `root`
pub fn detect_manifests(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e));

    let mut manifests = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if is_manifest_file(&entry) => manifests.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => debug!("skipping unreadable entry: {}", e),
        }
    }
    manifests
}

/// Owning group of a manifest: first directory segment below `root`
pub fn repo_group(root: &Path, manifest_path: &Path) -> String {
    let parent = manifest_path.parent().unwrap_or(manifest_path);
    let relative = parent.strip_prefix(root).unwrap_or(parent);

    relative
        .components()
        .find_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_else(|| ROOT_GROUP.to_string())
}
