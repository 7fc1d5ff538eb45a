//! Manifest discovery and reading
//!
//! This module provides:
//! - Directory walk returning manifest files in discovery order
//! - Owning-group derivation from a manifest's location
//! - JSON manifest reader

mod detector;
mod reader;

pub use detector::{detect_manifests, repo_group, ROOT_GROUP};
pub use reader::{parse_manifest, read_manifest};
