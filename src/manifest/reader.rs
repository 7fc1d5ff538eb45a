//! Manifest reader for `{ name, version, source.url }` JSON files

use crate::domain::{ManifestRecord, RawManifest};
use crate::error::ManifestError;
use std::path::Path;

/// Parse manifest content read from `path`
pub fn parse_manifest(content: &str, path: &Path) -> Result<ManifestRecord, ManifestError> {
    let raw: RawManifest = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;
    Ok(ManifestRecord::from_raw(raw, path))
}

/// Read and parse a manifest file
pub fn read_manifest(path: &Path) -> Result<ManifestRecord, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_manifest(&content, path)
}
