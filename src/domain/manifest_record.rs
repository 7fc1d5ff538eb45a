//! Package manifest records as read from the manifest repository

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One package description file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Package name
    pub name: String,
    /// Version declared by the manifest
    pub declared_version: String,
    /// Upstream source URL, if the manifest has one
    pub source_url: Option<String>,
    /// Path of the manifest file
    pub file_path: PathBuf,
}

/// On-disk shape: `{ "name", "version", "source": { "url" } }`
#[derive(Debug, Deserialize)]
pub(crate) struct RawManifest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    source: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    url: Option<String>,
}

impl ManifestRecord {
    /// Create a new ManifestRecord
    pub fn new(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        source_url: Option<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            source_url,
            file_path: file_path.into(),
        }
    }

    pub(crate) fn from_raw(raw: RawManifest, file_path: &Path) -> Self {
        let source_url = raw
            .source
            .and_then(|s| s.url)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Self::new(raw.name, raw.version, source_url, file_path)
    }

    /// Source URL, when present and non-empty
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }
}
