//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: A string that is not a semantic version
//! - ManifestError: Issues reading or parsing a manifest file
//! - ResolveError: Issues resolving the latest upstream version of a package
//! - DispatchError: Issues delivering a report chunk to the sink
//! - SourceError: Issues obtaining a local copy of the manifest repository
//! - ConfigError: Issues with the run configuration
//!
//! Only `SourceError` and `ConfigError` end a run. Everything else is
//! per-package or per-chunk and is logged and skipped by the orchestrator.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Working copy related errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// HTTP client construction errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Sink construction errors
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// A string that could not be parsed as a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid semantic version '{input}': {message}")]
pub struct VersionError {
    pub input: String,
    pub message: String,
}

impl VersionError {
    /// Creates a new VersionError
    pub fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors raised while resolving the latest upstream version of a package
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The source URL does not have the shape the provider expects
    #[error("malformed {provider} URL: {url}")]
    MalformedUrl { provider: &'static str, url: String },

    /// The provider answered with a non-success status
    #[error("{provider} API returned status {status} for {url}")]
    Status {
        provider: &'static str,
        url: String,
        status: u16,
    },

    /// The request never produced a response
    #[error("request to {provider} failed: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    /// The response body could not be decoded
    #[error("invalid response from {provider}: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },

    /// Tags were listed but none of them is a semantic version
    #[error("no valid versions found in {provider} tag listing")]
    NoValidVersions { provider: &'static str },

    /// Fallback path: the URL itself carries no version
    #[error("no version embedded in URL: {url}")]
    NoVersionInUrl { url: String },
}

/// Errors raised while delivering a chunk
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The sink answered with a non-success status
    #[error("sink returned status {status}")]
    Status { status: u16 },

    /// The request never produced a response
    #[error("failed to reach sink: {message}")]
    Network { message: String },

    /// Writing to a local sink failed
    #[error("failed to write chunk: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Errors raised while obtaining the working copy
#[derive(Error, Debug)]
pub enum SourceError {
    /// Directory to scan does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Clone command could not be executed or exited non-zero
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Clone destination holds something other than an earlier clone
    #[error("refusing to clone into {path}: directory exists and is not a previous clone")]
    DestinationExists { path: PathBuf },

    /// Stale clone could not be removed before cloning
    #[error("failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Delivery needs a webhook endpoint
    #[error("WEBHOOK_URL not set: a webhook endpoint is required unless --dry-run is given")]
    MissingWebhook,

    /// Chunk size of zero can never make progress
    #[error("invalid chunk size {value}: must be greater than zero")]
    InvalidChunkSize { value: usize },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new MalformedUrl error
    pub fn malformed_url(provider: &'static str, url: impl Into<String>) -> Self {
        ResolveError::MalformedUrl {
            provider,
            url: url.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        ResolveError::Network {
            provider,
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(provider: &'static str, message: impl Into<String>) -> Self {
        ResolveError::InvalidResponse {
            provider,
            message: message.into(),
        }
    }
}
