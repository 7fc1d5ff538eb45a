//! Core domain models for tagwatch
//!
//! This module contains the fundamental types used throughout the application:
//! - Semantic version values and their ordering
//! - Manifest records read from the package repository
//! - Resolution and evaluation results

mod manifest_record;
mod update_result;
mod version;

pub(crate) use manifest_record::RawManifest;
pub use manifest_record::ManifestRecord;
pub use update_result::{ResolvedLatest, SkipReason, SkipRecord, UpdateOutcome, VersionChange};
pub use version::{latest_of, SemanticVersion};
