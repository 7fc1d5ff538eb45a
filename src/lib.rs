//! tagwatch - upstream version checker library
//!
//! This library provides the update-detection pipeline for package-manifest
//! repositories:
//! - Manifest discovery and reading (`{ name, version, source.url }` JSON)
//! - Latest-version resolution from GitHub, GitLab, Codeberg or the URL itself
//! - Update / retroceded-version evaluation under semver rules
//! - Report aggregation and chunked delivery to a webhook

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod progress;
pub mod provider;
pub mod report;
pub mod source;
pub mod update;
