//! Upstream version providers
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Provider detection and per-provider request rules (GitHub, GitLab, Codeberg)
//! - URL-embedded version fallback for direct-download sources
//! - The upstream resolver returning the highest semantic version

mod client;
mod kind;
mod resolver;

pub use client::{AuthHeader, HttpClient};
pub use kind::{version_from_url, ProjectPath, Provider, ProviderEndpoints};
pub use resolver::{resolve_embedded, UpstreamResolver, VersionSource};
