//! Upstream resolver: source URL → latest semantic version

use crate::config::ProviderCredentials;
use crate::domain::{latest_of, ResolvedLatest};
use crate::error::ResolveError;
use crate::provider::client::HttpClient;
use crate::provider::kind::{version_from_url, Provider, ProviderEndpoints};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// One entry of a tag listing; every supported provider names it `name`
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Resolves the latest upstream version of a package from its source URL
#[async_trait]
pub trait VersionSource: Send + Sync {
    async fn resolve(&self, source_url: &str) -> Result<ResolvedLatest, ResolveError>;
}

/// Resolver backed by the provider tag listing APIs
pub struct UpstreamResolver {
    client: HttpClient,
    endpoints: ProviderEndpoints,
    credentials: ProviderCredentials,
}

impl UpstreamResolver {
    /// Create a resolver against the public provider APIs
    pub fn new(client: HttpClient, credentials: ProviderCredentials) -> Self {
        Self::with_endpoints(client, credentials, ProviderEndpoints::default())
    }

    /// Create a resolver against custom API base URLs
    pub fn with_endpoints(
        client: HttpClient,
        credentials: ProviderCredentials,
        endpoints: ProviderEndpoints,
    ) -> Self {
        Self {
            client,
            endpoints,
            credentials,
        }
    }

    async fn resolve_from_api(
        &self,
        provider: Provider,
        source_url: &str,
    ) -> Result<ResolvedLatest, ResolveError> {
        let project = provider.project_path(source_url)?;
        let url = provider
            .tags_url(&self.endpoints, &project)
            .ok_or_else(|| ResolveError::malformed_url(provider.display_name(), source_url))?;

        let tags: Vec<TagEntry> = self
            .client
            .get_json(&url, provider.auth_header(&self.credentials), provider.display_name())
            .await?;

        let latest = latest_of(tags.iter().map(|t| t.name.as_str())).ok_or(
            ResolveError::NoValidVersions {
                provider: provider.display_name(),
            },
        )?;

        debug!(
            "{} listed {} tags for {}, latest {}",
            provider,
            tags.len(),
            source_url,
            latest
        );
        Ok(ResolvedLatest::new(latest.to_string()))
    }
}

/// Fallback for direct-download URLs: take the version embedded in the URL
pub fn resolve_embedded(source_url: &str) -> Result<ResolvedLatest, ResolveError> {
    let version = version_from_url(source_url).ok_or_else(|| ResolveError::NoVersionInUrl {
        url: source_url.to_string(),
    })?;
    debug!("extracted version {} from URL {}", version, source_url);
    Ok(ResolvedLatest::new(version))
}

#[async_trait]
impl VersionSource for UpstreamResolver {
    async fn resolve(&self, source_url: &str) -> Result<ResolvedLatest, ResolveError> {
        match Provider::detect(source_url) {
            Provider::UrlEmbedded => resolve_embedded(source_url),
            provider => self.resolve_from_api(provider, source_url).await,
        }
    }
}
