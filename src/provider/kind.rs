//! Upstream provider families and their URL / request rules

use crate::config::ProviderCredentials;
use crate::error::ResolveError;
use crate::provider::client::AuthHeader;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `github.com/<owner>/<repo>` followed by `/` or end of URL
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/?#]+)/([^/?#]+)(?:[/?#]|$)").unwrap());

/// `gitlab.com/<group>/<project>` followed by `/` or end of URL
static GITLAB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gitlab\.com/([^/?#]+/[^/?#]+)(?:[/?#]|$)").unwrap());

/// `codeberg.org/<owner>/<repo>` followed by `/` or end of URL
static CODEBERG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"codeberg\.org/([^/?#]+)/([^/?#]+)(?:[/?#]|$)").unwrap());

/// Bare `major.minor.patch` anywhere in a URL
static EMBEDDED_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+)").unwrap());

/// Page size requested from tag listing endpoints
const TAGS_PER_PAGE: u32 = 100;

/// API base URLs for each provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub github: String,
    pub gitlab: String,
    pub codeberg: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            github: "https://api.github.com".to_string(),
            gitlab: "https://gitlab.com/api/v4".to_string(),
            codeberg: "https://codeberg.org/api/v1".to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Point every provider at the same base URL (used with mock servers)
    pub fn single(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            github: base.clone(),
            gitlab: base.clone(),
            codeberg: base,
        }
    }
}

/// Supported upstream version sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    GitHub,
    GitLab,
    Codeberg,
    /// No listing API: the version is read from the URL itself
    UrlEmbedded,
}

/// Provider-specific identifier of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectPath {
    /// `owner` / `repo` pair (GitHub, Codeberg)
    OwnerRepo { owner: String, repo: String },
    /// Full project path, `group/project` (GitLab)
    Project(String),
}

impl Provider {
    /// Providers with a listing API, in detection order
    pub fn api_providers() -> &'static [Provider] {
        &[Provider::GitHub, Provider::GitLab, Provider::Codeberg]
    }

    /// Host fragment identifying this provider in a source URL
    pub fn host_fragment(&self) -> Option<&'static str> {
        match self {
            Provider::GitHub => Some("github.com"),
            Provider::GitLab => Some("gitlab.com"),
            Provider::Codeberg => Some("codeberg.org"),
            Provider::UrlEmbedded => None,
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::GitHub => "GitHub",
            Provider::GitLab => "GitLab",
            Provider::Codeberg => "Codeberg",
            Provider::UrlEmbedded => "URL",
        }
    }

    /// First provider whose host fragment occurs in `url`
    pub fn detect(url: &str) -> Provider {
        Self::api_providers()
            .iter()
            .copied()
            .find(|p| p.host_fragment().is_some_and(|host| url.contains(host)))
            .unwrap_or(Provider::UrlEmbedded)
    }

    /// Extract the repository identifier from a source URL
    pub fn project_path(&self, url: &str) -> Result<ProjectPath, ResolveError> {
        let malformed = || ResolveError::malformed_url(self.display_name(), url);

        match self {
            Provider::GitHub | Provider::Codeberg => {
                let re = if *self == Provider::GitHub {
                    &*GITHUB_RE
                } else {
                    &*CODEBERG_RE
                };
                let caps = re.captures(url).ok_or_else(malformed)?;
                Ok(ProjectPath::OwnerRepo {
                    owner: caps[1].to_string(),
                    repo: strip_git_suffix(&caps[2]).to_string(),
                })
            }
            Provider::GitLab => {
                let caps = GITLAB_RE.captures(url).ok_or_else(malformed)?;
                Ok(ProjectPath::Project(strip_git_suffix(&caps[1]).to_string()))
            }
            Provider::UrlEmbedded => Err(malformed()),
        }
    }

    /// Tag listing URL for a project, `None` for the URL-embedded fallback
    pub fn tags_url(&self, endpoints: &ProviderEndpoints, path: &ProjectPath) -> Option<String> {
        match (self, path) {
            (Provider::GitHub, ProjectPath::OwnerRepo { owner, repo }) => Some(format!(
                "{}/repos/{}/{}/tags?per_page={}",
                endpoints.github, owner, repo, TAGS_PER_PAGE
            )),
            (Provider::Codeberg, ProjectPath::OwnerRepo { owner, repo }) => Some(format!(
                "{}/repos/{}/{}/tags?limit={}",
                endpoints.codeberg, owner, repo, TAGS_PER_PAGE
            )),
            (Provider::GitLab, ProjectPath::Project(project)) => Some(format!(
                "{}/projects/{}/repository/tags?per_page={}",
                endpoints.gitlab,
                project.replace('/', "%2F"),
                TAGS_PER_PAGE
            )),
            _ => None,
        }
    }

    /// Credential header for this provider, if a token is configured
    pub fn auth_header(&self, credentials: &ProviderCredentials) -> Option<AuthHeader> {
        match self {
            Provider::GitHub => credentials
                .github
                .as_ref()
                .map(|t| ("Authorization", format!("Bearer {}", t))),
            Provider::GitLab => credentials
                .gitlab
                .as_ref()
                .map(|t| ("PRIVATE-TOKEN", t.clone())),
            Provider::Codeberg => credentials
                .codeberg
                .as_ref()
                .map(|t| ("Authorization", format!("token {}", t))),
            Provider::UrlEmbedded => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn strip_git_suffix(segment: &str) -> &str {
    segment.strip_suffix(".git").unwrap_or(segment)
}

/// First bare `major.minor.patch` found in a URL
pub fn version_from_url(url: &str) -> Option<&str> {
    EMBEDDED_VERSION_RE.find(url).map(|m| m.as_str())
}
