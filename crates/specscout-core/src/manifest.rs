//! Package manifest model and raw-content locator

use crate::fingerprint::DEFAULT_BRANCHES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed `package.json` manifest
///
/// Every field is optional; a manifest missing a signal simply fails to match
/// the corresponding classifier rule.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,

    pub dependencies: HashMap<String, String>,

    #[serde(rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,

    pub repository: Option<RepositoryField>,

    pub scripts: HashMap<String, String>,
}

/// The `repository` field of a manifest, either a bare URL string or an
/// object carrying a `url` key
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Detailed {
        url: String,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        repo_type: Option<String>,
    },
}

impl RepositoryField {
    /// The declared repository URL regardless of shape
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Detailed { url, .. } => url,
        }
    }
}

impl Manifest {
    /// Parse a manifest from raw JSON text
    pub fn parse(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a dependency range string across runtime and dev dependencies
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .map(String::as_str)
    }

    /// Whether a dependency is declared in either table
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependency(name).is_some()
    }

    /// The declared repository URL, if any
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().map(RepositoryField::url)
    }
}

/// Produce the ordered raw-manifest candidate URLs for a GitHub repository
///
/// Accepts `https://github.com/{org}/{repo}` with an optional `.git` suffix or
/// trailing path segments; returns the `package.json` raw-content URL on each
/// default branch, `main` first then `master`. Non-GitHub URLs yield `None`.
pub fn manifest_candidates(repo_url: &str) -> Option<Vec<String>> {
    let (org, repo) = split_github_path(repo_url)?;

    Some(
        DEFAULT_BRANCHES
            .iter()
            .map(|branch| {
                format!(
                    "https://raw.githubusercontent.com/{}/{}/{}/package.json",
                    org, repo, branch
                )
            })
            .collect(),
    )
}

/// Extract the `{org}/{repo}` pair from a GitHub repository URL
fn split_github_path(repo_url: &str) -> Option<(&str, &str)> {
    let rest = repo_url
        .strip_prefix("https://github.com/")
        .or_else(|| repo_url.strip_prefix("http://github.com/"))?;

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let org = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if org.is_empty() || repo.is_empty() {
        return None;
    }

    Some((org, repo))
}
