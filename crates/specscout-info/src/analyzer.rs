//! Analysis orchestration
//!
//! One `analyze` call walks the whole pipeline: normalize the input, fetch the
//! landing page (unless the input already is a repository URL), extract and
//! resolve the source reference, fetch the manifest over the branch-candidate
//! chain, classify, then run the auxiliary checks. Every network operation is
//! awaited in sequence; auxiliary failures land in their own result field
//! instead of aborting the run.

use crate::client::HttpClient;
use crate::error::{Error, Result};
use crate::manifest::fetch_manifest;
use crate::pdf::check_pdf;
use crate::site::fetch_landing_page;
use crate::types::{AnalysisResult, RepoOrigin};
use crate::versions::probe_version_archive;
use chrono::{DateTime, Utc};
use specscout_core::{
    classify, looks_like_repo_url, manifest_candidates, normalize_site_url, SourceReference,
};

/// Main entry point for analyzing a documentation site
pub struct Analyzer {
    client: HttpClient,
    probe: HttpClient,
}

impl Analyzer {
    /// Create an analyzer with default clients
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients cannot be initialized.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            probe: HttpClient::probe()?,
        })
    }

    /// Analyze a site given a URL or bare domain
    ///
    /// Only an unreachable landing page with no repository-URL fallback
    /// interpretation aborts the run; everything else degrades to per-field
    /// results.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisResult> {
        let site_url = normalize_site_url(input);
        tracing::info!(site = %site_url, "analyzing site");

        let (repository, repo_origin, last_modified) = self.resolve_repository(&site_url).await?;

        let (manifest, manifest_error) = match &repository {
            Some(repo) => match fetch_manifest(&self.client, repo).await {
                Ok(manifest) => (Some(manifest), None),
                Err(e) => {
                    tracing::warn!(repo = %repo, error = %e, "manifest unavailable");
                    (None, Some(e.to_string()))
                }
            },
            None => (None, Some("no repository resolved".to_string())),
        };

        let classification = classify(manifest.as_ref());
        tracing::info!(
            tool = classification.tool_name(),
            version = classification.version.as_deref().unwrap_or("undetermined"),
            "classified"
        );

        // Independent checks, deliberately run one at a time
        let pdf = check_pdf(&self.probe, &site_url).await;
        let version_archive = probe_version_archive(&self.probe, &site_url).await;

        Ok(AnalysisResult {
            site_url,
            repository,
            repo_origin,
            classification,
            manifest_error,
            pdf,
            version_archive,
            last_modified,
        })
    }

    /// Determine the repository the site belongs to
    ///
    /// Repository-URL inputs skip the landing-page fetch entirely. Otherwise
    /// the page is fetched and its embedded configuration resolved; a missing
    /// or unsupported source reference falls back to the input URL itself. A
    /// failed fetch is fatal only when the input has no repository
    /// interpretation either.
    async fn resolve_repository(
        &self,
        site_url: &str,
    ) -> Result<(Option<String>, Option<RepoOrigin>, Option<DateTime<Utc>>)> {
        if looks_like_repo_url(site_url) {
            return Ok((Some(site_url.to_string()), Some(RepoOrigin::Input), None));
        }

        let page = match fetch_landing_page(&self.client, site_url).await {
            Ok(page) => page,
            Err(e) => {
                if manifest_candidates(site_url).is_some() {
                    tracing::debug!(error = %e, "page fetch failed, treating input as repository");
                    return Ok((Some(site_url.to_string()), Some(RepoOrigin::Input), None));
                }
                return Err(Error::SiteUnreachable {
                    url: site_url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let resolved = page
            .config()
            .and_then(|config| SourceReference::from_config(&config))
            .and_then(|source| source.resolve());

        match resolved {
            Some(repo) => Ok((Some(repo), Some(RepoOrigin::Config), page.last_modified)),
            None => {
                // Unsupported host or absent config: best-effort fallback
                Ok((
                    Some(site_url.to_string()),
                    Some(RepoOrigin::Fallback),
                    page.last_modified,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repo_input_short_circuits_page_fetch() {
        let analyzer = Analyzer::new().unwrap();
        let (repo, origin, last_modified) = analyzer
            .resolve_repository("https://github.com/foo/bar")
            .await
            .unwrap();
        assert_eq!(repo.as_deref(), Some("https://github.com/foo/bar"));
        assert_eq!(origin, Some(RepoOrigin::Input));
        assert_eq!(last_modified, None);
    }

    #[tokio::test]
    async fn test_unreachable_site_is_fatal() {
        let analyzer = Analyzer::new().unwrap();
        let result = analyzer.resolve_repository("https://specscout.invalid").await;
        assert!(matches!(result, Err(Error::SiteUnreachable { .. })));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_analyze_live_site() {
        let analyzer = Analyzer::new().unwrap();
        let result = analyzer
            .analyze("https://identity.foundation/spec-up")
            .await
            .unwrap();
        assert!(result.repository.is_some());
    }
}
