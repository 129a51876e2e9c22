//! Manifest fetching over the ordered branch-candidate chain

use crate::client::HttpClient;
use crate::error::{Error, Result};
use specscout_core::{manifest_candidates, Manifest};

/// Fetch and parse a repository's `package.json`
///
/// Candidates (the `main` branch, then `master`) are tried strictly in order;
/// the first one that fetches and parses wins. A miss on an earlier candidate
/// is not an error — only the last attempt's failure is surfaced when every
/// candidate fails. Non-GitHub repository URLs yield no candidates.
pub async fn fetch_manifest(client: &HttpClient, repo_url: &str) -> Result<Manifest> {
    let candidates = manifest_candidates(repo_url).ok_or_else(|| Error::ManifestUnavailable {
        repo: repo_url.to_string(),
        last_error: "not a GitHub repository URL".to_string(),
    })?;

    let mut last_error = String::new();
    for candidate in &candidates {
        match try_fetch_candidate(client, candidate).await {
            Ok(manifest) => {
                tracing::debug!(url = %candidate, "manifest fetched");
                return Ok(manifest);
            }
            Err(e) => {
                tracing::debug!(url = %candidate, error = %e, "manifest candidate missed");
                last_error = e.to_string();
            }
        }
    }

    Err(Error::ManifestUnavailable {
        repo: repo_url.to_string(),
        last_error,
    })
}

async fn try_fetch_candidate(client: &HttpClient, url: &str) -> Result<Manifest> {
    let body = client.get_text(url).await?;
    Ok(Manifest::parse(&body)?)
}
