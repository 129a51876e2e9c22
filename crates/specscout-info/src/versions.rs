//! Historical version-archive probe

use crate::client::HttpClient;
use crate::types::VersionArchive;

/// Upper bound of the numbered `v1..vN` candidate run
const MAX_NUMBERED: u32 = 20;

/// Consecutive numbered misses tolerated before the run stops
const MISS_RUN_LIMIT: u32 = 3;

/// Literal directory names tried after the numbered run
const LITERAL_TAGS: &[&str] = &["latest", "draft", "current", "final"];

/// Probe the site's `versions/` archive
///
/// A lightweight existence request checks the directory itself; when present,
/// numbered candidates `v1..v20` are probed in order, stopping after
/// [`MISS_RUN_LIMIT`] consecutive misses to bound probe cost, followed by a
/// handful of literal tags. Probes run sequentially, one request at a time.
pub async fn probe_version_archive(probe: &HttpClient, base_url: &str) -> VersionArchive {
    let archive_url = format!("{}/versions/", base_url);
    if !directory_exists(probe, &archive_url).await {
        return VersionArchive::default();
    }

    let mut versions = Vec::new();
    let mut consecutive_misses = 0;

    for n in 1..=MAX_NUMBERED {
        let name = format!("v{}", n);
        if directory_exists(probe, &format!("{}{}/", archive_url, name)).await {
            versions.push(name);
            consecutive_misses = 0;
        } else {
            consecutive_misses += 1;
            if consecutive_misses >= MISS_RUN_LIMIT {
                break;
            }
        }
    }

    for tag in LITERAL_TAGS {
        if directory_exists(probe, &format!("{}{}/", archive_url, tag)).await {
            versions.push(tag.to_string());
        }
    }

    VersionArchive {
        exists: true,
        count: versions.len(),
        versions,
    }
}

/// Existence check for a directory URL
///
/// Static hosts answer directory HEADs with 2xx, or with a redirect onto the
/// index document; both count as present. Transport failures count as absent.
async fn directory_exists(probe: &HttpClient, url: &str) -> bool {
    match probe.head(url).await {
        Ok((status, _)) => status.is_success() || status.is_redirection(),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "directory probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_reports_no_archive() {
        let probe = HttpClient::probe().unwrap();
        let archive = probe_version_archive(&probe, "https://specscout.invalid").await;
        assert!(!archive.exists);
        assert_eq!(archive.count, 0);
        assert!(archive.versions.is_empty());
    }
}
