//! Companion-PDF existence check

use crate::client::HttpClient;
use crate::types::PdfStatus;
use url::Url;

/// Redirect hops followed before giving up
const REDIRECT_LIMIT: usize = 5;

/// Check whether the site publishes a companion `{base}/index.pdf`
///
/// HEAD probe: 2xx means the PDF exists, 404 means it does not, a redirect is
/// followed (bounded) and the check repeated at the target. Any other status
/// or transport failure is reported as an error field value, never a run
/// failure.
pub async fn check_pdf(probe: &HttpClient, base_url: &str) -> PdfStatus {
    let mut url = format!("{}/index.pdf", base_url);

    for _ in 0..=REDIRECT_LIMIT {
        let (status, headers) = match probe.head(&url).await {
            Ok(response) => response,
            Err(e) => return PdfStatus::Error(e.to_string()),
        };

        if status.is_success() {
            return PdfStatus::Exists;
        }
        if status.as_u16() == 404 {
            return PdfStatus::Missing;
        }
        if status.is_redirection() {
            let location = headers
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok());
            match location.and_then(|loc| resolve_location(&url, loc)) {
                Some(next) => {
                    tracing::debug!(from = %url, to = %next, "following PDF redirect");
                    url = next;
                    continue;
                }
                None => return PdfStatus::Error(format!("redirect without location from {}", url)),
            }
        }

        return PdfStatus::Error(format!("unexpected status {} for {}", status.as_u16(), url));
    }

    PdfStatus::Error("too many redirects".to_string())
}

/// Resolve a possibly-relative Location header against the current URL
fn resolve_location(current: &str, location: &str) -> Option<String> {
    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_location() {
        let resolved = resolve_location("https://example.com/spec/index.pdf", "/files/index.pdf");
        assert_eq!(resolved.as_deref(), Some("https://example.com/files/index.pdf"));
    }

    #[test]
    fn test_resolve_absolute_location() {
        let resolved = resolve_location(
            "https://example.com/index.pdf",
            "https://cdn.example.com/index.pdf",
        );
        assert_eq!(resolved.as_deref(), Some("https://cdn.example.com/index.pdf"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_error_not_panic() {
        let probe = HttpClient::probe().unwrap();
        let status = check_pdf(&probe, "https://specscout.invalid").await;
        assert!(matches!(status, PdfStatus::Error(_)));
    }
}
