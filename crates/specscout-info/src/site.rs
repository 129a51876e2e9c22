//! Landing-page fetch and configuration extraction

use crate::client::HttpClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, LAST_MODIFIED};
use serde_json::Value;
use specscout_core::extract_config;

/// A fetched landing page with the metadata the analysis needs
#[derive(Debug, Clone)]
pub struct LandingPage {
    /// Raw HTML body
    pub body: String,
    /// `Last-Modified` response header, when parseable
    pub last_modified: Option<DateTime<Utc>>,
}

impl LandingPage {
    /// Extract the embedded configuration object, if the page carries one
    pub fn config(&self) -> Option<Value> {
        extract_config(&self.body).ok()
    }
}

/// Fetch a site's landing page
///
/// Requests `{base}/index.html` first; sites that only serve the document at
/// the bare base URL are retried there.
pub async fn fetch_landing_page(client: &HttpClient, base_url: &str) -> Result<LandingPage> {
    let index_url = format!("{}/index.html", base_url);

    let (body, headers) = match client.get_document(&index_url).await {
        Ok(page) => page,
        Err(first) => {
            tracing::debug!(url = %index_url, error = %first, "index.html fetch failed, retrying base URL");
            client.get_document(base_url).await.map_err(|_| first)?
        }
    };

    Ok(LandingPage {
        last_modified: parse_last_modified(&headers),
        body,
    })
}

fn parse_last_modified(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let raw = headers.get(LAST_MODIFIED)?.to_str().ok()?;
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
