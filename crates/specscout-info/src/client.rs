//! HTTP client wrapper

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::time::Duration;

/// HTTP client wrapper for page, manifest and existence requests
///
/// Two configurations exist: the default client (30 s timeout, automatic
/// redirects) for document and manifest fetches, and the probe client (10 s
/// timeout, redirects NOT followed) used by the existence checkers, which
/// handle redirects themselves.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client for document and manifest fetches
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("specscout/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Create a probe client for lightweight existence checks
    ///
    /// Shorter timeout, and redirects are surfaced to the caller instead of
    /// being followed automatically.
    pub fn probe() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("specscout/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }

    /// GET a document, returning its body and response headers
    pub async fn get_document(&self, url: &str) -> Result<(String, HeaderMap)> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok((body, headers))
    }

    /// GET a document and return only its body text
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let (body, _) = self.get_document(url).await?;
        Ok(body)
    }

    /// GET a JSON document and deserialize it
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let json = response.json().await?;
        Ok(json)
    }

    /// HEAD a URL, returning the status and headers without a body
    pub async fn head(&self, url: &str) -> Result<(StatusCode, HeaderMap)> {
        let response = self.client.head(url).send().await?;
        Ok((response.status(), response.headers().clone()))
    }
}
