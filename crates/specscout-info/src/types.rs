//! Aggregate result types for a site analysis

use chrono::{DateTime, Utc};
use serde::Serialize;
use specscout_core::Classification;

/// How the analyzed repository URL was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoOrigin {
    /// Resolved from the site configuration's source reference
    Config,
    /// The input itself was a repository URL
    Input,
    /// Best-effort fallback: the input URL stands in for the repository
    Fallback,
}

/// Outcome of the companion-PDF existence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum PdfStatus {
    Exists,
    Missing,
    /// Transport failure or unexpected status; not fatal to the run
    Error(String),
}

/// Outcome of the historical version-archive probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionArchive {
    /// Whether a `versions/` directory exists at all
    pub exists: bool,
    /// Number of version directories found
    pub count: usize,
    /// Version directory names, in probe order
    pub versions: Vec<String>,
}

/// Aggregate result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Normalized site URL the analysis ran against
    pub site_url: String,
    /// Repository the site was traced back to, when one could be determined
    pub repository: Option<String>,
    /// How the repository URL was obtained
    pub repo_origin: Option<RepoOrigin>,
    /// Build-tool verdict
    pub classification: Classification,
    /// Why the manifest could not be used, when classification fell back to
    /// the null-manifest default
    pub manifest_error: Option<String>,
    /// Companion `index.pdf` check
    pub pdf: PdfStatus,
    /// Historical `versions/` archive probe
    pub version_archive: VersionArchive,
    /// `Last-Modified` header of the landing page, when present
    pub last_modified: Option<DateTime<Utc>>,
}
