//! Site fetching and repository cross-referencing for specscout
//!
//! The network side of the tool: fetch a documentation site's landing page,
//! resolve the repository it was generated from, fetch that repository's
//! `package.json`, and run the auxiliary existence checks. Classification
//! itself is pure and lives in `specscout-core`.
//!
//! # Example
//!
//! ```no_run
//! use specscout_info::Analyzer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = Analyzer::new()?;
//!     let result = analyzer.analyze("example.github.io/my-spec").await?;
//!
//!     println!(
//!         "built with {} {}",
//!         result.classification.tool_name(),
//!         result.classification.version.as_deref().unwrap_or("(version undetermined)")
//!     );
//!     Ok(())
//! }
//! ```

mod analyzer;
mod client;
mod error;
mod manifest;
mod pdf;
mod site;
mod types;
mod versions;

pub use analyzer::Analyzer;
pub use client::HttpClient;
pub use error::{Error, Result};
pub use manifest::fetch_manifest;
pub use pdf::check_pdf;
pub use site::{fetch_landing_page, LandingPage};
pub use types::{AnalysisResult, PdfStatus, RepoOrigin, VersionArchive};
pub use versions::probe_version_archive;
