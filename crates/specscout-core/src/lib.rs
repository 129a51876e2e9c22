//! Build-tool fingerprinting for spec-up / spec-up-t documentation sites
//!
//! This crate holds the pure logic of specscout: URL normalization, the
//! source-reference resolver, the manifest model and raw-content locator, the
//! embedded-configuration extractor, and the build-tool classifier. Nothing
//! here performs I/O; the network boundary lives in `specscout-info`.
//!
//! # Example
//!
//! ```
//! use specscout_core::{classify, Manifest};
//!
//! let manifest = Manifest::parse(r#"{ "name": "spec-up", "version": "0.10.6" }"#).unwrap();
//! let verdict = classify(Some(&manifest));
//! assert!(!verdict.is_successor);
//! assert_eq!(verdict.version.as_deref(), Some("0.10.6"));
//! ```

mod classifier;
mod error;
pub mod fingerprint;
mod literal;
mod manifest;
mod script;
mod source;
mod url;

pub use classifier::{classify, Classification};
pub use error::{Error, Result};
pub use literal::parse_literal;
pub use manifest::{manifest_candidates, Manifest, RepositoryField};
pub use script::extract_config;
pub use source::{is_original_tool_repo, SourceReference};
pub use url::{looks_like_repo_url, normalize_site_url};
