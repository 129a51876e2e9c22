//! Source references embedded in a site configuration
//!
//! A spec site's configuration points back at its source repository either as a
//! plain URL string or as a structured `{host, account, repo}` object. The two
//! shapes become an explicit enum here, resolved with an exhaustive match.

use crate::fingerprint;
use serde_json::Value;

/// The repository pointer extracted from a site's configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReference {
    /// A plain repository URL, treated as already canonical
    Url(String),
    /// A structured host/account/repo triple
    Structured {
        host: String,
        account: String,
        repo: String,
    },
}

impl SourceReference {
    /// Extract a source reference from a configuration value
    ///
    /// Looks up the `source` key of the configuration object (the first spec
    /// entry's `source` when the configuration carries a `specs` array).
    /// Returns `None` when the field is absent or has neither supported shape.
    pub fn from_config(config: &Value) -> Option<Self> {
        let source = config.get("source").or_else(|| {
            config
                .get("specs")
                .and_then(|specs| specs.get(0))
                .and_then(|spec| spec.get("source"))
        })?;

        Self::from_json(source)
    }

    /// Interpret a raw JSON value as a source reference
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(SourceReference::Url(s.clone())),
            Value::Object(obj) => {
                // All three fields are required for the structured shape
                let host = obj.get("host")?.as_str()?;
                let account = obj.get("account")?.as_str()?;
                let repo = obj.get("repo")?.as_str()?;
                Some(SourceReference::Structured {
                    host: host.to_string(),
                    account: account.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => None,
        }
    }

    /// Resolve into a canonical repository URL
    ///
    /// Plain URL strings pass through unchanged. Structured references are
    /// recognized only for `host == "github"` (case-sensitive); any other host
    /// yields `None` so the caller can fall back to the original input URL
    /// rather than guessing.
    pub fn resolve(&self) -> Option<String> {
        match self {
            SourceReference::Url(url) => Some(url.clone()),
            SourceReference::Structured { host, account, repo } => {
                if host == "github" {
                    Some(format!("https://github.com/{}/{}", account, repo))
                } else {
                    None
                }
            }
        }
    }
}

/// Whether a declared repository URL points at the original tool's repository
pub fn is_original_tool_repo(url: &str) -> bool {
    url.contains(fingerprint::ORIGINAL_REPO_PATH)
}
