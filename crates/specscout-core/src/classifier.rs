//! Build-tool classification — the identification heuristic
//!
//! Given a fetched package manifest, decide whether the site was produced by
//! the original tool (`spec-up`) or its successor (`spec-up-t`), and which
//! version. The rules form a first-match-wins chain; absence of signal always
//! degrades to a fallback, never to an error.

use crate::fingerprint::{
    CORE_DEPENDENCIES, FINGERPRINT_SCRIPTS, MARKDOWN_PROCESSOR, ORIGINAL_TOOL, SCRIPT_SIGNATURE,
    SUCCESSOR_TOOL, TASK_RUNNER, TYPICAL_DEPENDENCIES, TYPICAL_MATCH_THRESHOLD,
};
use crate::manifest::Manifest;
use crate::source::is_original_tool_repo;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which build tool produced the site, and which version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// `true` for the successor tool, `false` for the original
    pub is_successor: bool,
    /// Declared or inferred version; `None` when undetermined.
    ///
    /// Successor versions are the declared range string verbatim (`^`/`~`/`*`
    /// prefixes included); original-tool versions inferred from the core
    /// dependency signature alone carry a `~` marker for "approximate".
    pub version: Option<String>,
}

impl Classification {
    /// Display name of the classified tool
    pub fn tool_name(&self) -> &'static str {
        if self.is_successor {
            SUCCESSOR_TOOL
        } else {
            ORIGINAL_TOOL
        }
    }
}

/// Classify a manifest (or its absence) into a build-tool verdict
///
/// Decision order, each rule evaluated only when the previous ones are
/// inconclusive:
/// 1. declared `spec-up-t` dependency — authoritative for the successor
/// 2. manifest `name` equals the original tool's package name
/// 3. script fingerprint in the `edit`/`render` entries
/// 4. dependency fingerprint: all core deps present and enough typical matches
/// 5. declared `repository.url` pointing at the original tool's repository
/// 6. default: successor, version undetermined
///
/// Pure function of its input; classifying the same manifest twice yields the
/// same result.
pub fn classify(manifest: Option<&Manifest>) -> Classification {
    let manifest = match manifest {
        Some(m) => m,
        None => {
            return Classification {
                is_successor: true,
                version: None,
            }
        }
    };

    // Rule 1: an explicit successor dependency wins outright, range verbatim
    if let Some(range) = manifest.dependency(SUCCESSOR_TOOL) {
        return Classification {
            is_successor: true,
            version: Some(range.to_string()),
        };
    }

    // Rule 2: the manifest is the original tool itself
    if manifest.name.as_deref() == Some(ORIGINAL_TOOL) {
        return Classification {
            is_successor: false,
            version: manifest.version.clone(),
        };
    }

    // Rule 3: script wiring characteristic of the original tool
    if has_script_fingerprint(manifest) {
        return Classification {
            is_successor: false,
            version: original_version(manifest),
        };
    }

    // Rule 4: weighted dependency fingerprint
    if matches_dependency_fingerprint(manifest) {
        return Classification {
            is_successor: false,
            version: original_version(manifest),
        };
    }

    // Rule 5: declared repository points back at the original tool
    if manifest.repository_url().is_some_and(is_original_tool_repo) {
        return Classification {
            is_successor: false,
            version: original_version(manifest),
        };
    }

    Classification {
        is_successor: true,
        version: None,
    }
}

/// Whether an `edit` or `render` script carries the original tool's signature
fn has_script_fingerprint(manifest: &Manifest) -> bool {
    FINGERPRINT_SCRIPTS.iter().any(|name| {
        manifest
            .scripts
            .get(*name)
            .is_some_and(|command| command.contains(SCRIPT_SIGNATURE))
    })
}

/// Whether the dependency tables match the original tool's fingerprint
///
/// All core dependencies must be present, and at least
/// [`TYPICAL_MATCH_THRESHOLD`] of the typical list. The threshold tolerates
/// dependency drift across versions of the tool without matching manifests
/// that merely share a few common packages.
fn matches_dependency_fingerprint(manifest: &Manifest) -> bool {
    let core_present = CORE_DEPENDENCIES
        .iter()
        .all(|dep| manifest.has_dependency(dep));
    if !core_present {
        return false;
    }

    let typical_matches = TYPICAL_DEPENDENCIES
        .iter()
        .filter(|dep| manifest.has_dependency(dep))
        .count();

    typical_matches >= TYPICAL_MATCH_THRESHOLD
}

/// Resolve the original tool's version, first non-null wins:
/// own `version` when named as the tool, a `/vX.Y.Z` tag in the repository
/// URL, an approximate `~version` when the markdown-processor + task-runner
/// signature holds, otherwise undetermined.
fn original_version(manifest: &Manifest) -> Option<String> {
    if manifest.name.as_deref() == Some(ORIGINAL_TOOL) {
        if let Some(version) = &manifest.version {
            return Some(version.clone());
        }
    }

    if let Some(tag) = manifest.repository_url().and_then(repo_url_version_tag) {
        return Some(tag);
    }

    if manifest.has_dependency(MARKDOWN_PROCESSOR) && manifest.has_dependency(TASK_RUNNER) {
        if let Some(version) = &manifest.version {
            return Some(format!("~{}", version));
        }
    }

    None
}

/// Extract a semantic-version tag embedded as a `/vX.Y.Z` path segment
fn repo_url_version_tag(url: &str) -> Option<String> {
    let pattern = Regex::new(r"/v(\d+\.\d+\.\d+)(?:[/?#]|$)").ok()?;
    pattern
        .captures(url)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> Manifest {
        Manifest::parse(json).unwrap()
    }

    #[test]
    fn test_null_manifest_is_successor_undetermined() {
        let result = classify(None);
        assert!(result.is_successor);
        assert_eq!(result.version, None);
    }

    #[test]
    fn test_successor_dependency_range_verbatim() {
        let m = manifest(r#"{ "devDependencies": { "spec-up-t": "^1.0.8" } }"#);
        let result = classify(Some(&m));
        assert!(result.is_successor);
        assert_eq!(result.version.as_deref(), Some("^1.0.8"));
    }

    #[test]
    fn test_successor_dependency_beats_original_name() {
        // Rule 1 is authoritative even when later rules would match
        let m = manifest(
            r#"{
                "name": "spec-up",
                "version": "0.10.6",
                "dependencies": { "spec-up-t": "~2.0.0" }
            }"#,
        );
        let result = classify(Some(&m));
        assert!(result.is_successor);
        assert_eq!(result.version.as_deref(), Some("~2.0.0"));
    }

    #[test]
    fn test_original_by_name_uses_own_version() {
        let m = manifest(r#"{ "name": "spec-up", "version": "0.10.6" }"#);
        let result = classify(Some(&m));
        assert!(!result.is_successor);
        assert_eq!(result.version.as_deref(), Some("0.10.6"));
    }

    #[test]
    fn test_script_fingerprint() {
        let m = manifest(
            r#"{
                "name": "my-spec",
                "scripts": {
                    "edit": "node -e \"require('spec-up')({ nowatch: false })\""
                }
            }"#,
        );
        assert!(!classify(Some(&m)).is_successor);
    }

    #[test]
    fn test_render_script_fingerprint() {
        let m = manifest(
            r#"{
                "scripts": {
                    "render": "node -e \"require('spec-up')({ nowatch: true, nobrowser: true })\""
                }
            }"#,
        );
        assert!(!classify(Some(&m)).is_successor);
    }

    #[test]
    fn test_unrelated_scripts_do_not_match() {
        let m = manifest(r#"{ "scripts": { "edit": "vim .", "build": "require('spec-up')" } }"#);
        assert!(classify(Some(&m)).is_successor);
    }

    #[test]
    fn test_repository_url_fallback() {
        let m = manifest(
            r#"{ "repository": { "url": "git+https://github.com/decentralized-identity/spec-up.git" } }"#,
        );
        assert!(!classify(Some(&m)).is_successor);
    }

    #[test]
    fn test_version_tag_from_repository_url() {
        let m = manifest(
            r#"{
                "scripts": { "render": "node -e \"require('spec-up')()\"" },
                "repository": { "url": "https://github.com/org/docs/tree/v0.9.1" }
            }"#,
        );
        let result = classify(Some(&m));
        assert!(!result.is_successor);
        assert_eq!(result.version.as_deref(), Some("0.9.1"));
    }

    #[test]
    fn test_approximate_version_from_core_signature() {
        let m = manifest(
            r#"{
                "version": "1.4.0",
                "scripts": { "edit": "node -e \"require('spec-up')()\"" },
                "dependencies": { "markdown-it": "^12.0.0", "gulp": "^4.0.2" }
            }"#,
        );
        let result = classify(Some(&m));
        assert!(!result.is_successor);
        assert_eq!(result.version.as_deref(), Some("~1.4.0"));
    }

    #[test]
    fn test_classifier_is_pure() {
        let m = manifest(r#"{ "name": "spec-up", "version": "0.10.6" }"#);
        assert_eq!(classify(Some(&m)), classify(Some(&m)));
    }
}
