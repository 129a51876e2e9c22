//! Fingerprint constants for the build-tool classifier
//!
//! Everything the classifier matches against lives here as a named constant so
//! the heuristics can be retuned without touching the decision logic.

/// Package name of the original build tool
pub const ORIGINAL_TOOL: &str = "spec-up";

/// Dependency name of the successor build tool
pub const SUCCESSOR_TOOL: &str = "spec-up-t";

/// Canonical repository path of the original tool, matched as a substring of
/// a manifest's declared `repository.url`
pub const ORIGINAL_REPO_PATH: &str = "decentralized-identity/spec-up";

/// Substring characteristic of the original tool's script wiring
pub const SCRIPT_SIGNATURE: &str = "require('spec-up')";

/// Script entries inspected for [`SCRIPT_SIGNATURE`]
pub const FINGERPRINT_SCRIPTS: &[&str] = &["edit", "render"];

/// The global variable the site configuration is assigned to
pub const CONFIG_GLOBAL: &str = "specConfig";

/// Dependencies that must ALL be present for the dependency-fingerprint rule
pub const CORE_DEPENDENCIES: &[&str] = &["markdown-it", "gulp", "fs-extra", "axios"];

/// Dependencies typically declared by projects built with the original tool
pub const TYPICAL_DEPENDENCIES: &[&str] = &[
    "axios",
    "fs-extra",
    "gulp",
    "gulp-concat",
    "gulp-terser",
    "js-yaml",
    "markdown-it",
    "markdown-it-anchor",
    "markdown-it-attrs",
    "markdown-it-chart",
    "markdown-it-container",
    "markdown-it-deflist",
    "markdown-it-ins",
    "markdown-it-mark",
    "markdown-it-modify-token",
    "markdown-it-multimd-table",
    "markdown-it-prism",
    "markdown-it-references",
    "markdown-it-sub",
    "markdown-it-sup",
    "markdown-it-task-lists",
    "markdown-it-textual-uml",
    "yargs",
];

/// Minimum number of [`TYPICAL_DEPENDENCIES`] matches required by the
/// dependency-fingerprint rule.
///
/// Provenance of this value is unknown (tuned against real manifests or chosen
/// arbitrarily); it is kept as a named constant rather than an inline literal.
pub const TYPICAL_MATCH_THRESHOLD: usize = 10;

/// The markdown processor used for the approximate-version signature
pub const MARKDOWN_PROCESSOR: &str = "markdown-it";

/// The task runner used for the approximate-version signature
pub const TASK_RUNNER: &str = "gulp";

/// Default branches tried, in order, when locating a repository manifest
pub const DEFAULT_BRANCHES: &[&str] = &["main", "master"];
