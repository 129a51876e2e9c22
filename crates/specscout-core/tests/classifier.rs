//! Classifier property tests over realistic manifests

use specscout_core::{classify, manifest_candidates, normalize_site_url, Manifest};
use std::collections::HashMap;

fn manifest_with_deps(deps: &[&str]) -> Manifest {
    let mut manifest = Manifest::default();
    manifest.name = Some("acme-spec".to_string());
    manifest.version = Some("1.0.0".to_string());
    manifest.dependencies = deps
        .iter()
        .map(|name| (name.to_string(), "^1.0.0".to_string()))
        .collect::<HashMap<_, _>>();
    manifest
}

/// Core set plus enough typical matches to reach the threshold
const TEN_TYPICAL: &[&str] = &[
    "markdown-it",
    "gulp",
    "fs-extra",
    "axios",
    "markdown-it-anchor",
    "markdown-it-attrs",
    "markdown-it-container",
    "markdown-it-deflist",
    "js-yaml",
    "yargs",
];

#[test]
fn dependency_fingerprint_at_threshold_classifies_original() {
    let manifest = manifest_with_deps(TEN_TYPICAL);
    let verdict = classify(Some(&manifest));
    assert!(!verdict.is_successor, "10 typical matches must classify as the original tool");
}

#[test]
fn dependency_fingerprint_below_threshold_does_not_match() {
    // 9 matches: one short of the threshold
    let manifest = manifest_with_deps(&TEN_TYPICAL[..9]);
    let verdict = classify(Some(&manifest));
    assert!(verdict.is_successor, "9 typical matches must NOT classify as the original tool");
}

#[test]
fn dependency_fingerprint_requires_full_core_set() {
    // Threshold reached but one core dependency missing
    let deps: Vec<&str> = TEN_TYPICAL
        .iter()
        .filter(|d| **d != "axios")
        .copied()
        .chain(["markdown-it-sub", "markdown-it-sup"])
        .collect();
    let manifest = manifest_with_deps(&deps);
    assert!(classify(Some(&manifest)).is_successor);
}

#[test]
fn successor_range_is_reported_verbatim() {
    for range in ["^1.0.8", "~0.3.0", "*"] {
        let mut manifest = manifest_with_deps(TEN_TYPICAL);
        manifest
            .dev_dependencies
            .insert("spec-up-t".to_string(), range.to_string());

        let verdict = classify(Some(&manifest));
        assert!(verdict.is_successor);
        assert_eq!(verdict.version.as_deref(), Some(range));
    }
}

#[test]
fn original_tool_manifest_reports_own_version() {
    let manifest =
        Manifest::parse(r#"{ "name": "spec-up", "version": "0.10.6" }"#).unwrap();
    let verdict = classify(Some(&manifest));
    assert!(!verdict.is_successor);
    assert_eq!(verdict.version.as_deref(), Some("0.10.6"));
}

#[test]
fn fingerprint_match_carries_approximate_version() {
    let manifest = manifest_with_deps(TEN_TYPICAL);
    let verdict = classify(Some(&manifest));
    assert_eq!(verdict.version.as_deref(), Some("~1.0.0"));
}

#[test]
fn classification_is_idempotent() {
    let manifest = manifest_with_deps(TEN_TYPICAL);
    let first = classify(Some(&manifest));
    let second = classify(Some(&manifest));
    assert_eq!(first, second);
}

#[test]
fn locator_and_normalizer_end_to_end() {
    let site = normalize_site_url("example.com/spec/");
    assert_eq!(site, "https://example.com/spec");

    let candidates = manifest_candidates("https://github.com/foo/bar.git").unwrap();
    assert_eq!(
        candidates,
        vec![
            "https://raw.githubusercontent.com/foo/bar/main/package.json",
            "https://raw.githubusercontent.com/foo/bar/master/package.json",
        ]
    );
}
