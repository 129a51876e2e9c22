//! Embedded configuration extraction
//!
//! Locates the script block assigning the site's global configuration object
//! and hands the assigned literal to the restricted parser. The script content
//! itself is never evaluated.

use crate::error::{Error, Result};
use crate::fingerprint::CONFIG_GLOBAL;
use crate::literal::parse_literal;
use regex::Regex;
use serde_json::Value;

/// Extract the embedded configuration object from an HTML document
///
/// Scans every `<script>` block for an assignment to the configuration global
/// (`window.specConfig = …`, `const specConfig = …` and similar forms) and
/// parses the assigned literal. Returns the first successfully parsed value.
pub fn extract_config(html: &str) -> Result<Value> {
    let script_pattern =
        Regex::new(r"(?is)<script[^>]*>(.*?)</script>").map_err(|e| Error::other(e.to_string()))?;
    let assignment = assignment_pattern()?;

    for script in script_pattern.captures_iter(html) {
        let body = &script[1];
        if let Some(found) = assignment.find(body) {
            match parse_literal(&body[found.end()..]) {
                Ok(value) => return Ok(value),
                // A marker hit with an unparsable tail; keep scanning
                Err(_) => continue,
            }
        }
    }

    Err(Error::ConfigNotFound)
}

fn assignment_pattern() -> Result<Regex> {
    let pattern = format!(
        r"(?:window\.|(?:const|var|let)\s+)?{}\s*=",
        regex::escape(CONFIG_GLOBAL)
    );
    Regex::new(&pattern).map_err(|e| Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_window_assignment() {
        let html = r#"
            <html><head>
            <script>
              window.specConfig = { specs: [{ source: { host: "github", account: "a", repo: "b" } }] };
            </script>
            </head><body></body></html>
        "#;
        let config = extract_config(html).unwrap();
        assert_eq!(config["specs"][0]["source"]["account"], json!("a"));
    }

    #[test]
    fn test_extract_const_assignment() {
        let html = "<script>const specConfig = { title: 'Spec' };</script>";
        let config = extract_config(html).unwrap();
        assert_eq!(config["title"], json!("Spec"));
    }

    #[test]
    fn test_skips_unrelated_scripts() {
        let html = r#"
            <script src="analytics.js"></script>
            <script>var other = 1;</script>
            <script>specConfig = { source: "https://github.com/x/y" }</script>
        "#;
        let config = extract_config(html).unwrap();
        assert_eq!(config["source"], json!("https://github.com/x/y"));
    }

    #[test]
    fn test_missing_config_is_error() {
        let html = "<html><body><script>var a = 1;</script></body></html>";
        assert!(matches!(extract_config(html), Err(Error::ConfigNotFound)));
    }

    #[test]
    fn test_script_code_is_not_executed() {
        // A marker followed by code instead of a literal fails to parse
        let html = "<script>window.specConfig = buildConfig();</script>";
        assert!(extract_config(html).is_err());
    }
}
