//! Report rendering for analysis results

pub mod console;
pub mod html;
pub mod json;

use chrono::{DateTime, Utc};

/// Context passed into every renderer
///
/// Holds what would otherwise be ambient state: the tool's own version string
/// and the theme constants used by the HTML report.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// specscout's own version, shown in report footers
    pub tool_version: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Colors for the HTML report
    pub theme: HtmlTheme,
}

impl ReportContext {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            theme: HtmlTheme::default(),
        }
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Color constants for the HTML report
#[derive(Debug, Clone)]
pub struct HtmlTheme {
    pub accent: &'static str,
    pub ok: &'static str,
    pub warn: &'static str,
    pub err: &'static str,
}

impl Default for HtmlTheme {
    fn default() -> Self {
        Self {
            accent: "#2563eb",
            ok: "#16a34a",
            warn: "#d97706",
            err: "#dc2626",
        }
    }
}
