//! HTML report renderer
//!
//! Produces a self-contained document (inline CSS, no external assets), writes
//! it under the reports directory and opens it with the host's default
//! browser.

use crate::report::ReportContext;
use specscout_info::{AnalysisResult, PdfStatus};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Render the analysis result as a standalone HTML document
pub fn render_html(result: &AnalysisResult, ctx: &ReportContext) -> String {
    let theme = &ctx.theme;
    let tool = result.classification.tool_name();
    let version = result
        .classification
        .version
        .as_deref()
        .unwrap_or("version undetermined");

    let mut rows = String::new();
    push_row(&mut rows, "Site", &escape(&result.site_url));
    push_row(
        &mut rows,
        "Repository",
        &match &result.repository {
            Some(repo) => format!(
                r#"<a href="{0}">{0}</a>"#,
                escape(repo)
            ),
            None => "unresolved".to_string(),
        },
    );
    push_row(
        &mut rows,
        "Build tool",
        &format!(
            r#"<strong style="color:{}">{}</strong> {}"#,
            theme.accent,
            escape(tool),
            escape(version)
        ),
    );
    push_row(
        &mut rows,
        "Companion PDF",
        &match &result.pdf {
            PdfStatus::Exists => format!(r#"<span style="color:{}">available</span>"#, theme.ok),
            PdfStatus::Missing => "not published".to_string(),
            PdfStatus::Error(e) => {
                format!(r#"<span style="color:{}">check failed: {}</span>"#, theme.err, escape(e))
            }
        },
    );
    push_row(
        &mut rows,
        "Version archive",
        &if result.version_archive.exists {
            format!(
                "{} versions ({})",
                result.version_archive.count,
                escape(&result.version_archive.versions.join(", "))
            )
        } else {
            "none".to_string()
        },
    );
    if let Some(modified) = result.last_modified {
        push_row(&mut rows, "Last modified", &modified.format("%Y-%m-%d %H:%M UTC").to_string());
    }
    if let Some(reason) = &result.manifest_error {
        rows.push_str(&format!(
            r#"<tr><th>Manifest</th><td><span style="color:{}">{}</span></td></tr>"#,
            theme.warn,
            escape(reason)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>specscout report — {site}</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 42rem; color: #1f2937; }}
  h1 {{ font-size: 1.3rem; border-bottom: 2px solid {accent}; padding-bottom: .4rem; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th {{ text-align: left; padding: .5rem .8rem .5rem 0; white-space: nowrap; vertical-align: top; }}
  td {{ padding: .5rem 0; }}
  tr + tr {{ border-top: 1px solid #e5e7eb; }}
  footer {{ margin-top: 2rem; font-size: .8rem; color: #9ca3af; }}
</style>
</head>
<body>
<h1>specscout report — {site}</h1>
<table>
{rows}
</table>
<footer>generated {generated} by specscout v{version}</footer>
</body>
</html>
"#,
        site = escape(&result.site_url),
        accent = theme.accent,
        rows = rows,
        generated = ctx.generated_at.format("%Y-%m-%d %H:%M UTC"),
        version = escape(&ctx.tool_version),
    )
}

/// Render an error card for runs that failed before producing a result
pub fn render_error_html(input: &str, error: &anyhow::Error, ctx: &ReportContext) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>specscout report — {site}</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 42rem; color: #1f2937; }}
  .card {{ border: 1px solid {err}; border-radius: .5rem; padding: 1rem 1.5rem; }}
  .card h1 {{ color: {err}; font-size: 1.1rem; margin-top: 0; }}
  footer {{ margin-top: 2rem; font-size: .8rem; color: #9ca3af; }}
</style>
</head>
<body>
<div class="card">
<h1>Analysis failed</h1>
<p>{site}</p>
<p>{error}</p>
</div>
<footer>generated {generated} by specscout v{version}</footer>
</body>
</html>
"#,
        site = escape(input),
        err = ctx.theme.err,
        error = escape(&error.to_string()),
        generated = ctx.generated_at.format("%Y-%m-%d %H:%M UTC"),
        version = escape(&ctx.tool_version),
    )
}

/// Write an error card under `dir` for a failed run
pub fn write_error_report(
    dir: &Path,
    input: &str,
    error: &anyhow::Error,
    ctx: &ReportContext,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = format!(
        "{}-{}.html",
        host_slug(input),
        ctx.generated_at.format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);

    std::fs::write(&path, render_error_html(input, error, ctx))?;
    Ok(path)
}

fn push_row(rows: &mut String, label: &str, value_html: &str) {
    rows.push_str(&format!("<tr><th>{}</th><td>{}</td></tr>\n", label, value_html));
}

/// Minimal HTML escaping for text interpolated into the report
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write the report under `dir`, creating it if absent
///
/// The filename combines the analyzed host with a timestamp so repeated runs
/// never collide.
pub fn write_report(dir: &Path, result: &AnalysisResult, ctx: &ReportContext) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = format!(
        "{}-{}.html",
        host_slug(&result.site_url),
        ctx.generated_at.format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);

    std::fs::write(&path, render_html(result, ctx))?;
    Ok(path)
}

/// Derive a filesystem-safe slug from the site's host name
fn host_slug(site_url: &str) -> String {
    let without_scheme = site_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(site_url);
    let host = without_scheme.split('/').next().unwrap_or(without_scheme);

    let slug: String = host
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '-' })
        .collect();

    if slug.is_empty() {
        "report".to_string()
    } else {
        slug
    }
}

/// Open the report with the host's default-browser mechanism
pub fn open_in_browser(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use specscout_core::Classification;
    use specscout_info::{RepoOrigin, VersionArchive};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            site_url: "https://example.com/spec".to_string(),
            repository: Some("https://github.com/foo/bar".to_string()),
            repo_origin: Some(RepoOrigin::Config),
            classification: Classification {
                is_successor: false,
                version: Some("0.10.6".to_string()),
            },
            manifest_error: None,
            pdf: PdfStatus::Exists,
            version_archive: VersionArchive {
                exists: true,
                count: 2,
                versions: vec!["v1".to_string(), "v2".to_string()],
            },
            last_modified: None,
        }
    }

    #[test]
    fn test_render_contains_fields() {
        let html = render_html(&sample_result(), &ReportContext::new());
        assert!(html.contains("https://example.com/spec"));
        assert!(html.contains("https://github.com/foo/bar"));
        assert!(html.contains("spec-up"));
        assert!(html.contains("0.10.6"));
        assert!(html.contains("v1, v2"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let mut result = sample_result();
        result.site_url = "https://example.com/<script>".to_string();
        let html = render_html(&result, &ReportContext::new());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_write_report_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), &sample_result(), &ReportContext::new()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("example.com-"));
        assert!(name.ends_with(".html"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("specscout report"));
    }

    #[test]
    fn test_host_slug() {
        assert_eq!(host_slug("https://example.com/spec"), "example.com");
        assert_eq!(host_slug("https://sub.example.com:8080"), "sub.example.com-8080");
    }
}
