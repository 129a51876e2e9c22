//! Console renderer

use crate::report::ReportContext;
use colored::*;
use specscout_info::{AnalysisResult, PdfStatus, RepoOrigin};

/// Print the analysis result as a labeled console card
pub fn print_console(result: &AnalysisResult, ctx: &ReportContext) {
    println!();
    println!("{} {}", "specscout".bold(), format!("v{}", ctx.tool_version).bright_black());
    println!();

    println!("  {:16} {}", "Site".bold(), result.site_url.cyan());

    match &result.repository {
        Some(repo) => {
            let origin = match result.repo_origin {
                Some(RepoOrigin::Config) => "from site config",
                Some(RepoOrigin::Input) => "given directly",
                Some(RepoOrigin::Fallback) => "fallback: input URL",
                None => "",
            };
            println!(
                "  {:16} {} {}",
                "Repository".bold(),
                repo.cyan(),
                format!("({})", origin).bright_black()
            );
        }
        None => println!("  {:16} {}", "Repository".bold(), "unresolved".yellow()),
    }

    let tool = result.classification.tool_name();
    let tool_colored = if result.classification.is_successor {
        tool.green()
    } else {
        tool.blue()
    };
    println!("  {:16} {}", "Build tool".bold(), tool_colored.bold());

    match &result.classification.version {
        Some(version) => println!("  {:16} {}", "Version".bold(), version),
        None => println!("  {:16} {}", "Version".bold(), "undetermined".yellow()),
    }

    if let Some(reason) = &result.manifest_error {
        println!("  {:16} {}", "Manifest".bold(), reason.yellow());
    }

    match &result.pdf {
        PdfStatus::Exists => println!("  {:16} {}", "PDF".bold(), "✓ index.pdf".green()),
        PdfStatus::Missing => println!("  {:16} {}", "PDF".bold(), "✗ not published".bright_black()),
        PdfStatus::Error(e) => println!("  {:16} {} {}", "PDF".bold(), "?".yellow(), e.yellow()),
    }

    if result.version_archive.exists {
        println!(
            "  {:16} {} ({})",
            "Versions".bold(),
            format!("{} archived", result.version_archive.count).green(),
            result.version_archive.versions.join(", ")
        );
    } else {
        println!("  {:16} {}", "Versions".bold(), "no archive".bright_black());
    }

    if let Some(modified) = result.last_modified {
        println!(
            "  {:16} {}",
            "Last modified".bold(),
            modified.format("%Y-%m-%d %H:%M UTC")
        );
    }

    println!();
}

/// Print a labeled top-level error line
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), error);
}
