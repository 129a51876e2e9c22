//! specscout CLI - identify the build tool behind a deployed spec site.

mod report;

use anyhow::Result;
use clap::Parser;
use report::ReportContext;
use specscout_info::Analyzer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "specscout")]
#[command(about = "Identify whether a spec site was built with spec-up or spec-up-t", long_about = None)]
struct Cli {
    /// URL or bare domain of the documentation site (or a GitHub repository URL)
    ///
    /// Examples:
    ///   specscout example.github.io/my-spec
    ///   specscout https://github.com/org/my-spec
    #[arg(value_name = "URL")]
    url: String,

    /// Render an HTML report and open it in the default browser
    #[arg(long)]
    html: bool,

    /// Output JSON instead of the console card
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// With --html, write the report without launching a browser
    #[arg(long, requires = "html")]
    no_open: bool,

    /// Directory the HTML reports are written to
    #[arg(long, value_name = "DIR", default_value = "reports")]
    report_dir: PathBuf,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if cli.html {
                // HTML mode renders an error card instead of a bare abort
                let ctx = ReportContext::new();
                match report::html::write_error_report(&cli.report_dir, &cli.url, &error, &ctx) {
                    Ok(path) => {
                        eprintln!("analysis failed; error report written to {}", path.display());
                        if !cli.no_open {
                            let _ = report::html::open_in_browser(&path);
                        }
                    }
                    Err(write_error) => {
                        report::console::print_error(&error);
                        report::console::print_error(&write_error);
                    }
                }
            } else {
                report::console::print_error(&error);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let analyzer = Analyzer::new()?;
    let result = analyzer.analyze(&cli.url).await?;
    let ctx = ReportContext::new();

    if cli.json {
        report::json::print_json(&result);
    } else if cli.html {
        let path = report::html::write_report(&cli.report_dir, &result, &ctx)?;
        println!("report written to {}", path.display());
        if !cli.no_open {
            report::html::open_in_browser(&path)?;
        }
    } else {
        report::console::print_console(&result, &ctx);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = format!("specscout_cli={level},specscout_info={level},specscout_core={level}");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
