use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use classtally_core::{discover_files, Aggregator, IncludeResolver};
use classtally_report::{json, text, ConsoleReporter};

const JSON_REPORT_NAME: &str = "css_analysis_report.json";
const TEXT_REPORT_NAME: &str = "css_analysis_readable.txt";

#[derive(Parser)]
#[command(name = "classtally")]
#[command(about = "Inventory CSS classes across an HTML template tree, resolving @@include() directives")]
#[command(version)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.path, cli.quiet) {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn run(root: &Path, quiet: bool) -> Result<()> {
    let mut console = if quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    console.banner();

    let files = discover_files(root);
    if files.is_empty() {
        // No candidates means no report artifacts, but not a failure.
        console.no_files();
        return Ok(());
    }
    console.discovered(files.len());

    let resolver = IncludeResolver::new(root);
    let mut aggregator = Aggregator::new();

    console.start_progress(files.len() as u64);
    for file in &files {
        console.file_started(file);
        // Fresh visited set per top-level file: unrelated pages may each
        // pull in the same shared fragment.
        let resolution = resolver.resolve(file);
        for warning in &resolution.warnings {
            console.warning(warning);
        }
        let rel_path = resolver.rel_to_root(file);
        aggregator.add(&rel_path, &resolution);
    }
    console.finish_progress();

    let report = aggregator.finish();
    console.summary(&report);

    let json_path = root.join(JSON_REPORT_NAME);
    std::fs::write(&json_path, json::format_report(&report, false))
        .with_context(|| format!("failed to write {}", json_path.display()))?;
    console.saved("Detailed report", &json_path);

    let text_path = root.join(TEXT_REPORT_NAME);
    std::fs::write(&text_path, text::format_report(&report))
        .with_context(|| format!("failed to write {}", text_path.display()))?;
    console.saved("Readable report", &text_path);

    console.done();
    Ok(())
}
