use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use classtally_core::{AnalysisReport, ScanWarning};

/// Progress and summary output for an interactive run. Constructed and
/// passed into the scan rather than living as process-global state; the
/// quiet variant turns every method into a no-op.
pub struct ConsoleReporter {
    enabled: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            enabled: true,
            progress: None,
        }
    }

    pub fn quiet() -> Self {
        Self {
            enabled: false,
            progress: None,
        }
    }

    pub fn banner(&self) {
        if !self.enabled {
            return;
        }
        println!("\n{}", "classtally - CSS class analysis".bold());
        println!("{}", "Scans HTML files and resolves @@include() directives".cyan());
        println!("{}", "=".repeat(60));
    }

    pub fn discovered(&self, count: usize) {
        if self.enabled {
            println!("\nFound {} HTML files to analyze\n", count.to_string().bold());
        }
    }

    pub fn no_files(&self) {
        if self.enabled {
            println!("{}", "No HTML files found.".yellow());
        }
    }

    pub fn start_progress(&mut self, total: u64) {
        if !self.enabled {
            return;
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .expect("progress bar template")
                .progress_chars("#>-"),
        );
        self.progress = Some(pb);
    }

    pub fn file_started(&self, path: &Path) {
        if let Some(pb) = &self.progress {
            if let Some(name) = path.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
            pb.inc(1);
        }
    }

    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    /// Warnings always go to stderr. While a bar is active the draw is
    /// suspended around the write; a hidden bar's own `println` would
    /// swallow the line entirely on a non-terminal stderr.
    pub fn warning(&self, warning: &ScanWarning) {
        if !self.enabled {
            return;
        }
        let line = format!("{} {warning}", "Warning:".yellow().bold());
        match &self.progress {
            Some(pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }

    pub fn summary(&self, report: &AnalysisReport) {
        if !self.enabled {
            return;
        }
        println!("\n{}", "CSS CLASS ANALYSIS SUMMARY".green().bold());
        println!("{}", "=".repeat(60));
        let s = &report.summary;
        println!("  {:<32} {:>6}", "HTML files analyzed", s.total_files);
        println!("  {:<32} {:>6}", "Total direct classes", s.total_direct_classes);
        println!(
            "  {:<32} {:>6}",
            "Total classes (with includes)", s.total_classes_with_includes
        );
        println!("  {:<32} {:>6}", "Unique direct classes", s.unique_direct_classes);
        println!("  {:<32} {:>6}", "Unique total classes", s.unique_total_classes);

        self.file_tree(report);
    }

    /// Directory-grouped view of the analyzed files.
    fn file_tree(&self, report: &AnalysisReport) {
        let mut by_dir: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for rel_path in report.files.keys() {
            let (dir, name) = match rel_path.rsplit_once('/') {
                Some((dir, name)) => (dir.to_string(), name),
                None => (".".to_string(), rel_path.as_str()),
            };
            by_dir.entry(dir).or_default().push(name);
        }

        println!("\n{}", "HTML file structure".blue().bold());
        for (dir, files) in &by_dir {
            let label = if dir == "." { "(root)" } else { dir.as_str() };
            println!("  {}", label.bold());
            for file in files {
                println!("    {file}");
            }
        }
    }

    pub fn saved(&self, label: &str, path: &Path) {
        if self.enabled {
            println!("{} {}", format!("{label} saved to:").green(), path.display());
        }
    }

    pub fn done(&self) {
        if self.enabled {
            println!("\n{}", "Analysis complete.".green().bold());
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
