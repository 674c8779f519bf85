use classtally_core::AnalysisReport;

/// How many direct classes a file block lists before collapsing into a
/// "... and N more" note. Display-only; the JSON report always carries the
/// full lists.
const DIRECT_CLASS_DISPLAY_LIMIT: usize = 10;

/// Format the analysis result as a plain-text narrative report.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("CSS CLASS ANALYSIS REPORT\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");

    out.push_str("SUMMARY:\n");
    out.push_str(&format!(
        "- Total HTML files: {}\n",
        report.summary.total_files
    ));
    out.push_str(&format!(
        "- Total direct classes: {}\n",
        report.summary.total_direct_classes
    ));
    out.push_str(&format!(
        "- Total classes with includes: {}\n\n",
        report.summary.total_classes_with_includes
    ));

    out.push_str("DETAILED FILE ANALYSIS:\n");
    out.push_str(&"-".repeat(60));
    out.push_str("\n\n");

    for (rel_path, record) in &report.files {
        out.push_str(&format!("{rel_path}\n"));
        out.push_str(&format!(
            "  Direct classes: {}\n",
            record.direct_classes.len()
        ));
        out.push_str(&format!(
            "  Total classes: {}\n",
            record.total_classes.len()
        ));
        out.push_str(&format!(
            "  From includes: {}\n",
            record.additional_from_includes
        ));

        if !record.includes.is_empty() {
            out.push_str("  Includes:\n");
            for include in &record.includes {
                out.push_str(&format!("    - {include}\n"));
            }
        }

        if !record.direct_classes.is_empty() {
            out.push_str("  Direct classes:\n");
            for class in record.direct_classes.iter().take(DIRECT_CLASS_DISPLAY_LIMIT) {
                out.push_str(&format!("    {class}\n"));
            }
            if record.direct_classes.len() > DIRECT_CLASS_DISPLAY_LIMIT {
                out.push_str(&format!(
                    "    ... and {} more\n",
                    record.direct_classes.len() - DIRECT_CLASS_DISPLAY_LIMIT
                ));
            }
        }

        out.push('\n');
    }

    out.push_str("\nCLASS SOURCES (which files define each class):\n");
    out.push_str(&"-".repeat(60));
    out.push_str("\n\n");

    for (class, sources) in &report.class_sources {
        out.push_str(&format!("{class}:\n"));
        for source in sources {
            out.push_str(&format!("  - {source}\n"));
        }
        out.push('\n');
    }

    out
}
