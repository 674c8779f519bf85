use classtally_core::AnalysisReport;

/// Format the analysis result as JSON. The report's maps are all BTreeMaps,
/// so the same result always produces the same bytes.
pub fn format_report(report: &AnalysisReport, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("AnalysisReport should be serializable")
    } else {
        serde_json::to_string_pretty(report).expect("AnalysisReport should be serializable")
    }
}
