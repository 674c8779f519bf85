use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::resolve::Resolution;

/// Per-file record in the structured report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub direct_classes: Vec<String>,
    pub total_classes: Vec<String>,
    pub includes: Vec<String>,
    /// Classes contributed purely by inclusion.
    pub additional_from_includes: usize,
}

/// Run-wide totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_files: usize,
    pub total_direct_classes: usize,
    pub total_classes_with_includes: usize,
    pub unique_direct_classes: usize,
    pub unique_total_classes: usize,
}

/// The complete analysis result. All maps are BTreeMaps so a given result
/// always serializes to the same bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub files: BTreeMap<String, FileRecord>,
    pub class_sources: BTreeMap<String, Vec<String>>,
}

/// Folds per-file resolutions into an [`AnalysisReport`]. Each file is
/// expected to come from its own top-level resolve call: cycle protection is
/// scoped per file, so two unrelated pages may both pull in a shared
/// fragment and both get its classes.
#[derive(Debug, Default)]
pub struct Aggregator {
    files: BTreeMap<String, FileRecord>,
    class_sources: BTreeMap<String, Vec<String>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rel_path: &str, resolution: &Resolution) {
        let record = FileRecord {
            direct_classes: resolution.direct.clone(),
            total_classes: resolution.total.clone(),
            includes: resolution.includes.clone(),
            additional_from_includes: resolution
                .total
                .len()
                .saturating_sub(resolution.direct.len()),
        };
        self.files.insert(rel_path.to_string(), record);

        // Extend, never replace: a class may be declared in several files.
        for (class, sources) in &resolution.sources {
            self.class_sources
                .entry(class.clone())
                .or_default()
                .extend(sources.iter().cloned());
        }
    }

    pub fn finish(mut self) -> AnalysisReport {
        for sources in self.class_sources.values_mut() {
            sources.sort();
            sources.dedup();
        }

        let mut unique_direct: HashSet<&str> = HashSet::new();
        let mut unique_total: HashSet<&str> = HashSet::new();
        let mut total_direct = 0usize;
        let mut total_with_includes = 0usize;
        for record in self.files.values() {
            total_direct += record.direct_classes.len();
            total_with_includes += record.total_classes.len();
            unique_direct.extend(record.direct_classes.iter().map(String::as_str));
            unique_total.extend(record.total_classes.iter().map(String::as_str));
        }

        let summary = Summary {
            total_files: self.files.len(),
            total_direct_classes: total_direct,
            total_classes_with_includes: total_with_includes,
            unique_direct_classes: unique_direct.len(),
            unique_total_classes: unique_total.len(),
        };

        AnalysisReport {
            summary,
            files: self.files,
            class_sources: self.class_sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(
        direct: &[&str],
        total: &[&str],
        sources: &[(&str, &[&str])],
    ) -> Resolution {
        Resolution {
            direct: direct.iter().map(|s| s.to_string()).collect(),
            total: total.iter().map(|s| s.to_string()).collect(),
            sources: sources
                .iter()
                .map(|(class, files)| {
                    (
                        class.to_string(),
                        files.iter().map(|f| f.to_string()).collect(),
                    )
                })
                .collect(),
            includes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_summary_totals_are_sums_and_unions() {
        let mut agg = Aggregator::new();
        agg.add(
            "index.html",
            &resolution(
                &["hero"],
                &["hero", "nav-link"],
                &[("hero", &["index.html"]), ("nav-link", &["nav.html"])],
            ),
        );
        agg.add(
            "about.html",
            &resolution(
                &["hero", "bio"],
                &["bio", "hero"],
                &[("hero", &["about.html"]), ("bio", &["about.html"])],
            ),
        );

        let report = agg.finish();
        assert_eq!(report.summary.total_files, 2);
        assert_eq!(report.summary.total_direct_classes, 3);
        assert_eq!(report.summary.total_classes_with_includes, 4);
        assert_eq!(report.summary.unique_direct_classes, 2);
        assert_eq!(report.summary.unique_total_classes, 3);
    }

    #[test]
    fn test_class_sources_deduplicated_and_sorted() {
        let mut agg = Aggregator::new();
        agg.add(
            "a.html",
            &resolution(&["shared"], &["shared"], &[("shared", &["z.html", "a.html"])]),
        );
        agg.add(
            "b.html",
            &resolution(&["shared"], &["shared"], &[("shared", &["a.html", "b.html"])]),
        );

        let report = agg.finish();
        assert_eq!(
            report.class_sources["shared"],
            vec!["a.html", "b.html", "z.html"]
        );
    }

    #[test]
    fn test_additional_from_includes() {
        let mut agg = Aggregator::new();
        agg.add(
            "index.html",
            &resolution(&["hero"], &["footer", "hero", "nav"], &[]),
        );
        let report = agg.finish();
        assert_eq!(report.files["index.html"].additional_from_includes, 2);
    }

    #[test]
    fn test_total_smaller_than_direct_does_not_underflow() {
        // The resolver never produces this, but Resolution's fields are
        // public, so a hand-built record must not panic the aggregator.
        let mut agg = Aggregator::new();
        agg.add("odd.html", &resolution(&["a", "b"], &["a"], &[]));
        let report = agg.finish();
        assert_eq!(report.files["odd.html"].additional_from_includes, 0);
    }

    #[test]
    fn test_empty_aggregator_yields_zero_summary() {
        let report = Aggregator::new().finish();
        assert_eq!(report.summary.total_files, 0);
        assert_eq!(report.summary.unique_total_classes, 0);
        assert!(report.files.is_empty());
        assert!(report.class_sources.is_empty());
    }
}
