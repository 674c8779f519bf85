use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const DOCUMENT_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Recursively collect document files under `root`, sorted lexicographically
/// so every run processes files in the same order.
pub fn discover_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    DOCUMENT_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
