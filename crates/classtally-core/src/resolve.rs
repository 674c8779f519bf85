use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};

use crate::extract::Extractor;
use crate::warning::ScanWarning;

/// Hard bound on include nesting. Include graphs are author-controlled
/// input, so recursion is capped explicitly instead of trusting the call
/// stack to survive a pathological chain.
pub const MAX_INCLUDE_DEPTH: usize = 64;

/// Everything learned from resolving one top-level file.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Classes literally present in the file's own markup, sorted.
    pub direct: Vec<String>,
    /// Direct classes plus everything merged in through includes, sorted.
    pub total: Vec<String>,
    /// Class name -> root-relative paths of files that literally declare it.
    /// Entries always name the declaring file, never an includer.
    pub sources: BTreeMap<String, Vec<String>>,
    /// Include targets declared directly in the top-level file.
    pub includes: Vec<String>,
    /// Non-fatal conditions hit along the way.
    pub warnings: Vec<ScanWarning>,
}

/// Recursively expands a file's `@@include("path")` directives into a merged
/// class set with per-class provenance.
///
/// Cycle policy is first-wins: a visited set shared across one top-level
/// `resolve` call empties any file re-reached through a second include path.
/// Two separate top-level files each get a fresh visited set and may both
/// pull in a shared fragment.
pub struct IncludeResolver {
    root: PathBuf,
    extractor: Extractor,
}

impl IncludeResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self {
            root: normalize(&root),
            extractor: Extractor::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, file_path: &Path) -> Resolution {
        let mut resolution = Resolution::default();
        let mut visited = HashSet::new();
        let (direct, total, includes) =
            self.resolve_inner(file_path, &mut visited, 0, &mut resolution);
        resolution.direct = direct;
        resolution.total = total;
        resolution.includes = includes;
        resolution
    }

    /// Returns (direct, total, includes) for `file_path`. Provenance and
    /// warnings accumulate on `out` since every file reached in this call
    /// tree contributes to the same top-level resolution.
    fn resolve_inner(
        &self,
        file_path: &Path,
        visited: &mut HashSet<PathBuf>,
        depth: usize,
        out: &mut Resolution,
    ) -> (Vec<String>, Vec<String>, Vec<String>) {
        let abs = self.absolute(file_path);
        if !visited.insert(abs.clone()) {
            // Already contributed on an earlier include path.
            return (Vec::new(), Vec::new(), Vec::new());
        }

        let content = match std::fs::read(&abs) {
            // Lossy decode: invalid bytes must never fail the scan.
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                out.warnings.push(ScanWarning::ReadFailed {
                    path: abs,
                    message: e.to_string(),
                });
                return (Vec::new(), Vec::new(), Vec::new());
            }
        };

        let direct = self.extractor.extract_classes(&content);
        let includes = self.extractor.extract_includes(&content);
        let rel = self.rel_to_root(&abs);

        for class in &direct {
            out.sources.entry(class.clone()).or_default().push(rel.clone());
        }

        let mut total = direct.clone();
        for target in &includes {
            let target_path = Path::new(target);
            let include_path = if target_path.is_absolute() {
                normalize(target_path)
            } else {
                let base = abs.parent().unwrap_or(Path::new("."));
                normalize(&base.join(target_path))
            };

            if !include_path.exists() {
                out.warnings.push(ScanWarning::MissingInclude {
                    target: target.clone(),
                    from: rel.clone(),
                });
                continue;
            }

            if depth + 1 > MAX_INCLUDE_DEPTH {
                out.warnings.push(ScanWarning::DepthExceeded {
                    path: include_path,
                    limit: MAX_INCLUDE_DEPTH,
                });
                continue;
            }

            let (_, child_total, _) = self.resolve_inner(&include_path, visited, depth + 1, out);
            for class in child_total {
                if !total.contains(&class) {
                    total.push(class);
                }
            }
        }

        total.sort();
        (direct, total, includes)
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        normalize(&abs)
    }

    /// Path relative to the scan root with forward slashes, falling back to
    /// the absolute form for includes that escape the root.
    pub fn rel_to_root(&self, path: &Path) -> String {
        let abs = self.absolute(path);
        let rel = abs.strip_prefix(&self.root).unwrap_or(&abs);
        rel.to_string_lossy().replace('\\', "/")
    }
}

/// Lexical normalization: folds `.` components and resolves `..` against
/// the preceding component without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.into_iter().collect()
}
