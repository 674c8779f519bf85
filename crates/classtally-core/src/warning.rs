use std::path::PathBuf;

use thiserror::Error;

/// Non-fatal conditions encountered while resolving a file. Warnings are
/// accumulated on the [`Resolution`](crate::Resolution) and surfaced to the
/// operator; none of them aborts the scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    #[error("failed to read {}: {}", path.display(), message)]
    ReadFailed { path: PathBuf, message: String },

    #[error("include file not found: {target} (referenced from {from})")]
    MissingInclude { target: String, from: String },

    #[error("include depth limit ({}) exceeded at {}", limit, path.display())]
    DepthExceeded { path: PathBuf, limit: usize },
}
