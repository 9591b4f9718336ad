use std::path::PathBuf;
use thiserror::Error;

/// Failures the dependency lister can surface for a single binary.
///
/// These never abort a walk: the walker logs them and treats the affected
/// node as a leaf.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("dependency lister `{tool}` not found on this system")]
    ToolMissing { tool: String },

    #[error("dependency lister `{tool}` failed for {path}: {reason}")]
    ToolFailed {
        tool: String,
        path: PathBuf,
        reason: String,
    },

    #[error("unsupported or unreadable binary format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("io error while listing dependencies: {0}")]
    Io(#[from] std::io::Error),
}

/// Planner-level failures. The only one a caller will ever see from a
/// well-formed invocation is `NothingToDeploy`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("nothing to deploy: no seed binaries were supplied")]
    NothingToDeploy,
}

pub type Result<T> = std::result::Result<T, ResolveError>;
