use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Provenance of a discovered library.
///
/// Classification always runs in the order `NotAFile` -> `Framework` ->
/// `Extra` -> `System`, first match wins. Downstream policy keys off this
/// tier: system libraries are filtered out of the plan unless explicitly
/// requested, non-files are always filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The path does not resolve to an existing regular file.
    NotAFile,
    /// Lives under the managed framework prefix.
    Framework,
    /// Lives under one of the user-supplied extra library roots.
    Extra,
    /// Everything else: loader, libc, distro-provided libraries.
    System,
}

/// One discovered library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    pub path: PathBuf,
    pub tier: Tier,
    /// Recursion level at first discovery; seeds are 0. Rediscovering the
    /// same path deeper in the graph does not update this.
    pub depth: u32,
}

impl LibraryRecord {
    pub fn new(path: impl Into<PathBuf>, tier: Tier, depth: u32) -> Self {
        Self {
            path: path.into(),
            tier,
            depth,
        }
    }

    /// File name component, lossy. Empty string for pathological paths.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The finished deployment plan, consumed by the copy/strip stage.
///
/// `libraries` keeps discovery order (first discovered first) and holds
/// each path at most once. `translations` is sorted so that serializing
/// the same plan twice yields identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub libraries: Vec<LibraryRecord>,
    pub translations: BTreeSet<String>,
}

impl DeploymentPlan {
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }
}
