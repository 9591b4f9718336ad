use std::collections::BTreeSet;
use std::path::PathBuf;

/// Configuration for a single resolution run.
///
/// Built by the caller (normally from the command line), then handed to
/// [`DeploymentPlanner::plan`](crate::resolve::DeploymentPlanner::plan) by
/// shared reference. Nothing mutates it once walking starts.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    /// Base installation prefix of the managed framework (e.g. a Qt
    /// prefix derived from the qmake location). `None` means no library
    /// can classify as [`Tier::Framework`](crate::types::Tier::Framework).
    pub framework_root: Option<PathBuf>,
    /// Additional user-supplied library roots, checked in order.
    pub extra_roots: Vec<PathBuf>,
    /// Library file names that must never be deployed. An ignored name
    /// also prunes the whole dependency subtree below it.
    pub ignore_names: BTreeSet<String>,
    /// Search paths whose contents must never be deployed.
    pub ignore_search_paths: Vec<PathBuf>,
    /// Recursion limit; seeds are depth 0 and the walker never descends
    /// past this level.
    pub max_depth: u32,
    /// Deploy system-tier libraries too. Off by default.
    pub include_system: bool,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn framework_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.framework_root = Some(root.into());
        self
    }

    pub fn extra_roots(mut self, roots: impl IntoIterator<Item = PathBuf>) -> Self {
        self.extra_roots = roots.into_iter().collect();
        self
    }

    pub fn ignore_names(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.ignore_names = names.into_iter().collect();
        self
    }

    pub fn ignore_search_paths(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.ignore_search_paths = paths.into_iter().collect();
        self
    }

    /// Sets the recursion limit from an untrusted integer. Out-of-range
    /// values clamp to zero (no recursion) instead of failing; validation
    /// proper is the caller's job.
    pub fn depth_limit(mut self, limit: i64) -> Self {
        if limit < 0 {
            tracing::warn!(limit, "negative recursion depth, clamping to 0");
        }
        self.max_depth = limit.clamp(0, u32::MAX as i64) as u32;
        self
    }

    pub fn include_system(mut self, include: bool) -> Self {
        self.include_system = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_depth_clamps_to_zero() {
        let ctx = ResolutionContext::new().depth_limit(-7);
        assert_eq!(ctx.max_depth, 0);
    }

    #[test]
    fn depth_within_range_is_kept() {
        let ctx = ResolutionContext::new().depth_limit(3);
        assert_eq!(ctx.max_depth, 3);
    }

    #[test]
    fn default_excludes_system_tier() {
        let ctx = ResolutionContext::new();
        assert!(!ctx.include_system);
        assert!(ctx.framework_root.is_none());
    }
}
