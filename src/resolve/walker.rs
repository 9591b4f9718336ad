use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::types::{LibraryRecord, ResolutionContext, Tier};

use super::classifier::classify;
use super::lister::DependencyLister;
use super::probe::FileProbe;

/// Breadth-first walker over the shared-library dependency graph.
///
/// Each unique path is queried at most once. Dependency graphs may
/// legitimately contain cycles through circular linkage; the visited set
/// guarantees termination regardless. Depth counts recursion levels from
/// the seeds (depth 0) and the walker never descends past
/// `ctx.max_depth`, so a partial closure is an accepted outcome rather
/// than an error.
pub struct DependencyWalker<'a> {
    lister: &'a dyn DependencyLister,
    probe: &'a dyn FileProbe,
}

impl<'a> DependencyWalker<'a> {
    pub fn new(lister: &'a dyn DependencyLister, probe: &'a dyn FileProbe) -> Self {
        Self { lister, probe }
    }

    /// Discovers the dependency closure of `seeds`, in discovery order.
    ///
    /// System-tier and non-file records are included here; tier policy is
    /// applied by the planner. Ignored libraries are a pure exclusion:
    /// neither recorded nor recursed into, so an ignored dependency's
    /// subtree never leaks into the result through that edge.
    pub fn walk(&self, seeds: &[PathBuf], ctx: &ResolutionContext) -> Vec<LibraryRecord> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut records: Vec<LibraryRecord> = Vec::new();
        let mut queue: VecDeque<(PathBuf, u32)> =
            seeds.iter().map(|s| (s.clone(), 0)).collect();

        while let Some((path, depth)) = queue.pop_front() {
            let absolute = self.probe.absolute(&path);
            if !visited.insert(absolute.clone()) {
                continue;
            }

            let tier = classify(&absolute, ctx, self.probe);

            if self.is_ignored(&absolute, ctx) {
                debug!(path = %absolute.display(), "ignored, pruning subtree");
                continue;
            }

            debug!(path = %absolute.display(), ?tier, depth, "discovered library");
            records.push(LibraryRecord::new(absolute.clone(), tier, depth));

            if tier == Tier::NotAFile {
                continue;
            }

            if depth < ctx.max_depth {
                match self.lister.list_dependencies(&absolute) {
                    Ok(deps) => {
                        for dep in deps {
                            queue.push_back((dep, depth + 1));
                        }
                    }
                    Err(err) => {
                        // Local failure: the library itself stays in the
                        // result, it just contributes no further edges.
                        warn!(path = %absolute.display(), %err, "dependency listing failed, treating as leaf");
                    }
                }
            }
        }

        records
    }

    fn is_ignored(&self, path: &Path, ctx: &ResolutionContext) -> bool {
        if let Some(name) = path.file_name() {
            if ctx.ignore_names.contains(name.to_string_lossy().as_ref()) {
                return true;
            }
        }

        if let Some(parent) = path.parent() {
            let parent = parent.to_string_lossy();
            for ignored in &ctx.ignore_search_paths {
                let ignored = ignored.to_string_lossy();
                if !ignored.is_empty() && parent.contains(ignored.as_ref()) {
                    return true;
                }
            }
        }

        false
    }
}
