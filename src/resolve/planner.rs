use std::path::PathBuf;
use tracing::{debug, info};

use crate::modules::translations;
use crate::types::{DeploymentPlan, ResolutionContext, Tier};

use super::error::{ListError, ResolveError, Result};
use super::lister::{DependencyLister, LddLister};
use super::probe::{FileProbe, FsProbe};
use super::walker::DependencyWalker;

/// Turns seed binaries into a finished [`DeploymentPlan`].
///
/// Drives the walker, applies tier policy (non-files are always dropped,
/// system libraries only survive on request) and maps the surviving set
/// to its translation stems. Two invocations with identical inputs over
/// an unchanged filesystem produce identical plans.
pub struct DeploymentPlanner {
    lister: Box<dyn DependencyLister>,
    probe: Box<dyn FileProbe>,
}

impl DeploymentPlanner {
    /// Planner backed by the platform dependency lister.
    pub fn native() -> std::result::Result<Self, ListError> {
        Ok(Self::with_lister(Box::new(LddLister::detect()?)))
    }

    pub fn with_lister(lister: Box<dyn DependencyLister>) -> Self {
        Self {
            lister,
            probe: Box::new(FsProbe),
        }
    }

    pub fn with_probe(mut self, probe: Box<dyn FileProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn plan(&self, seeds: &[PathBuf], ctx: &ResolutionContext) -> Result<DeploymentPlan> {
        if seeds.is_empty() {
            return Err(ResolveError::NothingToDeploy);
        }

        info!(seeds = seeds.len(), max_depth = ctx.max_depth, "resolving dependency closure");

        let walker = DependencyWalker::new(self.lister.as_ref(), self.probe.as_ref());
        let discovered = walker.walk(seeds, ctx);

        let mut plan = DeploymentPlan::default();
        for record in discovered {
            match record.tier {
                Tier::NotAFile => {
                    debug!(path = %record.path.display(), "dropping non-file record");
                }
                Tier::System if !ctx.include_system => {
                    debug!(path = %record.path.display(), "dropping system library");
                }
                _ => plan.libraries.push(record),
            }
        }

        plan.translations = translations::resolve(&plan.libraries);

        info!(
            libraries = plan.libraries.len(),
            translations = plan.translations.len(),
            "deployment plan ready"
        );
        Ok(plan)
    }
}
