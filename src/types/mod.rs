pub mod context;
pub mod plan;

pub use context::ResolutionContext;
pub use plan::{DeploymentPlan, LibraryRecord, Tier};
