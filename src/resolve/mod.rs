pub mod classifier;
pub mod error;
pub mod lister;
pub mod planner;
pub mod probe;
pub mod walker;

pub use classifier::classify;
pub use error::{ListError, ResolveError};
pub use lister::{DependencyLister, LddLister};
pub use planner::DeploymentPlanner;
pub use probe::{FileProbe, FsProbe};
pub use walker::DependencyWalker;
