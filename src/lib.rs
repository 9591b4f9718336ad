//! qt-deployer - dependency-closure resolver and deployment planner
//!
//! Given one or more entry binaries, this crate discovers their full
//! shared-library dependency closure up to a configurable depth,
//! classifies every discovered library by provenance (framework, extra,
//! system), applies inclusion/exclusion policy and produces a
//! deterministic deployment plan for a downstream copy/strip stage.

pub mod cli;
pub mod modules;
pub mod platform;
pub mod resolve;
pub mod types;

pub use resolve::{DependencyLister, DeploymentPlanner, FileProbe};
pub use types::{DeploymentPlan, LibraryRecord, ResolutionContext, Tier};
