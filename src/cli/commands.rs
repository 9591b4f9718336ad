use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::platform::redist;
use crate::resolve::DeploymentPlanner;
use crate::types::ResolutionContext;

use super::options::DeployCli;
use super::output;

/// Builds the resolution context from the command line, runs the planner
/// and renders the result.
pub fn run(cli: &DeployCli) -> anyhow::Result<()> {
    let seeds = collect_seeds(cli)?;
    if seeds.is_empty() {
        bail!("nothing to deploy: use --bin or --bin-dir to supply deployable files");
    }

    let toolchain = probe_toolchain(cli.qmake.as_deref());

    let ctx = ResolutionContext::new()
        .extra_roots(cli.lib_dir.clone())
        .ignore_names(cli.ignore.clone())
        .ignore_search_paths(cli.ignore_env.clone())
        .depth_limit(cli.recursive_depth)
        .include_system(cli.deploy_system);
    let ctx = match &toolchain.framework_root {
        Some(root) => ctx.framework_root(root),
        None => ctx,
    };

    let planner = DeploymentPlanner::native().context("no dependency lister available")?;
    let mut plan = planner.plan(&seeds, &ctx)?;

    if cli.no_translations {
        plan.translations.clear();
    }

    output::render(&plan, toolchain.redistributable.as_deref(), cli.json)
}

/// Seed binaries: the explicit --bin list, the recursive --bin-dir scan
/// and any paths handed over from an external QML import scan.
fn collect_seeds(cli: &DeployCli) -> anyhow::Result<Vec<PathBuf>> {
    let mut seeds = Vec::new();

    for bin in &cli.bin {
        if bin.is_file() {
            seeds.push(bin.clone());
        } else {
            warn!(path = %bin.display(), "skipping seed, not a regular file");
        }
    }

    if let Some(dir) = &cli.bin_dir {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && is_deployable(path) {
                seeds.push(path.to_path_buf());
            }
        }
    }

    for qml in &cli.qml_import {
        if qml.is_file() {
            seeds.push(qml.clone());
        } else {
            debug!(path = %qml.display(), "qml import path is not a file, skipped");
        }
    }

    Ok(seeds)
}

/// The recursive scan accepts shared objects (including versioned
/// `libfoo.so.5` names), Windows libraries and executables.
fn is_deployable(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    name.contains(".so") || name.ends_with(".dll") || name.ends_with(".exe")
}

struct ToolchainInfo {
    framework_root: Option<PathBuf>,
    redistributable: Option<PathBuf>,
}

/// Derives the framework root from the qmake location: one level up from
/// the binary's directory. A missing or misnamed qmake downgrades to a
/// C-libraries-only deployment instead of failing.
fn probe_toolchain(qmake: Option<&Path>) -> ToolchainInfo {
    let none = ToolchainInfo {
        framework_root: None,
        redistributable: None,
    };

    let qmake = match qmake {
        Some(qmake) => qmake,
        None => {
            info!("no qmake supplied, deploying only C libraries");
            return none;
        }
    };

    let stem = qmake.file_stem().and_then(|s| s.to_str());
    if !qmake.is_file() || stem != Some("qmake") {
        warn!(path = %qmake.display(), "qmake not found, deploying only C libraries");
        return none;
    }

    let framework_root = qmake.parent().and_then(Path::parent).map(Path::to_path_buf);
    if let Some(root) = &framework_root {
        info!(root = %root.display(), "framework root");
    }

    let redistributable = redist::resolve_redistributable(qmake);
    if let Some(file) = &redistributable {
        info!(file = %file.display(), "matched platform redistributable");
    }

    ToolchainInfo {
        framework_root,
        redistributable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn deployable_names() {
        assert!(is_deployable(Path::new("/x/libfoo.so")));
        assert!(is_deployable(Path::new("/x/libfoo.so.5.12")));
        assert!(is_deployable(Path::new("/x/app.exe")));
        assert!(is_deployable(Path::new("/x/plugin.dll")));
        assert!(!is_deployable(Path::new("/x/readme.txt")));
        assert!(!is_deployable(Path::new("/x/app")));
    }

    #[test]
    fn missing_qmake_downgrades_to_no_framework() {
        let info = probe_toolchain(Some(Path::new("/no/such/qmake")));
        assert!(info.framework_root.is_none());
        assert!(info.redistributable.is_none());
    }

    #[test]
    fn misnamed_toolchain_binary_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let not_qmake = dir.path().join("bin/cmake");
        fs::create_dir_all(not_qmake.parent().unwrap()).unwrap();
        fs::write(&not_qmake, b"").unwrap();

        let info = probe_toolchain(Some(&not_qmake));
        assert!(info.framework_root.is_none());
    }

    #[test]
    fn framework_root_is_one_level_above_bin() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("5.12.4/gcc_64");
        let qmake = prefix.join("bin/qmake");
        fs::create_dir_all(qmake.parent().unwrap()).unwrap();
        fs::write(&qmake, b"").unwrap();

        let info = probe_toolchain(Some(&qmake));
        assert_eq!(info.framework_root, Some(prefix));
    }
}
