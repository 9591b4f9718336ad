use std::path::Path;

use crate::types::{ResolutionContext, Tier};

use super::probe::FileProbe;

/// Assigns a provenance tier to a resolved library path.
///
/// Checks run in a fixed order and the first match wins: a path that is
/// not a regular file is `NotAFile` before any root is consulted, the
/// framework root beats every extra root, and everything left over is a
/// system library.
///
/// Containment is a plain substring test on the absolute path, not a
/// path-prefix comparison. That tolerates roots supplied through symlinks
/// or odd separators at the price of false positives when a root string
/// happens to occur inside an unrelated path; the precedence order above
/// is part of the compatibility contract and must not change.
pub fn classify(path: &Path, ctx: &ResolutionContext, probe: &dyn FileProbe) -> Tier {
    if !probe.is_file(path) {
        return Tier::NotAFile;
    }

    let absolute = probe.absolute(path);
    let haystack = absolute.to_string_lossy();

    if let Some(root) = &ctx.framework_root {
        let root = root.to_string_lossy();
        if !root.is_empty() && haystack.contains(root.as_ref()) {
            return Tier::Framework;
        }
    }

    for root in &ctx.extra_roots {
        let root = root.to_string_lossy();
        if !root.is_empty() && haystack.contains(root.as_ref()) {
            return Tier::Extra;
        }
    }

    Tier::System
}
