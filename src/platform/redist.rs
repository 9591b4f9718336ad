use std::path::{Path, PathBuf};
use tracing::debug;

/// MSVC toolchain release, read out of a Qt kit directory name such as
/// `msvc2017_64`. `Unknown` disables release-based filtering when the
/// redistributable is matched against file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsvcRelease {
    Msvc2013,
    Msvc2015,
    Msvc2017,
    Msvc2019,
    Unknown,
}

impl MsvcRelease {
    /// Token a matching redistributable file name must contain.
    pub fn file_token(self) -> Option<&'static str> {
        match self {
            MsvcRelease::Msvc2013 => Some("msvc2013"),
            MsvcRelease::Msvc2015 => Some("msvc2015"),
            MsvcRelease::Msvc2017 => Some("msvc2017"),
            MsvcRelease::Msvc2019 => Some("msvc2019"),
            MsvcRelease::Unknown => None,
        }
    }
}

/// Architecture width of the toolchain. `Unknown` disables
/// architecture-based filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsvcArch {
    X86,
    X64,
    Unknown,
}

impl MsvcArch {
    pub fn file_token(self) -> Option<&'static str> {
        match self {
            MsvcArch::X86 => Some("x86"),
            MsvcArch::X64 => Some("x64"),
            MsvcArch::Unknown => None,
        }
    }
}

/// Reads release and architecture out of the toolchain's directory
/// ancestry.
///
/// The candidate directory sits two levels above the toolchain binary
/// (`.../msvc2017_64/bin/qmake.exe`). Its path must contain the literal
/// marker `msvc`; absence means "no applicable redistributable" and is
/// not an error. From the marker an 11-character block is taken, with
/// characters 4..8 as the release year and the last two as the
/// architecture width. Anything unrecognized degrades to `Unknown`
/// instead of failing.
pub fn detect_msvc(toolchain: &Path) -> Option<(MsvcRelease, MsvcArch)> {
    let candidate = toolchain.parent()?.parent()?;
    let text = candidate.to_string_lossy();

    let idx = match text.find("msvc") {
        Some(idx) => idx,
        None => {
            debug!(path = %candidate.display(), "no msvc marker in toolchain path");
            return None;
        }
    };

    let end = (idx + 11).min(text.len());
    let block = text.get(idx..end)?;

    let release = match block.get(4..8) {
        Some("2013") => MsvcRelease::Msvc2013,
        Some("2015") => MsvcRelease::Msvc2015,
        Some("2017") => MsvcRelease::Msvc2017,
        Some("2019") => MsvcRelease::Msvc2019,
        _ => MsvcRelease::Unknown,
    };

    let arch = match block.len().checked_sub(2).and_then(|i| block.get(i..)) {
        Some("32") => MsvcArch::X86,
        Some("64") => MsvcArch::X64,
        _ => MsvcArch::Unknown,
    };

    Some((release, arch))
}

/// Locates the vendor runtime installer matching the toolchain.
///
/// Best-effort string matching against the conventional Qt installer
/// layout: the `vcredist` directory is a sibling of the kit tree, three
/// levels above the toolchain binary's directory. Candidate files are
/// scanned name-sorted and the first one containing every active token
/// wins. Every mismatch with that layout yields `None`, never a failure.
pub fn resolve_redistributable(toolchain: &Path) -> Option<PathBuf> {
    let (release, arch) = detect_msvc(toolchain)?;

    let bin_dir = toolchain.parent()?;
    let root = bin_dir.parent()?.parent()?.parent()?;
    let vcredist = root.join("vcredist");
    if !vcredist.is_dir() {
        debug!(path = %vcredist.display(), "vcredist directory not found");
        return None;
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(&vcredist)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // read_dir order is platform-dependent; sort for a stable pick.
    candidates.sort();

    for candidate in candidates {
        let name = candidate
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let release_ok = release.file_token().map_or(true, |t| name.contains(t));
        let arch_ok = arch.file_token().map_or(true, |t| name.contains(t));
        if release_ok && arch_ok {
            return Some(candidate);
        }
    }

    debug!(dir = %vcredist.display(), "no redistributable matched the toolchain");
    None
}
