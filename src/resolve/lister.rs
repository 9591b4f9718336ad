use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use super::error::ListError;

/// Lists the direct shared-library dependencies of one binary.
///
/// Production code shells out to the platform binary-format reader; tests
/// inject scripted implementations. A failure applies to the queried
/// binary only and is absorbed by the walker.
pub trait DependencyLister {
    fn list_dependencies(&self, binary: &Path) -> Result<Vec<PathBuf>, ListError>;
}

/// `ldd`-backed lister for ELF binaries.
pub struct LddLister {
    tool: PathBuf,
}

impl LddLister {
    /// Locates `ldd` on the current system.
    pub fn detect() -> Result<Self, ListError> {
        let tool = which::which("ldd").map_err(|_| ListError::ToolMissing {
            tool: "ldd".to_string(),
        })?;
        debug!(tool = %tool.display(), "using dependency lister");
        Ok(Self { tool })
    }

    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl DependencyLister for LddLister {
    fn list_dependencies(&self, binary: &Path) -> Result<Vec<PathBuf>, ListError> {
        let output = Command::new(&self.tool).arg(binary).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ListError::ToolFailed {
                tool: self.tool.display().to_string(),
                path: binary.to_path_buf(),
                reason: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("not a dynamic executable") {
            return Err(ListError::UnsupportedFormat {
                path: binary.to_path_buf(),
            });
        }

        Ok(parse_ldd_output(&stdout))
    }
}

/// Extracts the resolved absolute paths from `ldd` output.
///
/// Lines come in three shapes:
///   `libc.so.6 => /lib/x86_64-linux-gnu/libc.so.6 (0x...)`
///   `/lib64/ld-linux-x86-64.so.2 (0x...)`
///   `linux-vdso.so.1 (0x...)`            <- virtual, no file, skipped
/// `name => not found` entries carry no path and are skipped as well.
fn parse_ldd_output(stdout: &str) -> Vec<PathBuf> {
    let mut deps = Vec::new();

    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() || line == "statically linked" {
            continue;
        }

        let target = match line.split_once("=>") {
            Some((_, rhs)) => rhs.trim(),
            None => line,
        };

        // Strip the trailing load address.
        let target = match target.rfind('(') {
            Some(idx) => target[..idx].trim(),
            None => target,
        };

        if target.starts_with('/') {
            deps.push(PathBuf::from(target));
        }
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolved_and_loader_lines() {
        let out = "\tlinux-vdso.so.1 (0x00007ffd8cdd3000)\n\
                   \tlibc.so.6 => /lib/x86_64-linux-gnu/libc.so.6 (0x00007f1b2f000000)\n\
                   \t/lib64/ld-linux-x86-64.so.2 (0x00007f1b2f400000)\n";
        let deps = parse_ldd_output(out);
        assert_eq!(
            deps,
            vec![
                PathBuf::from("/lib/x86_64-linux-gnu/libc.so.6"),
                PathBuf::from("/lib64/ld-linux-x86-64.so.2"),
            ]
        );
    }

    #[test]
    fn skips_unresolved_entries() {
        let out = "\tlibmissing.so.1 => not found\n";
        assert!(parse_ldd_output(out).is_empty());
    }

    #[test]
    fn statically_linked_yields_no_dependencies() {
        assert!(parse_ldd_output("\tstatically linked\n").is_empty());
    }
}
