use std::path::{Path, PathBuf};

/// Thin filesystem queries the resolution engine depends on.
///
/// The engine only ever reads: existence, regular-file checks and
/// absolutization. Keeping these behind a trait lets tests substitute a
/// scripted filesystem without touching disk.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Absolute form of `path`. Relative paths resolve against the
    /// current working directory; the path itself need not exist.
    fn absolute(&self, path: &Path) -> PathBuf;
}

/// Production probe over `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    }
}
