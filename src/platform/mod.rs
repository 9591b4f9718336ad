pub mod redist;

pub use redist::{detect_msvc, resolve_redistributable, MsvcArch, MsvcRelease};
