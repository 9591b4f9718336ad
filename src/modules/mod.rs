pub mod registry;
pub mod translations;

pub use registry::{ModuleEntry, ModuleRegistry, QtModule, QT_MODULE_TABLE};
