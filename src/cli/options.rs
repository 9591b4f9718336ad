use clap::Parser;
use std::path::PathBuf;

/// Command-line surface of the deployer.
///
/// Everything here only sources the resolution context; range handling
/// (e.g. an out-of-range recursion depth) is done by the core, which
/// clamps instead of failing.
#[derive(Parser, Debug)]
#[command(name = "qt-deployer")]
#[command(about = "Deploys compiled applications with their shared-library dependency closure")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct DeployCli {
    /// Deployable files, comma-separated (e.g. --bin ./app,./plugin.so)
    #[arg(long, value_delimiter = ',')]
    pub bin: Vec<PathBuf>,

    /// Folder holding deployable files, searched recursively.
    /// Only `so`, `dll` and `exe` files are picked up.
    #[arg(long)]
    pub bin_dir: Option<PathBuf>,

    /// qmake of the Qt kit to deploy against
    /// (e.g. --qmake ~/Qt/5.12.4/gcc_64/bin/qmake)
    #[arg(long)]
    pub qmake: Option<PathBuf>,

    /// Additional library roots for application-private libraries,
    /// comma-separated
    #[arg(long, value_delimiter = ',')]
    pub lib_dir: Vec<PathBuf>,

    /// Library names to skip, comma-separated
    /// (e.g. --ignore libicudata.so.56,libicuuc.so.56)
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Search paths whose libraries must never be deployed,
    /// comma-separated
    #[arg(long, value_delimiter = ',')]
    pub ignore_env: Vec<PathBuf>,

    /// Recursion depth for transitive dependencies (seeds are depth 0)
    #[arg(long, default_value_t = 0)]
    pub recursive_depth: i64,

    /// Deploy system libraries as well
    #[arg(long)]
    pub deploy_system: bool,

    /// Skip translation-file resolution
    #[arg(long)]
    pub no_translations: bool,

    /// Extra module paths produced by an external QML import scan,
    /// merged into the seed set, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub qml_import: Vec<PathBuf>,

    /// Emit the plan as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
