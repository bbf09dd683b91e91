//! Command-line interface implementation for gogen.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for gogen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gogen: Domain-Driven-Design scaffolding for Go services",
    long_about = None
)]
pub struct Args {
    /// Go module name (e.g. github.com/user/project)
    #[arg(long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Generate a monolith with one bounded context per entity
    #[arg(long)]
    pub monolith: bool,

    /// Entity name, repeatable. Example: --entity user --entity product
    #[arg(long = "entity", value_name = "NAME")]
    pub entities: Vec<String>,

    /// Use Gin instead of Chi for HTTP routing
    #[arg(long)]
    pub gin: bool,

    /// Include the auth, user, role and permission modules
    #[arg(long)]
    pub auth: bool,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON or YAML file providing defaults for the options above
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not run `go mod init` and `go mod tidy` after generation
    #[arg(long)]
    pub skip_go_mod: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
