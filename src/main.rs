//! gogen's main application entry point.
//! Parses the command line, builds the configuration and runs the generator.

use gogen::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generator::Generator,
    gomod::GoModTool,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or the first error of the generation run
fn run(args: Args) -> Result<()> {
    let config = Config::from_args(&args)?;
    let renderer = MiniJinjaRenderer::new();
    let module_tool = GoModTool::new();

    let project_dir = Generator::new(&config, &renderer, &module_tool).generate()?;

    println!("✅ Project structure scaffolded successfully at {}", project_dir.display());
    Ok(())
}
