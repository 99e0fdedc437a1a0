//! refdocs entry point.
//! Parses arguments, loads the configuration and runs one reference build.

use refdocs::{
    builder::DocBuilder,
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    generator::CommandGenerator,
    logger::init_logger,
    remote::GitRemote,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Runs a build from the current directory.
///
/// Per-package failures are logged by the builder and do not fail the run.
fn run(args: Args) -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let config = get_config(&base_dir, &args)?;

    let generator = CommandGenerator::from_config(&config.generator).working_dir(&base_dir);
    let remote = GitRemote::new(&base_dir, config.remote.clone());

    let report = DocBuilder::new(&config, &generator, &remote).build_reference_docs()?;
    if !report.failed.is_empty() {
        log::warn!(
            "{} of {} packages failed to generate",
            report.failed.len(),
            report.packages.len()
        );
    }
    Ok(())
}
