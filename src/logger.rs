/// Initializes the global logger.
///
/// Progress is reported at `Info`; `--verbose` adds the `Debug` details
/// (remote lookup, generator invocations, cleanup rules).
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
