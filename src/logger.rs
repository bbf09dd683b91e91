/// Initializes the global logger; `verbose` lowers the level to debug so every
/// planned directory and rendered template is reported.
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
