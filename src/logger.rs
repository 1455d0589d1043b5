/// Initializes `env_logger`: warnings only by default, everything with `--verbose`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
