use crate::error::Result;
use log::LevelFilter;

/// Map the `-v`/`-q` flags to a level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger on stderr. `RUST_LOG` wins over the flags.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level_filter(verbosity, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}
