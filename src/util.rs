use log::LevelFilter;

/// Logger of the binaries: `info`, unless `RUST_LOG` says otherwise
pub fn init_logging() { init_logging_at(LevelFilter::Info) }

/// Installs the env_logger backend at `level` (`RUST_LOG` wins).
/// Keeps an already installed logger.
pub fn init_logging_at(level: LevelFilter) {
    let _ = env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
#[ctor::ctor]
fn init() { init_logging_at(LevelFilter::Debug) }
