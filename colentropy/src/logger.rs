// colentropy/src/logger.rs
//! Process-wide logger setup.

use log::LevelFilter;

/// Initializes `env_logger` writing to stderr.
///
/// `RUST_LOG` is honored unless `level` forces a filter. Safe to call more than
/// once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
