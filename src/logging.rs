//! File logging.
//!
//! The terminal belongs to the game while it runs, so log records go to
//! `~/.skyhop/skyhop.log` through a log4rs file appender.

use crate::constants::LOG_FILE;
use crate::utils::persistence;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::io;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Initialise logging into `~/.skyhop/skyhop.log`.
pub fn init_log(level: LevelFilter) -> io::Result<()> {
    let path = persistence::app_path(LOG_FILE)?;
    init_log_at(level, &path)
}

/// Initialise logging into an explicit file.
pub fn init_log_at(level: LevelFilter, path: &Path) -> io::Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log4rs::init_config(config).map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    Ok(())
}
