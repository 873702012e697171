use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::APP_DIR_NAME;
use crate::error::Error;

const LOG_FILE_NAME: &str = "ex-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes `log` records to `path`. The terminal is in raw mode while the game
/// runs, so nothing may be written to stdout or stderr.
pub fn init(level: LevelFilter, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| Error::Logging(error.to_string()))?;
    }

    let file = File::create(path).map_err(|error| Error::Logging(error.to_string()))?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).map_err(|error| Error::Logging(error.to_string()))
}
