use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for the game binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal unavailable: {0}")]
    Terminal(#[from] io::Error),

    #[error("logger setup failed: {0}")]
    Logging(String),
}

/// Settings that cannot be played with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is smaller than {min}x{min}")]
    GridTooSmall { width: u16, height: u16, min: u16 },

    #[error("fps must be at least 1")]
    ZeroFps,
}

/// Reading or writing the high score file failed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed score file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
