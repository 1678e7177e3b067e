use std::path::PathBuf;

/// Every failure is fatal: the driver logs it and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Unable to get absolute path of input file {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to open input file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to read input archive: {0}")]
    Decode(String),
    #[error("Unable to encode output archive: {0}")]
    Encode(String),
    #[error("Unable to write output file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
