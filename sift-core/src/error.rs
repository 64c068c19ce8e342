use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("invalid dimensions: {rows} rows x {width} columns, both must be positive")]
    InvalidDimensions { rows: usize, width: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config '{}'", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
