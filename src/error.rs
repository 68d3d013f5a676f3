use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoetryUpError {
    #[error("pyproject.toml not found in '{}'", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse pyproject.toml: {0}")]
    ManifestMalformed(#[from] toml::de::Error),

    #[error("Failed to spawn '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PoetryUpError>;
