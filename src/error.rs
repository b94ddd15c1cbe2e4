//! Errors for the layer around the processor.
//!
//! The processor itself has no error type; these cover reading and writing files,
//! loading configuration and serializing token dumps.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadedError {
    #[error("could not read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("could not serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReloadedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_messages_name_the_file() {
        let err = ReloadedError::ReadInput {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "could not read input file missing.txt: not found"
        );
    }

    #[test]
    fn test_config_errors_convert() {
        let err: ReloadedError = config::ConfigError::Message("bad".to_string()).into();
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
