use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum MergeError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Base document must be a JSON object to hold a named field, found {kind}")]
    TypeMismatch { kind: &'static str },
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Invalid configuration file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MergeError {
    pub fn is_read(&self) -> bool {
        matches!(self, MergeError::Read { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, MergeError::Parse { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, MergeError::Write { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, MergeError::TypeMismatch { .. })
    }

    /// Path of the file involved in the failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            MergeError::Read { path, .. }
            | MergeError::Parse { path, .. }
            | MergeError::Write { path, .. }
            | MergeError::Config { path, .. } => Some(path),
            MergeError::TypeMismatch { .. } | MergeError::Serialize(_) => None,
        }
    }
}
