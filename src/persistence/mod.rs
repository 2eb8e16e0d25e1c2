use std::{io, path::PathBuf};

use thiserror::Error;

pub mod file;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Invalid dataset path: {:?}", .0)]
    InvalidPath(PathBuf),

    #[error("Unable to serialize dataset")]
    Serialize(#[source] serde_json::Error),

    #[error("Unable to create temporary file {}", .path.display())]
    CreateTemporaryFile { path: PathBuf, source: io::Error },

    #[error("Unable to write dataset to {}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    // The temporary file could not be moved onto the destination
    #[error("Unable to replace {}", .path.display())]
    Persist { path: PathBuf, source: io::Error },

    #[error("Unable to resolve absolute path of {}", .path.display())]
    ResolvePath { path: PathBuf, source: io::Error },

    #[error("Unable to read dataset from {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Dataset {} is not a valid list of people", .path.display())]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
