use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to list input directory {dir}: {source}")]
    ListInputs {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Input name in {dir} is not valid UTF-8: {name:?}")]
    NonUtf8Name { dir: PathBuf, name: OsString },

    #[error("Failed to create run directory {dir}: {source}")]
    CreateRunDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write job script {path}: {source}")]
    WriteScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write run manifest {path}: {source}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize run manifest: {0}")]
    SerializeManifest(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No job script is open")]
    NoOpenScript,
}
