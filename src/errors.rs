use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("writing a file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
    #[error("resolving the working directory")]
    CurrentDir,
    #[error("reporting progress")]
    Report,
}

/// The one error a scaffolding pass can fail with.
///
/// Carries the operation that was attempted and the absolute path it was attempted on.
#[derive(Debug, Error, Diagnostic)]
#[error("filesystem error: {operation} on path '{path}'")]
#[diagnostic(
    code(unity_scaffold::filesystem),
    help("Check permissions, and that no file sits where a directory is expected (or the reverse).")
)]
pub struct FilesystemError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl FilesystemError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("unable to parse manifest '{path}'")]
#[diagnostic(
    code(unity_scaffold::manifest),
    help("A manifest holds a `directories` list and `[[files]]` tables with `path` and `content`.")
)]
pub struct ManifestError {
    pub path: PathBuf,
    #[source]
    pub source: toml::de::Error,
}
impl ManifestError {
    pub fn new(path: PathBuf, error: toml::de::Error) -> Self {
        Self {
            path,
            source: error,
        }
    }
}
