use crate::errors::ManifestError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Ordered relative directory paths. Duplicates are allowed; creating a directory twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryManifest(pub Vec<String>);
impl DirectoryManifest {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl<S: Into<String>> FromIterator<S> for DirectoryManifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Relative file path to literal file content, kept in insertion order.
///
/// Inserting a path that is already present replaces its content but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileManifest(pub IndexMap<String, String>);
impl FileManifest {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.0.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileManifest {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut manifest = FileManifest::new();
        for (path, content) in iter {
            manifest.insert(path, content);
        }
        manifest
    }
}

/// Everything a single scaffolding pass materializes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub directories: DirectoryManifest,
    pub files: FileManifest,
}

#[derive(Debug, Deserialize)]
struct FileRecord {
    path: String,
    content: String,
}

// On-disk layout of an external manifest.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    directories: Vec<String>,
    #[serde(default)]
    files: Vec<FileRecord>,
}

impl Manifest {
    /// Parses a manifest from TOML text. `origin` only labels the error.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ManifestError> {
        let parsed: ManifestFile =
            toml::from_str(text).map_err(|error| ManifestError::new(origin.to_path_buf(), error))?;

        Ok(Manifest {
            directories: parsed.directories.into_iter().collect(),
            files: parsed
                .files
                .into_iter()
                .map(|record| (record.path, record.content))
                .collect(),
        })
    }
}
