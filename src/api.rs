use crate::{
    blueprint,
    errors::{FileOperation, FilesystemError, ManifestError},
    manifest::Manifest,
    preview::preview_as_tree,
    scaffold::ScaffoldReport,
};
use colored::Colorize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Filesystem(#[from] FilesystemError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),
}

/// Where the manifest for a run comes from.
#[derive(Debug, Clone, Default)]
pub enum ManifestSource {
    /// The Unity layout compiled into the binary.
    #[default]
    Builtin,
    /// A TOML manifest on disk.
    File(PathBuf),
}
impl ManifestSource {
    /// Builds the manifest, reading and parsing it first when it lives on disk.
    pub fn load(&self) -> Result<Manifest, ScaffoldError> {
        match self {
            Self::Builtin => Ok(blueprint::unity_project()),
            Self::File(path) => {
                let content = fs::read_to_string(path).map_err(|error| {
                    FilesystemError::new(FileOperation::Read, path.clone(), error)
                })?;

                log::debug!("loaded manifest from {}", path.display());

                Ok(Manifest::from_toml_str(&content, path)?)
            }
        }
    }
}

/// Resolves the scaffolding root, falling back to the process working directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, FilesystemError> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => std::env::current_dir().map_err(|error| {
            FilesystemError::new(FileOperation::CurrentDir, PathBuf::from("."), error)
        }),
    }
}

/// Scaffolds the manifest from `source` under `root`, printing progress to stdout.
///
/// With `dry_run` set, prints a tree of what would be created and leaves the filesystem alone.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The working directory cannot be resolved when no `root` is given.
/// - An external manifest cannot be read or parsed.
/// - A directory cannot be created, a file cannot be written, or stdout is closed.
pub fn scaffold_project(
    root: Option<&Path>,
    source: &ManifestSource,
    dry_run: bool,
) -> Result<Option<ScaffoldReport>, ScaffoldError> {
    let root = resolve_root(root)?;
    let manifest = source.load()?;

    log::debug!(
        "scaffolding {} directories and {} files into {}",
        manifest.directories.len(),
        manifest.files.len(),
        root.display()
    );

    if dry_run {
        preview_as_tree(&manifest, &root);
        return Ok(None);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = scaffold_with_summary(&manifest, &root, &mut out)?;

    Ok(Some(report))
}

/// Scaffolds `manifest` under `root` and finishes with a completion line on `out`.
pub fn scaffold_with_summary<W: Write>(
    manifest: &Manifest,
    root: &Path,
    out: &mut W,
) -> Result<ScaffoldReport, FilesystemError> {
    let report = manifest.scaffold(root, out)?;

    writeln!(out, "{}", "Project scaffolded successfully.".green())
        .map_err(|error| FilesystemError::new(FileOperation::Report, root.to_path_buf(), error))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // Stands in for a stdout whose reader has gone away.
    struct ClosedPipe;
    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn completion_line_follows_report_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let manifest = Manifest {
            directories: ["A"].into_iter().collect(),
            files: Default::default(),
        };
        let mut out: Vec<u8> = Vec::new();

        scaffold_with_summary(&manifest, tmp.path(), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let created = output.find("Directory created").unwrap();
        let done = output.find("Project scaffolded successfully.").unwrap();
        assert!(created < done);
    }

    #[test]
    fn closed_output_on_empty_manifest_is_an_error_not_a_panic() {
        let tmp = tempfile::tempdir().unwrap();

        let error =
            scaffold_with_summary(&Manifest::default(), tmp.path(), &mut ClosedPipe).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Report));
        assert_eq!(error.path, tmp.path());
    }

    #[test]
    fn file_source_reads_and_parses() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("layout.toml");
        fs::write(&path, "directories = [\"A/B\"]\n").unwrap();

        let manifest = ManifestSource::File(path).load().unwrap();

        assert_eq!(manifest.directories.iter().collect::<Vec<_>>(), ["A/B"]);
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn missing_manifest_file_is_a_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.toml");

        let error = ManifestSource::File(missing.clone()).load().unwrap_err();

        assert!(matches!(
            error,
            ScaffoldError::Filesystem(FilesystemError {
                operation: FileOperation::Read,
                ref path,
                ..
            }) if *path == missing
        ));
    }

    #[test]
    fn explicit_root_is_kept_as_given() {
        let root = resolve_root(Some(Path::new("some/../root"))).unwrap();

        assert_eq!(root, Path::new("some/../root"));
    }
}
