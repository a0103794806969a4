use crate::{
    errors::{FileOperation, FilesystemError},
    manifest::{DirectoryManifest, FileManifest, Manifest},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Absolute paths touched by one scaffolding pass, in the order they were reported.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub directories_created: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
}

/// Materializes both manifests under `root`, writing one report line per creation to `out`.
///
/// Directories are created first, in manifest order, then files. A directory that already
/// exists is skipped without a report line. Files are always written with create-or-truncate
/// semantics, so any previous content at that path is replaced.
///
/// Paths are joined onto `root` as given; `..` segments are not resolved or rejected.
///
/// # Errors
///
/// Returns a [`FilesystemError`] on the first directory that cannot be created, file that cannot
/// be written, or report line that cannot be emitted. Nothing created before the failure is
/// removed.
pub fn scaffold<W: Write>(
    root: &Path,
    directories: &DirectoryManifest,
    files: &FileManifest,
    out: &mut W,
) -> Result<ScaffoldReport, FilesystemError> {
    let mut report = ScaffoldReport::default();

    for relative in directories.iter() {
        let path = root.join(relative);

        if create_directory(&path)? {
            report_line(out, "Directory created", &path)?;
            report.directories_created.push(path);
        }
    }

    for (relative, content) in files.iter() {
        let path = root.join(relative);

        write_file(&path, content)?;
        report_line(out, "File created", &path)?;
        report.files_written.push(path);
    }

    log::info!(
        "scaffolded {} directories and {} files under {}",
        report.directories_created.len(),
        report.files_written.len(),
        root.display()
    );

    Ok(report)
}

impl Manifest {
    /// Runs [`scaffold`] with this manifest's directories and files.
    pub fn scaffold<W: Write>(
        &self,
        root: &Path,
        out: &mut W,
    ) -> Result<ScaffoldReport, FilesystemError> {
        scaffold(root, &self.directories, &self.files, out)
    }
}

/// Creates `path` and any missing parents. Returns `false` when it already was a directory.
fn create_directory(path: &Path) -> Result<bool, FilesystemError> {
    if path.is_dir() {
        log::debug!("directory exists, skipping: {}", path.display());
        return Ok(false);
    }

    std::fs::create_dir_all(path)
        .map_err(|error| FilesystemError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(true)
}

fn write_file(path: &Path, contents: &str) -> Result<(), FilesystemError> {
    std::fs::write(path, contents)
        .map_err(|error| FilesystemError::new(FileOperation::Write, path.into(), error))
}

fn report_line<W: Write>(out: &mut W, label: &str, path: &Path) -> Result<(), FilesystemError> {
    writeln!(out, "{}: {}", label, path.display())
        .map_err(|error| FilesystemError::new(FileOperation::Report, path.into(), error))
}
