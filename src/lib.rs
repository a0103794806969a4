pub mod api;
pub mod blueprint;
pub mod errors;
pub mod manifest;
pub mod preview;
pub mod scaffold;

pub use api::{scaffold_project, scaffold_with_summary, ManifestSource, ScaffoldError};
pub use errors::{FileOperation, FilesystemError, ManifestError};
pub use manifest::{DirectoryManifest, FileManifest, Manifest};
pub use scaffold::{scaffold, ScaffoldReport};
