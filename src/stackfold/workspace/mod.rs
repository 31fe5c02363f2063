//! # Workspace Layer
//!
//! Read-only access to the addons fragments of each service. The [`WorkspaceReader`] trait
//! is the only thing the composition engine knows about the project on disk.
//!
//! ## Implementations
//!
//! - [`fs::FsWorkspace`]: production reader over the local project tree
//! - [`memory::InMemoryWorkspace`]: ordered in-memory files for tests, with injectable
//!   read failures
//!
//! ## Layout
//!
//! For `FsWorkspace`:
//! ```text
//! <root>/
//! ├── .stackfold/config.json
//! └── <service>/
//!     └── addons/
//!         ├── params.yaml
//!         ├── outputs.yaml
//!         └── s3-bucket.yaml   # any other YAML file is a resource fragment
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod fs;
pub mod memory;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("invalid service name: {0:?}")]
    InvalidServiceName(String),

    #[error("invalid addons file name: {0:?}")]
    InvalidFileName(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WorkspaceError {
    pub fn is_not_found(&self) -> bool {
        match self {
            WorkspaceError::NotFound { .. } => true,
            WorkspaceError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Read access to per-service addons directories.
pub trait WorkspaceReader {
    /// Names of the files in the service's addons directory, in listing order.
    ///
    /// Fails with [`WorkspaceError::NotFound`] when the directory does not exist.
    fn list_addon_files(&self, svc_name: &str) -> Result<Vec<String>, WorkspaceError>;

    /// Raw bytes of one file in the service's addons directory.
    fn read_addon_file(&self, svc_name: &str, file_name: &str) -> Result<Vec<u8>, WorkspaceError>;
}

impl<W: WorkspaceReader + ?Sized> WorkspaceReader for &W {
    fn list_addon_files(&self, svc_name: &str) -> Result<Vec<String>, WorkspaceError> {
        (**self).list_addon_files(svc_name)
    }

    fn read_addon_file(&self, svc_name: &str, file_name: &str) -> Result<Vec<u8>, WorkspaceError> {
        (**self).read_addon_file(svc_name, file_name)
    }
}

/// Rejects names that would escape the workspace when joined onto a path.
pub(crate) fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
