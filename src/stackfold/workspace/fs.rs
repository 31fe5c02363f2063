use super::{is_plain_name, WorkspaceError, WorkspaceReader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_ADDONS_DIR: &str = "addons";

/// Reads addons from `<root>/<service>/<addons_dir>/`.
///
/// Listings are sorted by filename so repeated runs fold files in the same order.
pub struct FsWorkspace {
    root: PathBuf,
    addons_dir: String,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            addons_dir: DEFAULT_ADDONS_DIR.to_string(),
        }
    }

    pub fn with_addons_dir(mut self, dir: &str) -> Self {
        self.addons_dir = dir.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn addons_path(&self, svc_name: &str) -> Result<PathBuf, WorkspaceError> {
        if !is_plain_name(svc_name) {
            return Err(WorkspaceError::InvalidServiceName(svc_name.to_string()));
        }
        Ok(self.root.join(svc_name).join(&self.addons_dir))
    }
}

impl WorkspaceReader for FsWorkspace {
    fn list_addon_files(&self, svc_name: &str) -> Result<Vec<String>, WorkspaceError> {
        let dir = self.addons_path(svc_name)?;
        if !dir.is_dir() {
            return Err(WorkspaceError::NotFound { path: dir });
        }

        let entries = fs::read_dir(&dir).map_err(|source| WorkspaceError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| WorkspaceError::Io {
                path: dir.clone(),
                source,
            })?;
            // Follows symlinks; nested directories are not addons.
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(?raw, "skipping non UTF-8 file name"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_addon_file(&self, svc_name: &str, file_name: &str) -> Result<Vec<u8>, WorkspaceError> {
        if !is_plain_name(file_name) {
            return Err(WorkspaceError::InvalidFileName(file_name.to_string()));
        }
        let path = self.addons_path(svc_name)?.join(file_name);
        fs::read(&path).map_err(|source| WorkspaceError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_with(files: &[(&str, &str)]) -> (TempDir, FsWorkspace) {
        let temp = tempfile::tempdir().unwrap();
        let addons = temp.path().join("api").join("addons");
        fs::create_dir_all(&addons).unwrap();
        for (name, content) in files {
            fs::write(addons.join(name), content).unwrap();
        }
        let ws = FsWorkspace::new(temp.path());
        (temp, ws)
    }

    #[test]
    fn lists_files_sorted() {
        let (_temp, ws) = workspace_with(&[("b.yaml", "B"), ("a.yaml", "A"), ("params.yml", "P")]);
        let names = ws.list_addon_files("api").unwrap();
        assert_eq!(names, vec!["a.yaml", "b.yaml", "params.yml"]);
    }

    #[test]
    fn skips_directories() {
        let (temp, ws) = workspace_with(&[("a.yaml", "A")]);
        fs::create_dir(temp.path().join("api/addons/nested.yaml")).unwrap();
        assert_eq!(ws.list_addon_files("api").unwrap(), vec!["a.yaml"]);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let ws = FsWorkspace::new(temp.path());
        let err = ws.list_addon_files("api").unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { .. }));
        assert!(err.to_string().contains("addons"));
    }

    #[test]
    fn reads_file_bytes() {
        let (_temp, ws) = workspace_with(&[("params.yaml", "Param1:\n  Type: String\n")]);
        let bytes = ws.read_addon_file("api", "params.yaml").unwrap();
        assert_eq!(bytes, b"Param1:\n  Type: String\n");
    }

    #[test]
    fn read_of_missing_file_is_io_error() {
        let (_temp, ws) = workspace_with(&[]);
        let err = ws.read_addon_file("api", "ghost.yaml").unwrap_err();
        assert!(matches!(err, WorkspaceError::Io { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn custom_addons_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("api").join("extras");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("x.yaml"), "X").unwrap();

        let ws = FsWorkspace::new(temp.path()).with_addons_dir("extras");
        assert_eq!(ws.list_addon_files("api").unwrap(), vec!["x.yaml"]);
    }

    #[test]
    fn rejects_escaping_names() {
        let (_temp, ws) = workspace_with(&[]);
        assert!(matches!(
            ws.list_addon_files("../api"),
            Err(WorkspaceError::InvalidServiceName(_))
        ));
        assert!(matches!(
            ws.read_addon_file("api", "../secret.yaml"),
            Err(WorkspaceError::InvalidFileName(_))
        ));
    }
}
