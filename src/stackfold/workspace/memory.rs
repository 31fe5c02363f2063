use super::{WorkspaceError, WorkspaceReader};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// In-memory workspace for testing.
///
/// Files keep their insertion order, so listings come back exactly as they were added.
#[derive(Default)]
pub struct InMemoryWorkspace {
    services: HashMap<String, Vec<(String, Vec<u8>)>>,
    unreadable: HashSet<(String, String)>,
    reads: Cell<usize>,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an (empty) addons directory for `svc_name`.
    pub fn add_service(&mut self, svc_name: &str) -> &mut Self {
        self.services.entry(svc_name.to_string()).or_default();
        self
    }

    /// Adds or replaces a file, creating the service's directory if needed.
    pub fn add_file(&mut self, svc_name: &str, file_name: &str, content: &str) -> &mut Self {
        let files = self.services.entry(svc_name.to_string()).or_default();
        match files.iter_mut().find(|(name, _)| name == file_name) {
            Some((_, existing)) => *existing = content.as_bytes().to_vec(),
            None => files.push((file_name.to_string(), content.as_bytes().to_vec())),
        }
        self
    }

    /// Makes every read of this file fail.
    pub fn fail_reads_of(&mut self, svc_name: &str, file_name: &str) -> &mut Self {
        self.unreadable
            .insert((svc_name.to_string(), file_name.to_string()));
        self
    }

    /// Number of `read_addon_file` calls served so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    fn addons_path(svc_name: &str) -> PathBuf {
        PathBuf::from(svc_name).join("addons")
    }
}

impl WorkspaceReader for InMemoryWorkspace {
    fn list_addon_files(&self, svc_name: &str) -> Result<Vec<String>, WorkspaceError> {
        let files = self
            .services
            .get(svc_name)
            .ok_or_else(|| WorkspaceError::NotFound {
                path: Self::addons_path(svc_name),
            })?;
        Ok(files.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_addon_file(&self, svc_name: &str, file_name: &str) -> Result<Vec<u8>, WorkspaceError> {
        self.reads.set(self.reads.get() + 1);
        let path = Self::addons_path(svc_name).join(file_name);

        if self
            .unreadable
            .contains(&(svc_name.to_string(), file_name.to_string()))
        {
            return Err(WorkspaceError::Io {
                path,
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }

        self.services
            .get(svc_name)
            .and_then(|files| files.iter().find(|(name, _)| name == file_name))
            .map(|(_, content)| content.clone())
            .ok_or(WorkspaceError::NotFound { path })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const PARAMS: &str = "Param1:\n  Type: String";
    pub const OUTPUTS: &str = "Output1:\n  Value: foo";
    pub const BUCKET: &str = "Bucket:\n  Type: AWS::S3::Bucket";

    pub struct WorkspaceFixture {
        pub workspace: InMemoryWorkspace,
    }

    impl Default for WorkspaceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WorkspaceFixture {
        pub fn new() -> Self {
            Self {
                workspace: InMemoryWorkspace::new(),
            }
        }

        /// `params.yaml`, `outputs.yaml` and one `s3-bucket.yaml` resource.
        pub fn with_complete_service(mut self, svc_name: &str) -> Self {
            self.workspace
                .add_file(svc_name, "params.yaml", PARAMS)
                .add_file(svc_name, "outputs.yaml", OUTPUTS)
                .add_file(svc_name, "s3-bucket.yaml", BUCKET);
            self
        }

        pub fn with_empty_service(mut self, svc_name: &str) -> Self {
            self.workspace.add_service(svc_name);
            self
        }

        pub fn with_file(mut self, svc_name: &str, file_name: &str, content: &str) -> Self {
            self.workspace.add_file(svc_name, file_name, content);
            self
        }

        pub fn with_unreadable_file(mut self, svc_name: &str, file_name: &str) -> Self {
            self.workspace
                .add_file(svc_name, file_name, "")
                .fail_reads_of(svc_name, file_name);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_preserves_insertion_order() {
        let mut ws = InMemoryWorkspace::new();
        ws.add_file("api", "b.yaml", "B")
            .add_file("api", "a.yaml", "A")
            .add_file("api", "b.yaml", "B2");

        assert_eq!(ws.list_addon_files("api").unwrap(), vec!["b.yaml", "a.yaml"]);
        assert_eq!(ws.read_addon_file("api", "b.yaml").unwrap(), b"B2");
    }

    #[test]
    fn unknown_service_is_not_found() {
        let ws = InMemoryWorkspace::new();
        assert!(ws.list_addon_files("api").unwrap_err().is_not_found());
    }

    #[test]
    fn reads_are_counted_and_can_fail() {
        let mut ws = InMemoryWorkspace::new();
        ws.add_file("api", "a.yaml", "A").fail_reads_of("api", "a.yaml");

        assert!(ws.read_addon_file("api", "a.yaml").is_err());
        assert!(ws.read_addon_file("api", "missing.yaml").is_err());
        assert_eq!(ws.read_count(), 2);
    }
}
