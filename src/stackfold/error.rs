use crate::model::Category;
use crate::workspace::WorkspaceError;
use thiserror::Error;

/// Failures of a single addons composition.
///
/// Every variant aborts the composition; nothing is retried or recovered here.
#[derive(Error, Debug)]
pub enum AddonsError {
    #[error("read addons directory for service {svc}: {source}")]
    DirectoryNotFound {
        svc: String,
        #[source]
        source: WorkspaceError,
    },

    #[error("read addons file {file} under service {svc}: {source}")]
    ReadFile {
        file: String,
        svc: String,
        #[source]
        source: WorkspaceError,
    },

    #[error("addons directory has missing file(s): {}", missing_requirements(.0))]
    MissingAddonsFiles(Vec<Category>),

    #[error(transparent)]
    Render(#[from] stencil::Error),
}

impl AddonsError {
    /// Requirement descriptions for a `MissingAddonsFiles` error, empty otherwise.
    pub fn missing(&self) -> Vec<&'static str> {
        match self {
            AddonsError::MissingAddonsFiles(categories) => {
                categories.iter().map(|c| c.requirement()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn missing_requirements(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.requirement())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum StackfoldError {
    #[error(transparent)]
    Addons(#[from] AddonsError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StackfoldError>;
