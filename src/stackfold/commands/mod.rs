use crate::addons::ClassifiedFile;
use crate::config::StackfoldConfig;
use crate::model::Category;
use std::path::PathBuf;

pub mod config;
pub mod list;
pub mod template;

/// Where configuration is read from and written to.
#[derive(Debug, Clone)]
pub struct StackfoldPaths {
    /// `<workspace>/.stackfold`
    pub project: PathBuf,
    /// User-wide config directory, when the platform has one
    pub global: Option<PathBuf>,
}

impl StackfoldPaths {
    /// Config directories in lookup order.
    pub fn config_dirs(&self) -> Vec<PathBuf> {
        std::iter::once(self.project.clone())
            .chain(self.global.clone())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One entry of a directory listing and what composition does with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    /// `None` for files that are ignored.
    pub category: Option<Category>,
}

impl From<ClassifiedFile> for ListedFile {
    fn from(file: ClassifiedFile) -> Self {
        Self {
            name: file.name,
            category: Some(file.category),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub template: Option<String>,
    pub listed_files: Vec<ListedFile>,
    pub config: Option<StackfoldConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_listed_files(mut self, files: Vec<ListedFile>) -> Self {
        self.listed_files = files;
        self
    }

    pub fn with_config(mut self, config: StackfoldConfig) -> Self {
        self.config = Some(config);
        self
    }
}
