//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every stackfold operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Resolves options** from the loaded configuration plus per-call overrides
//! - **Returns structured types** (`Result<CmdResult>`), never printed text
//!
//! ## Generic Over WorkspaceReader
//!
//! `StackfoldApi<W: WorkspaceReader>` is generic over where addons come from:
//! - Production: `StackfoldApi<FsWorkspace>`
//! - Testing: `StackfoldApi<InMemoryWorkspace>`

use crate::addons::AddonsOptions;
use crate::commands;
use crate::config::StackfoldConfig;
use crate::error::{Result, StackfoldError};
use crate::model::{ListingOrder, SplitMode};
use crate::workspace::WorkspaceReader;

/// Per-call overrides of the configured addons options.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateOverrides {
    pub listing_order: Option<ListingOrder>,
    pub split_mode: Option<SplitMode>,
}

pub struct StackfoldApi<W: WorkspaceReader> {
    workspace: W,
    config: StackfoldConfig,
    paths: commands::StackfoldPaths,
}

impl<W: WorkspaceReader> StackfoldApi<W> {
    pub fn new(workspace: W, config: StackfoldConfig, paths: commands::StackfoldPaths) -> Self {
        Self {
            workspace,
            config,
            paths,
        }
    }

    /// Composes the addons template of `svc_name`.
    pub fn addons_template(
        &self,
        svc_name: &str,
        overrides: TemplateOverrides,
    ) -> Result<commands::CmdResult> {
        let svc_name = normalize_service(svc_name)?;
        commands::template::run(&self.workspace, svc_name, self.options(overrides))
    }

    /// Lists the addons directory of `svc_name` with each file's category.
    pub fn list_addons(&self, svc_name: &str) -> Result<commands::CmdResult> {
        let svc_name = normalize_service(svc_name)?;
        commands::list::run(
            &self.workspace,
            svc_name,
            self.options(TemplateOverrides::default()),
        )
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::StackfoldPaths {
        &self.paths
    }

    fn options(&self, overrides: TemplateOverrides) -> AddonsOptions {
        let base = self.config.addons_options();
        AddonsOptions {
            listing_order: overrides.listing_order.unwrap_or(base.listing_order),
            split_mode: overrides.split_mode.unwrap_or(base.split_mode),
        }
    }
}

fn normalize_service(svc_name: &str) -> Result<&str> {
    let trimmed = svc_name.trim();
    if trimmed.is_empty() {
        return Err(StackfoldError::Api("Service name cannot be empty".into()));
    }
    Ok(trimmed)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedFile, MessageLevel, StackfoldPaths};
