//! # Addons Template Composition
//!
//! Turns the fragments in a service's addons directory into one deployable template.
//!
//! ```text
//! list ──▶ classify ──▶ aggregate ──▶ validate ──▶ render
//!          (.yaml/.yml   (read, trim,  (params,     (split into entries,
//!           only)         fold)         outputs,     fill addons/cf.yml)
//!                                       resources)
//! ```
//!
//! - `params.yaml`/`params.yml` fill the Parameters section, `outputs.yaml`/`outputs.yml`
//!   the Outputs section. Both keep only the last file folded into them.
//! - Every other YAML file is a resource fragment. Resources concatenate in fold order.
//! - Files with any other extension are ignored.
//!
//! Fold order is the workspace reader's listing order unless [`ListingOrder::Sorted`] is
//! requested. The filesystem reader already lists sorted, other readers may not.
//!
//! [`Addons`] holds nothing but its configuration, so [`Addons::template`] can be called
//! any number of times and returns the same text while the files are unchanged.

use crate::error::AddonsError;
use crate::model::{AggregatedAddons, ListingOrder, SplitMode};
use crate::workspace::WorkspaceReader;
use stencil::Renderer;
use tracing::debug;

pub mod aggregate;
pub mod classify;
pub mod render;
pub mod validate;

pub use classify::ClassifiedFile;

/// Logical name of the nested stack that deploys the composed template.
pub const STACK_NAME: &str = "AddonsStack";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddonsOptions {
    pub listing_order: ListingOrder,
    pub split_mode: SplitMode,
}

/// The addons of one service.
pub struct Addons<W: WorkspaceReader> {
    svc_name: String,
    ws: W,
    renderer: Renderer,
    options: AddonsOptions,
}

impl<W: WorkspaceReader> Addons<W> {
    /// Creates the addons of `svc_name` with the bundled template and default options.
    pub fn new(svc_name: impl Into<String>, ws: W) -> Result<Self, AddonsError> {
        Ok(Self {
            svc_name: svc_name.into(),
            ws,
            renderer: render::addons_renderer()?,
            options: AddonsOptions::default(),
        })
    }

    pub fn with_options(mut self, options: AddonsOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the renderer. It must provide [`render::ADDONS_TEMPLATE`].
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn svc_name(&self) -> &str {
        &self.svc_name
    }

    pub fn options(&self) -> AddonsOptions {
        self.options
    }

    /// The directory listing, ordered as it will be folded.
    pub fn list(&self) -> Result<Vec<String>, AddonsError> {
        let mut names = self
            .ws
            .list_addon_files(&self.svc_name)
            .map_err(|source| AddonsError::DirectoryNotFound {
                svc: self.svc_name.clone(),
                source,
            })?;
        if self.options.listing_order == ListingOrder::Sorted {
            names.sort();
        }
        Ok(names)
    }

    /// Classified YAML files, in fold order.
    pub fn classified(&self) -> Result<Vec<ClassifiedFile>, AddonsError> {
        let names = self.list()?;
        let files = classify::classify_all(&names);
        debug!(
            svc = %self.svc_name,
            listed = names.len(),
            kept = files.len(),
            "classified addons files"
        );
        Ok(files)
    }

    /// Reads, merges and validates the addons without rendering them.
    pub fn aggregate(&self) -> Result<AggregatedAddons, AddonsError> {
        let files = self.classified()?;
        let addons = aggregate::aggregate(&self.ws, &self.svc_name, &files)?;
        validate::validate(&addons)?;
        Ok(addons)
    }

    /// Merges the addons directory into a single template.
    pub fn template(&self) -> Result<String, AddonsError> {
        let addons = self.aggregate()?;
        render::render(
            &self.renderer,
            &self.svc_name,
            &addons,
            self.options.split_mode,
        )
    }
}
