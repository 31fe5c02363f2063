//! Reads classified files and folds them into per-category slots.

use super::classify::ClassifiedFile;
use crate::error::AddonsError;
use crate::model::{AddonFile, AggregatedAddons};
use crate::workspace::WorkspaceReader;
use tracing::debug;

/// Reads one file and returns its trimmed content.
pub fn read_addon<W: WorkspaceReader + ?Sized>(
    ws: &W,
    svc_name: &str,
    file_name: &str,
) -> Result<AddonFile, AddonsError> {
    let bytes = ws
        .read_addon_file(svc_name, file_name)
        .map_err(|source| AddonsError::ReadFile {
            file: file_name.to_string(),
            svc: svc_name.to_string(),
            source,
        })?;
    Ok(AddonFile {
        name: file_name.to_string(),
        content: String::from_utf8_lossy(&bytes).trim().to_string(),
    })
}

/// Folds `files` in the given order. The first failed read aborts the whole fold.
pub fn aggregate<W: WorkspaceReader + ?Sized>(
    ws: &W,
    svc_name: &str,
    files: &[ClassifiedFile],
) -> Result<AggregatedAddons, AddonsError> {
    let mut addons = AggregatedAddons::default();
    for file in files {
        let addon = read_addon(ws, svc_name, &file.name)?;
        debug!(file = %addon.name, category = %file.category, bytes = addon.content.len(), "folding addons file");
        addons.fold(file.category, addon.content);
    }
    Ok(addons)
}
