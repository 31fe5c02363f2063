use crate::error::AddonsError;
use crate::model::AggregatedAddons;

/// Requires every category to have content, reporting all missing ones at once.
pub fn validate(addons: &AggregatedAddons) -> Result<(), AddonsError> {
    let missing = addons.missing();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AddonsError::MissingAddonsFiles(missing))
    }
}
