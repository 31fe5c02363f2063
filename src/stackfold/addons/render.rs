//! Hands the merged sections to the bundled `addons/cf.yml` template.
//!
//! In [`SplitMode::Lines`] every section is split on newlines and each line becomes one
//! template entry. This assumes the template only needs line-level insertion points: a
//! multi-line resource turns into several independent entries, which only comes out right
//! because the template indents every entry by the same amount. [`SplitMode::Blocks`] keeps
//! one entry per source file instead.

use crate::error::AddonsError;
use crate::model::{AggregatedAddons, Slot, SplitMode};
use serde::Serialize;
use stencil::Renderer;

/// Identifier of the template the sections are rendered into.
pub const ADDONS_TEMPLATE: &str = "addons/cf.yml";
pub const ADDONS_TEMPLATE_SOURCE: &str = include_str!("../templates/addons/cf.yml");

#[derive(Debug, Serialize)]
struct AddonsTemplateData<'a> {
    svc_name: &'a str,
    parameters: Vec<&'a str>,
    resources: Vec<&'a str>,
    outputs: Vec<&'a str>,
}

/// A renderer with the addons template registered.
pub fn addons_renderer() -> Result<Renderer, AddonsError> {
    let mut renderer = Renderer::plain();
    renderer.add_template(ADDONS_TEMPLATE, ADDONS_TEMPLATE_SOURCE)?;
    Ok(renderer)
}

/// Template entries for one slot.
pub fn entries(slot: &Slot, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Lines => slot.text().trim().split('\n').map(str::to_string).collect(),
        SplitMode::Blocks => slot
            .blocks()
            .iter()
            .filter(|b| !b.is_empty())
            .cloned()
            .collect(),
    }
}

pub fn render(
    renderer: &Renderer,
    svc_name: &str,
    addons: &AggregatedAddons,
    mode: SplitMode,
) -> Result<String, AddonsError> {
    let parameters = entries(&addons.parameters, mode);
    let resources = entries(&addons.resources, mode);
    let outputs = entries(&addons.outputs, mode);

    let data = AddonsTemplateData {
        svc_name,
        parameters: parameters.iter().map(String::as_str).collect(),
        resources: resources.iter().map(String::as_str).collect(),
        outputs: outputs.iter().map(String::as_str).collect(),
    };
    Ok(renderer.render(ADDONS_TEMPLATE, &data)?)
}
