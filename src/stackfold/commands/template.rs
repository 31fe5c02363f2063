use crate::addons::{Addons, AddonsOptions, STACK_NAME};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::workspace::WorkspaceReader;
use tracing::info;

pub fn run<W: WorkspaceReader>(ws: &W, svc_name: &str, options: AddonsOptions) -> Result<CmdResult> {
    let addons = Addons::new(svc_name, ws)?.with_options(options);
    let template = addons.template()?;

    info!(svc = svc_name, bytes = template.len(), "composed addons template");
    let mut result = CmdResult::default().with_template(template);
    result.add_message(CmdMessage::success(format!(
        "Composed addons template for service {} (stack {})",
        svc_name, STACK_NAME
    )));
    Ok(result)
}
