use crate::addons::classify::classify;
use crate::addons::{Addons, AddonsOptions};
use crate::commands::{CmdMessage, CmdResult, ListedFile};
use crate::error::Result;
use crate::workspace::WorkspaceReader;

/// Lists the addons directory in fold order, marking what each file contributes to.
pub fn run<W: WorkspaceReader>(ws: &W, svc_name: &str, options: AddonsOptions) -> Result<CmdResult> {
    let addons = Addons::new(svc_name, ws)?.with_options(options);
    let files: Vec<ListedFile> = addons
        .list()?
        .into_iter()
        .map(|name| {
            let category = classify(&name);
            ListedFile { name, category }
        })
        .collect();

    let mut result = CmdResult::default();
    if files.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No addons files found for service {}",
            svc_name
        )));
    } else if let Err(err) = addons.aggregate() {
        result.add_message(CmdMessage::warning(err.to_string()));
    }
    Ok(result.with_listed_files(files))
}
