use clap::Args;
use serde::Serialize;

use findreplace::defaults;
use findreplace::project::NameChange;
use findreplace::rename::{self, RenameRequest, ScopeKind};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Literal text to find (case-sensitive)
    #[arg(long, allow_hyphen_values = true)]
    pub find: String,
    /// Replacement text (empty removes the found text)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub replace: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOutput {
    command: String,
    scope: ScopeKind,
    scope_label: String,
    find: String,
    replace: String,
    matched_count: usize,
    renamed_count: usize,
    renamed: Vec<NameChange>,
}

pub fn run(
    args: RenameArgs,
    scope: ScopeKind,
    global: &crate::commands::GlobalArgs,
) -> CmdResult<RenameOutput> {
    let request = RenameRequest::new(args.find, args.replace);
    // Reject empty find text before the project document is even read.
    request.validate()?;

    let labels = defaults::load_defaults().undo_labels;
    let mut host = global.open_host()?;
    let outcome = rename::find_replace(&mut host, scope, &request, &labels)?;

    let command = match scope {
        ScopeKind::ProjectItems => "rename-project-items",
        ScopeKind::CompositionLayers => "rename-composition-layers",
    };

    Ok((
        RenameOutput {
            command: command.to_string(),
            scope: outcome.scope,
            scope_label: outcome.scope_label,
            find: request.find,
            replace: request.replace,
            matched_count: outcome.matched_count,
            renamed_count: outcome.renamed_count,
            renamed: outcome.renamed,
        },
        0,
    ))
}
