use clap::{Args, Subcommand};
use serde::Serialize;

use findreplace::host::Host;
use findreplace::project::{ProjectDocument, UndoGroup};
use findreplace::Error;

use super::CmdResult;

#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Show project items, their layer counts and the active item
    Show,
    /// Make an item the active item (by id, then by exact name)
    Activate {
        /// Item ID or name
        item: String,
    },
    /// List recorded undo groups
    History,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    id: String,
    name: String,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer_count: Option<usize>,
    active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    command: String,
    path: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<ItemSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<UndoGroup>>,
}

pub fn run(args: ProjectArgs, global: &crate::commands::GlobalArgs) -> CmdResult<ProjectOutput> {
    let mut host = global.open_host()?;
    let path = host
        .path()
        .map(|p| p.display().to_string())
        .ok_or_else(Error::no_project)?;

    match args.command {
        ProjectCommand::Show => {
            let project = host.project().ok_or_else(Error::no_project)?;
            Ok((output("project.show", path, project, true, false), 0))
        }
        ProjectCommand::Activate { item } => {
            let project = host.open_project().ok_or_else(Error::no_project)?;
            let activated = project.activate(&item)?;
            findreplace::log_status!("project", "Active item is now '{}'", activated.name);

            host.save()?;
            let project = host.project().ok_or_else(Error::no_project)?;
            Ok((output("project.activate", path, project, true, false), 0))
        }
        ProjectCommand::History => {
            let project = host.project().ok_or_else(Error::no_project)?;
            Ok((output("project.history", path, project, false, true), 0))
        }
    }
}

fn output(
    command: &str,
    path: String,
    project: &ProjectDocument,
    with_items: bool,
    with_history: bool,
) -> ProjectOutput {
    let active_id = project.active_item.as_deref();

    let items = with_items.then(|| {
        project
            .items()
            .iter()
            .map(|item| ItemSummary {
                id: item.id.clone(),
                name: item.name.clone(),
                item_type: item.item_type.as_str().to_string(),
                layer_count: item.is_composition().then(|| item.layers().len()),
                active: active_id == Some(item.id.as_str()),
            })
            .collect()
    });

    ProjectOutput {
        command: command.to_string(),
        path,
        label: project.label().to_string(),
        active_item: project.active_item().map(|item| item.name.clone()),
        items,
        history: with_history.then(|| project.history.clone()),
    }
}
