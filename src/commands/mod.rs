use std::path::PathBuf;

use findreplace::defaults;
use findreplace::host::DocumentHost;
use findreplace::paths;

pub type CmdResult<T> = findreplace::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Project document from `--project`, before expansion.
    pub project: Option<String>,
}

impl GlobalArgs {
    /// The project document path: `--project` first, then `defaults.project`.
    pub fn project_path(&self) -> findreplace::Result<Option<PathBuf>> {
        let raw = match &self.project {
            Some(raw) => Some(raw.clone()),
            None => defaults::load_defaults().project,
        };

        raw.as_deref().map(paths::expand).transpose()
    }

    /// Open the host. No configured path means a host with no open project.
    pub fn open_host(&self) -> findreplace::Result<DocumentHost> {
        match self.project_path()? {
            Some(path) => DocumentHost::open(&path),
            None => Ok(DocumentHost::closed()),
        }
    }
}

pub mod config;
pub mod panel;
pub mod project;
pub mod rename;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (findreplace::Result<serde_json::Value>, i32) {
    crate::tty::status("findreplace is working...");

    match command {
        crate::Commands::RenameProjectItems(args) => crate::output::map_cmd_result_to_json(
            rename::run(args, findreplace::rename::ScopeKind::ProjectItems, global),
        ),
        crate::Commands::RenameCompositionLayers(args) => crate::output::map_cmd_result_to_json(
            rename::run(args, findreplace::rename::ScopeKind::CompositionLayers, global),
        ),
        crate::Commands::Project(args) => dispatch!(args, global, project),
        crate::Commands::Config(args) => dispatch!(args, config),
        crate::Commands::Panel(args) => dispatch!(args, global, panel),
    }
}
