use clap::{Args, Subcommand};
use serde::Serialize;

use findreplace::defaults::{self, FindReplaceConfig};
use findreplace::paths;
use findreplace::Error;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show,
    /// Set the project document used when --project is omitted
    SetProject {
        /// Path to an existing project document (stored as an absolute path)
        path: String,
    },
    /// Forget the default project document
    ClearProject,
    /// Show the path to findreplace.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<FindReplaceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
}

pub fn run_json(args: ConfigArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show => Ok((
            ConfigOutput {
                command: "config.show".to_string(),
                config: Some(defaults::load_config()),
                path: None,
                exists: None,
            },
            0,
        )),
        ConfigCommand::SetProject { path } => set_project(Some(path)),
        ConfigCommand::ClearProject => set_project(None),
        ConfigCommand::Path => {
            let path = paths::findreplace_json()?;
            Ok((
                ConfigOutput {
                    command: "config.path".to_string(),
                    config: None,
                    path: Some(path.display().to_string()),
                    exists: Some(defaults::config_exists()),
                },
                0,
            ))
        }
    }
}

/// Expand and canonicalize a project path so later runs resolve it the same way
/// from any working directory.
fn resolve_project_path(raw: &str) -> findreplace::Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::config_invalid_value(
            "defaults.project",
            Some(raw.to_string()),
            "path must not be empty",
        ));
    }

    let expanded = paths::expand(raw)?;
    let canonical = std::fs::canonicalize(&expanded).map_err(|e| {
        Error::config_invalid_value(
            "defaults.project",
            Some(raw.to_string()),
            format!("cannot resolve {}: {}", expanded.display(), e),
        )
    })?;

    Ok(canonical.display().to_string())
}

fn set_project(path: Option<String>) -> CmdResult<ConfigOutput> {
    let project = path.as_deref().map(resolve_project_path).transpose()?;

    let mut config = defaults::load_config();
    config.defaults.project = project;
    defaults::save_config(&config)?;

    let command = if config.defaults.project.is_some() {
        "config.set_project"
    } else {
        "config.clear_project"
    };

    Ok((
        ConfigOutput {
            command: command.to_string(),
            config: Some(config),
            path: None,
            exists: None,
        },
        0,
    ))
}
