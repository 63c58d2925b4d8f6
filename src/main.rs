use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    InteractivePassthrough,
}

mod commands;
mod output;
mod tty;

use commands::{config, panel, project, rename};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "findreplace")]
#[command(version = VERSION)]
#[command(about = "Literal find-and-replace over project item and composition layer names")]
struct Cli {
    /// Project document (defaults to defaults.project in findreplace.json)
    #[arg(long, global = true, value_name = "PATH")]
    project: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find and replace in the names of all project items
    RenameProjectItems(rename::RenameArgs),
    /// Find and replace in the layer names of the active composition
    RenameCompositionLayers(rename::RenameArgs),
    /// Inspect the project document and choose the active item
    Project(project::ProjectArgs),
    /// Manage global findreplace configuration
    Config(config::ConfigArgs),
    /// Interactive find & replace panel
    Panel(panel::PanelArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Panel(_) => ResponseMode::InteractivePassthrough,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        project: cli.project,
    };

    let mode = response_mode(&cli.command);

    if let ResponseMode::InteractivePassthrough = mode {
        if !tty::require_tty_for_interactive() {
            let err = findreplace::Error::validation_invalid_argument(
                "tty",
                "This command requires an interactive TTY",
                None,
                None,
            );
            output::print_result::<serde_json::Value>(Err(err)).ok();
            return std::process::ExitCode::from(exit_code_to_u8(2));
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    match mode {
        ResponseMode::Json => {
            if let Err(err) = output::print_json_result(json_result) {
                eprintln!("{}", err);
                return std::process::ExitCode::from(1);
            }
        }
        ResponseMode::InteractivePassthrough => {
            if let Err(err) = json_result {
                output::print_result::<serde_json::Value>(Err(err)).ok();
            }
        }
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
