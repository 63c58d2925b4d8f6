use clap::Args;
use serde::Serialize;

use findreplace::defaults;
use findreplace::panel::{Panel, Status, StatusTone};
use findreplace::rename::ScopeKind;

use super::CmdResult;
use crate::tty;

#[derive(Args, Debug, Default)]
pub struct PanelArgs {
    /// Initial find text
    #[arg(long)]
    pub find: Option<String>,
    /// Initial replace text
    #[arg(long, allow_hyphen_values = true)]
    pub replace: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOutput {
    command: String,
    actions: usize,
    status: String,
}

#[derive(Debug, PartialEq, Eq)]
enum PanelAction {
    SetFind(String),
    SetReplace(String),
    Swap,
    Apply(ScopeKind),
    Status,
    Help,
    Quit,
}

const HELP: &str = "find <text> | replace <text> | swap | project | comp | status | quit";

/// Parse one panel line. Field text is everything after the first space, kept verbatim.
fn parse_line(line: &str) -> Option<PanelAction> {
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    match word {
        "find" | "f" => Some(PanelAction::SetFind(rest.to_string())),
        "replace" | "r" => Some(PanelAction::SetReplace(rest.to_string())),
        "swap" | "s" => Some(PanelAction::Swap),
        "project" | "p" => Some(PanelAction::Apply(ScopeKind::ProjectItems)),
        "comp" | "c" => Some(PanelAction::Apply(ScopeKind::CompositionLayers)),
        "status" => Some(PanelAction::Status),
        "help" | "?" => Some(PanelAction::Help),
        "quit" | "q" | "exit" => Some(PanelAction::Quit),
        _ => None,
    }
}

fn render(status: &Status) -> String {
    let marker = match status.tone() {
        StatusTone::Neutral => " ",
        StatusTone::Success => "+",
        StatusTone::Error => "!",
        StatusTone::Info => "~",
    };
    format!("{} {}", marker, status)
}

pub fn run(args: PanelArgs, global: &crate::commands::GlobalArgs) -> CmdResult<PanelOutput> {
    let mut panel = Panel::new(defaults::load_defaults().undo_labels);
    if let Some(find) = args.find {
        panel.set_find_text(find);
    }
    if let Some(replace) = args.replace {
        panel.set_replace_text(replace);
    }

    println!("{}", HELP);
    println!("{}", render(panel.status()));

    let mut actions = 0;
    loop {
        let prompt = format!("[find '{}' | replace '{}'] > ", panel.find_text(), panel.replace_text());
        let Some(line) = tty::prompt(&prompt)? else {
            break;
        };

        let Some(action) = parse_line(&line) else {
            if !line.is_empty() {
                println!("{}", HELP);
            }
            continue;
        };

        match action {
            PanelAction::SetFind(text) => panel.set_find_text(text),
            PanelAction::SetReplace(text) => panel.set_replace_text(text),
            PanelAction::Swap => panel.swap(),
            PanelAction::Apply(scope) => {
                println!("{}", render(&Status::Processing));
                // The document is re-read for every pass so the scope is always current.
                match global.open_host() {
                    Ok(mut host) => {
                        panel.apply(&mut host, scope);
                    }
                    Err(err) => println!("! Error: {}", err),
                }
            }
            PanelAction::Status => {}
            PanelAction::Help => {
                println!("{}", HELP);
                continue;
            }
            PanelAction::Quit => break,
        }

        actions += 1;
        println!("{}", render(panel.status()));
    }

    Ok((
        PanelOutput {
            command: "panel".to_string(),
            actions,
            status: panel.status().to_string(),
        },
        0,
    ))
}
