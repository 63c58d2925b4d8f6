//! Find & Replace panel state: two text fields and a one-line status readout.

use std::fmt;

use crate::defaults::UndoLabels;
use crate::error::{Error, ErrorCode};
use crate::host::Host;
use crate::rename::{self, RenameOutcome, RenameRequest, ScopeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Processing,
    Swapped,
    Completed { find: String, outcome: RenameOutcome },
    Failed { code: ErrorCode, message: String },
}

impl Status {
    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Ready => StatusTone::Neutral,
            Status::Processing | Status::Completed { .. } => StatusTone::Success,
            Status::Swapped => StatusTone::Info,
            Status::Failed { .. } => StatusTone::Error,
        }
    }

    fn from_error(err: &Error) -> Self {
        Status::Failed {
            code: err.code,
            message: err.message.clone(),
        }
    }

    /// Errors and the empty-input prompt clear back to `Ready` once a field is
    /// edited. Missing-scope messages stay until the next action.
    fn clears_on_edit(&self) -> bool {
        matches!(self, Status::Failed { code, .. } if !code.is_no_scope())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Processing => write!(f, "Processing..."),
            Status::Swapped => write!(f, "Swapped find and replace text"),
            Status::Completed { find, outcome } => match outcome.scope {
                ScopeKind::ProjectItems if outcome.renamed_count > 0 => write!(
                    f,
                    "Replaced '{}' in {} project item(s)",
                    find, outcome.renamed_count
                ),
                ScopeKind::ProjectItems => {
                    write!(f, "No project items found containing '{}'", find)
                }
                ScopeKind::CompositionLayers if outcome.renamed_count > 0 => write!(
                    f,
                    "Replaced '{}' in {} layer(s) in '{}'",
                    find, outcome.renamed_count, outcome.scope_label
                ),
                ScopeKind::CompositionLayers => write!(
                    f,
                    "No layers found containing '{}' in '{}'",
                    find, outcome.scope_label
                ),
            },
            Status::Failed { code, message } => match code {
                ErrorCode::ValidationInvalidInput
                | ErrorCode::ScopeNoProject
                | ErrorCode::ScopeNoComposition => write!(f, "{}", message),
                _ => write!(f, "Error: {}", message),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    find_text: String,
    replace_text: String,
    status: Status,
    labels: UndoLabels,
}

impl Panel {
    pub fn new(labels: UndoLabels) -> Self {
        Self {
            find_text: String::new(),
            replace_text: String::new(),
            status: Status::Ready,
            labels,
        }
    }

    pub fn find_text(&self) -> &str {
        &self.find_text
    }

    pub fn replace_text(&self) -> &str {
        &self.replace_text
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn set_find_text(&mut self, text: impl Into<String>) {
        self.find_text = text.into();
        self.reset_after_edit();
    }

    pub fn set_replace_text(&mut self, text: impl Into<String>) {
        self.replace_text = text.into();
        self.reset_after_edit();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.find_text, &mut self.replace_text);
        self.status = Status::Swapped;
    }

    /// Run one pass and leave the result in the status line.
    pub fn apply<H: Host + ?Sized>(&mut self, host: &mut H, scope: ScopeKind) -> &Status {
        self.status = Status::Processing;

        let request = RenameRequest::new(self.find_text.clone(), self.replace_text.clone());
        self.status = match rename::find_replace(host, scope, &request, &self.labels) {
            Ok(outcome) => Status::Completed {
                find: request.find,
                outcome,
            },
            Err(err) => Status::from_error(&err),
        };

        &self.status
    }

    fn reset_after_edit(&mut self) {
        if self.status.clears_on_edit() {
            self.status = Status::Ready;
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(UndoLabels::default())
    }
}
