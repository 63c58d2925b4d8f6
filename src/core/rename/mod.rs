//! Literal find-and-replace over project item and composition layer names.
//!
//! One procedure serves both scopes: validate the find text, open an undo
//! group, resolve the scope from the host, run the snapshot-then-mutate pass
//! and close the group on every path.

mod renamer;
mod scope;

use serde::Serialize;

use crate::defaults::UndoLabels;
use crate::error::{Error, Result};
use crate::host::{Host, Transaction};
use crate::project::NameChange;

pub use renamer::{execute, LiteralMatcher, RenameReport};
pub use scope::{Scope, ScopeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub find: String,
    pub replace: String,
}

impl RenameRequest {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.find.is_empty() {
            return Err(Error::invalid_input("find"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOutcome {
    pub scope: ScopeKind,
    pub scope_label: String,
    pub matched_count: usize,
    pub renamed_count: usize,
    pub renamed: Vec<NameChange>,
}

/// Run one find-and-replace pass against the host's current scope.
///
/// Empty find text fails before the host is touched. Otherwise the whole pass,
/// including scope resolution, runs inside a single undo group that is closed
/// whether the pass succeeds or fails.
pub fn find_replace<H: Host + ?Sized>(
    host: &mut H,
    scope: ScopeKind,
    request: &RenameRequest,
    labels: &UndoLabels,
) -> Result<RenameOutcome> {
    request.validate()?;

    let mut tx = Transaction::begin(host, scope.undo_label(labels))?;

    let outcome = run_pass(&mut *tx, scope, request);
    let closed = tx.commit();

    let outcome = outcome?;
    closed?;
    Ok(outcome)
}

fn run_pass<H: Host + ?Sized>(
    host: &mut H,
    kind: ScopeKind,
    request: &RenameRequest,
) -> Result<RenameOutcome> {
    let scope = kind.resolve(host.open_project())?;
    let label = scope.label;
    let report = execute(scope.targets, &request.find, &request.replace)?;

    crate::log_status!(
        "rename",
        "{} of {} matching name(s) changed in '{}'",
        report.renamed_count,
        report.matched_count,
        label
    );

    Ok(RenameOutcome {
        scope: kind,
        scope_label: label,
        matched_count: report.matched_count,
        renamed_count: report.renamed_count,
        renamed: report.renamed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DocumentHost;
    use crate::project::{ItemType, Layer, ProjectDocument, ProjectItem};

    fn host() -> DocumentHost {
        let mut doc = ProjectDocument::new(vec![
            ProjectItem::new("a", "Intro_v1", ItemType::Footage),
            ProjectItem::new("b", "Outro_v1", ItemType::Footage),
            ProjectItem::composition(
                "comp",
                "Main_v1",
                vec![
                    Layer::new("l1", "Title_v1"),
                    Layer::new("l2", "Lower_v1").locked(),
                ],
            ),
        ]);
        doc.active_item = Some("comp".to_string());
        DocumentHost::in_memory(doc)
    }

    #[test]
    fn project_pass_records_one_undo_group() {
        let mut host = host();
        let outcome = find_replace(
            &mut host,
            ScopeKind::ProjectItems,
            &RenameRequest::new("_v1", ""),
            &UndoLabels::default(),
        )
        .unwrap();

        assert_eq!(outcome.renamed_count, 3);
        assert_eq!(outcome.scope_label, "project");
        let history = &host.project().unwrap().history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].label, "Find & Replace Project Items");
        assert!(!host.in_transaction());
    }

    #[test]
    fn composition_failure_still_closes_group() {
        let mut host = host();
        let err = find_replace(
            &mut host,
            ScopeKind::CompositionLayers,
            &RenameRequest::new("_v1", "_v2"),
            &UndoLabels::default(),
        )
        .unwrap_err();

        assert_eq!(err.code, crate::ErrorCode::HostOperationFailed);
        assert!(!host.in_transaction());

        let project = host.project().unwrap();
        assert_eq!(project.items()[2].layers()[0].name, "Title_v2");
        assert_eq!(project.history.len(), 1);
        assert_eq!(project.history[0].label, "Find & Replace Composition Layers");
    }

    #[test]
    fn invalid_input_never_opens_group() {
        let mut host = host();
        let err = find_replace(
            &mut host,
            ScopeKind::ProjectItems,
            &RenameRequest::new("", "x"),
            &UndoLabels::default(),
        )
        .unwrap_err();

        assert_eq!(err.code, crate::ErrorCode::ValidationInvalidInput);
        assert!(!host.in_transaction());
        assert!(host.project().unwrap().history.is_empty());
    }

    #[test]
    fn closed_host_reports_no_project() {
        let mut host = DocumentHost::closed();
        let err = find_replace(
            &mut host,
            ScopeKind::CompositionLayers,
            &RenameRequest::new("a", "b"),
            &UndoLabels::default(),
        )
        .unwrap_err();

        assert_eq!(err.code, crate::ErrorCode::ScopeNoProject);
        assert!(!host.in_transaction());
    }
}
