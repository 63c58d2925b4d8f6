use std::path::{Path, PathBuf};

use super::Host;
use crate::error::{Error, Result};
use crate::local_files::{self, FileSystem};
use crate::project::{NameChange, ProjectDocument, UndoGroup};

/// Host backed by a JSON project document.
///
/// Beginning a transaction snapshots every name in the document; ending it
/// records the names that changed as one undo group and, when the host is
/// backed by a file, writes the document back.
#[derive(Debug, Default)]
pub struct DocumentHost {
    project: Option<ProjectDocument>,
    path: Option<PathBuf>,
    pending: Option<PendingGroup>,
}

#[derive(Debug)]
struct PendingGroup {
    label: String,
    /// Positional (id, name) pairs. Ids are not unique across compositions.
    names: Vec<(String, String)>,
}

impl DocumentHost {
    /// A host with no open project.
    pub fn closed() -> Self {
        Self::default()
    }

    /// A host over an in-memory document that is never written anywhere.
    pub fn in_memory(project: ProjectDocument) -> Self {
        Self {
            project: Some(project),
            ..Self::default()
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let content = local_files::local().read(path)?;
        let project = ProjectDocument::parse(&content)?;
        crate::log_status!(
            "project",
            "Opened {} ({} items)",
            path.display(),
            project.items().len()
        );

        Ok(Self {
            project: Some(project),
            path: Some(path.to_path_buf()),
            pending: None,
        })
    }

    pub fn project(&self) -> Option<&ProjectDocument> {
        self.project.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn in_transaction(&self) -> bool {
        self.pending.is_some()
    }

    /// Write the document to its backing file, if there is one.
    pub fn save(&self) -> Result<()> {
        let (Some(project), Some(path)) = (&self.project, &self.path) else {
            return Ok(());
        };

        let content = project.to_json()?;
        local_files::local().write(path, &content)?;
        crate::log_status!("project", "Saved {}", path.display());
        Ok(())
    }
}

impl Host for DocumentHost {
    fn begin_transaction(&mut self, label: &str) -> Result<()> {
        if let Some(pending) = &self.pending {
            return Err(Error::host_transaction_state(format!(
                "Undo group '{}' is already open",
                pending.label
            )));
        }

        let names = self
            .project
            .as_ref()
            .map(ProjectDocument::name_index)
            .unwrap_or_default();

        self.pending = Some(PendingGroup {
            label: label.to_string(),
            names,
        });
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<()> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| Error::host_transaction_state("No undo group is open"))?;

        let Some(project) = self.project.as_mut() else {
            return Ok(());
        };

        // A pass renames but never adds or removes targets, so positions line up.
        let changes: Vec<NameChange> = pending
            .names
            .into_iter()
            .zip(project.name_index())
            .filter(|((before_id, before), (id, name))| before_id == id && before != name)
            .map(|((_, before), (id, name))| NameChange {
                id,
                from: before,
                to: name,
            })
            .collect();

        if changes.is_empty() {
            return Ok(());
        }

        project.history.push(UndoGroup {
            label: pending.label,
            recorded_at: chrono::Utc::now().to_rfc3339(),
            changes,
        });

        self.save()
    }

    fn open_project(&mut self) -> Option<&mut ProjectDocument> {
        self.project.as_mut()
    }
}
