use serde::Serialize;

use crate::defaults::UndoLabels;
use crate::error::{Error, Result};
use crate::project::{ProjectDocument, RenameTarget};

/// Which host collection a rename pass applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    ProjectItems,
    CompositionLayers,
}

/// Targets resolved from the live document for one pass.
pub struct Scope<'p> {
    pub label: String,
    pub targets: Vec<&'p mut dyn RenameTarget>,
}

impl ScopeKind {
    pub fn undo_label<'l>(&self, labels: &'l UndoLabels) -> &'l str {
        match self {
            ScopeKind::ProjectItems => &labels.project,
            ScopeKind::CompositionLayers => &labels.composition,
        }
    }

    /// Resolve against the project as it is now. Nothing is cached between passes.
    pub fn resolve<'p>(&self, project: Option<&'p mut ProjectDocument>) -> Result<Scope<'p>> {
        let project = project.ok_or_else(Error::no_project)?;

        match self {
            ScopeKind::ProjectItems => Ok(Scope {
                label: project.label().to_string(),
                targets: project
                    .items_mut()
                    .iter_mut()
                    .map(|item| item as &mut dyn RenameTarget)
                    .collect(),
            }),
            ScopeKind::CompositionLayers => {
                let active_item = project.active_item.clone();
                let composition = project
                    .active_composition_mut()
                    .ok_or_else(|| Error::no_composition(active_item))?;

                Ok(Scope {
                    label: composition.name.clone(),
                    targets: composition
                        .layers_mut()
                        .iter_mut()
                        .map(|layer| layer as &mut dyn RenameTarget)
                        .collect(),
                })
            }
        }
    }
}
