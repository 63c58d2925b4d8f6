//! Project document model.
//!
//! A project is an ordered list of items; composition items carry an ordered
//! list of layers. Items and layers are the two kinds of rename target.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Anything with a stable identity and a readable/writable name.
pub trait RenameTarget {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    #[default]
    Footage,
    Folder,
    Solid,
    Composition,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Footage => "footage",
            ItemType::Folder => "folder",
            ItemType::Solid => "solid",
            ItemType::Composition => "composition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

impl RenameTarget for Layer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) -> Result<()> {
        if self.locked {
            return Err(Error::host_operation_failed(
                &self.id,
                &self.name,
                format!("Layer '{}' is locked and cannot be renamed", self.name),
            ));
        }
        self.name = name;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
}

impl ProjectItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            layers: Vec::new(),
        }
    }

    pub fn composition(id: impl Into<String>, name: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            layers,
            ..Self::new(id, name, ItemType::Composition)
        }
    }

    pub fn is_composition(&self) -> bool {
        self.item_type == ItemType::Composition
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }
}

impl RenameTarget for ProjectItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) -> Result<()> {
        self.name = name;
        Ok(())
    }
}

/// One closed undo group: every name that changed inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoGroup {
    pub label: String,
    pub recorded_at: String,
    pub changes: Vec<NameChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChange {
    pub id: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_item: Option<String>,
    #[serde(default)]
    pub items: Vec<ProjectItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<UndoGroup>,
}

impl ProjectDocument {
    pub fn new(items: Vec<ProjectItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            Error::validation_invalid_json(e, Some("parse project document".to_string()))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize project document".to_string()))
        })
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("project")
    }

    pub fn items(&self) -> &[ProjectItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [ProjectItem] {
        &mut self.items
    }

    pub fn active_item(&self) -> Option<&ProjectItem> {
        let id = self.active_item.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }

    /// The active item, only if it is a composition.
    pub fn active_composition_mut(&mut self) -> Option<&mut ProjectItem> {
        let id = self.active_item.as_deref()?;
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .filter(|item| item.is_composition())
    }

    /// Make an item active, looked up by id first and then by exact name.
    pub fn activate(&mut self, key: &str) -> Result<&ProjectItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == key)
            .or_else(|| self.items.iter().position(|item| item.name == key))
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "item",
                    format!("No project item with id or name '{}'", key),
                    Some(key.to_string()),
                    Some(self.items.iter().map(|item| item.name.clone()).collect()),
                )
            })?;

        let item = &self.items[index];
        self.active_item = Some(item.id.clone());
        Ok(item)
    }

    /// Every (id, name) pair in the document, items first, then layers.
    pub fn name_index(&self) -> Vec<(String, String)> {
        let mut names = Vec::new();
        for item in &self.items {
            names.push((item.id.clone(), item.name.clone()));
        }
        for item in &self.items {
            for layer in &item.layers {
                names.push((layer.id.clone(), layer.name.clone()));
            }
        }
        names
    }
}
