use crate::domain::review::ReviewError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationAction {
    Create,
    Update,
    Delete,
}

impl Display for ModificationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self {
            ModificationAction::Create => "create",
            ModificationAction::Update => "update",
            ModificationAction::Delete => "delete",
        };
        write!(f, "{action}")
    }
}

/// A proposed file change as handed over by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ModificationRecord {
    pub file_path: String,
    pub action: ModificationAction,
    #[serde(default)]
    pub content_before: Option<String>,
    #[serde(default)]
    pub content_after: String,
}

impl ModificationRecord {
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The old text; a missing before-snapshot (a created file) is empty.
    pub fn before(&self) -> &str {
        self.content_before.as_deref().unwrap_or_default()
    }

    pub fn after(&self) -> &str {
        &self.content_after
    }
}
