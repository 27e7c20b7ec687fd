use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TaskdeckError;

/// A task as exchanged with the backend.
///
/// `id` is absent until the backend has persisted the record. The wire
/// shape is camelCase with absent optionals omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            completed: false,
            due_date: None,
        }
    }

    /// Whitespace-only titles count as missing.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), TaskdeckError> {
        if self.has_title() {
            Ok(())
        } else {
            Err(TaskdeckError::MissingTitle)
        }
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordering applied to the derived task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    DueDate,
    Title,
    Status,
}

impl SortKey {
    pub const ALL: &[SortKey] = &[SortKey::DueDate, SortKey::Title, SortKey::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DueDate => "dueDate",
            SortKey::Title => "title",
            SortKey::Status => "status",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::DueDate => "Due date",
            SortKey::Title => "Title",
            SortKey::Status => "Status",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dueDate" => Some(SortKey::DueDate),
            "title" => Some(SortKey::Title),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }

    /// Next key in `ALL`, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            SortKey::DueDate => SortKey::Title,
            SortKey::Title => SortKey::Status,
            SortKey::Status => SortKey::DueDate,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
