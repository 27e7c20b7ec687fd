use serde::{Deserialize, Serialize};

use crate::due_date;
use crate::error::TaskdeckError;
use crate::task::Task;

/// Editable form state for a single task.
///
/// `due_date` holds the text as typed; an empty string means no due date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

impl TaskDraft {
    /// Seed a draft from a fetched record, cutting the due date down to a
    /// calendar date.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task
                .due_date
                .as_deref()
                .map(due_date::normalize)
                .unwrap_or_default()
                .to_string(),
            completed: task.completed,
        }
    }

    pub fn validate(&self) -> Result<(), TaskdeckError> {
        if self.title.trim().is_empty() {
            Err(TaskdeckError::MissingTitle)
        } else {
            Ok(())
        }
    }

    /// Build the full record sent on submit.
    pub fn to_task(&self, id: Option<String>) -> Task {
        let due_date = self.due_date.trim();
        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
            due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
        }
    }
}
