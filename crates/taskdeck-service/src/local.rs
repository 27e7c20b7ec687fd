use async_trait::async_trait;
use taskdeck_core::Task;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{ServiceError, TaskService};

/// In-memory implementation backing the server.
///
/// Records keep insertion order, which is the order `list_tasks` returns.
#[derive(Default)]
pub struct LocalService {
    tasks: RwLock<Vec<Task>>,
}

impl LocalService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, ServiceError> {
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id_str() == Some(id))
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))
    }
}

#[async_trait]
impl TaskService for LocalService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn create_task(&self, task: &Task) -> Result<Task, ServiceError> {
        task.validate()?;
        let created = Task {
            id: Some(uuid::Uuid::new_v4().to_string()),
            ..task.clone()
        };
        self.tasks.write().await.push(created.clone());
        debug!("created task {:?}", created.id);
        Ok(created)
    }

    async fn update_task(&self, id: &str, task: &Task) -> Result<Task, ServiceError> {
        task.validate()?;
        let mut tasks = self.tasks.write().await;
        let existing = tasks
            .iter_mut()
            .find(|t| t.id_str() == Some(id))
            .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))?;
        existing.title = task.title.clone();
        existing.description = task.description.clone();
        existing.completed = task.completed;
        existing.due_date = task.due_date.clone();
        debug!("updated task {id}");
        Ok(existing.clone())
    }

    /// Deleting an unknown id is not an error.
    async fn delete_task(&self, id: &str) -> Result<(), ServiceError> {
        self.tasks.write().await.retain(|t| t.id_str() != Some(id));
        debug!("deleted task {id}");
        Ok(())
    }
}
