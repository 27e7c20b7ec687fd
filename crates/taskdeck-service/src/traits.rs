use async_trait::async_trait;
use taskdeck_core::Task;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<taskdeck_core::TaskdeckError> for ServiceError {
    fn from(e: taskdeck_core::TaskdeckError) -> Self {
        ServiceError::InvalidInput(e.to_string())
    }
}

/// The task collection contract.
///
/// The view controllers program against this trait.
/// `HttpService` talks to a running taskdeck-server.
/// `LocalService` is the in-memory store the server itself uses.
///
/// Each call is a single round trip: no retries, no timeouts.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// The full collection, in server order.
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError>;
    /// `task.id` is ignored; the returned record carries the assigned id.
    async fn create_task(&self, task: &Task) -> Result<Task, ServiceError>;
    /// Full replace of the record identified by `id`.
    async fn update_task(&self, id: &str, task: &Task) -> Result<Task, ServiceError>;
    async fn delete_task(&self, id: &str) -> Result<(), ServiceError>;
}
