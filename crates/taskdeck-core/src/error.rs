use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskdeckError {
    #[error("title is required")]
    MissingTitle,
}
