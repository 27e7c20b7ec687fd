pub mod draft;
pub mod due_date;
pub mod error;
pub mod task;
pub mod view;

pub use draft::TaskDraft;
pub use error::TaskdeckError;
pub use task::{SortKey, Task};
