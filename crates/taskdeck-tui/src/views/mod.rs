//! View controllers.
//!
//! Each view keeps its state in a plain serializable struct that only
//! changes through `update(msg)`. `update` may hand back a command; the
//! controller runs it against the `TaskService` and feeds the result back
//! in as another message.

pub mod create;
pub mod edit;
pub mod form;
pub mod list;

use taskdeck_core::TaskdeckError;
use taskdeck_service::ServiceError;
use thiserror::Error;

pub use create::{CreateController, CreateState};
pub use edit::{EditController, EditState};
pub use form::{Form, FormField, FormMsg};
pub use list::{ListController, ListState};

/// Why a form submission did not go through.
#[derive(Debug, Error)]
pub enum FormError {
    /// Rejected before any request was made.
    #[error(transparent)]
    Invalid(#[from] TaskdeckError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
