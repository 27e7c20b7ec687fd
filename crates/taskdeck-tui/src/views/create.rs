use std::sync::Arc;

use serde::{Deserialize, Serialize};
use taskdeck_core::Task;
use taskdeck_service::TaskService;
use tracing::debug;

use super::form::{Form, FormField, FormMsg};
use super::FormError;
use crate::route::Route;

pub const CREATE_FIELDS: &[FormField] = &[FormField::Title, FormField::Description, FormField::DueDate];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateState {
    pub form: Form,
    pub submitting: bool,
}

impl Default for CreateState {
    fn default() -> Self {
        Self {
            form: Form::new(CREATE_FIELDS),
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateMsg {
    Form(FormMsg),
    Submit,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateCmd {
    Create(Task),
}

impl CreateState {
    pub fn update(&mut self, msg: CreateMsg) -> Option<CreateCmd> {
        match msg {
            CreateMsg::Form(m) => self.form.update(m),
            CreateMsg::Submit => {
                if self.form.draft.validate().is_err() {
                    return None;
                }
                self.submitting = true;
                return Some(CreateCmd::Create(self.form.draft.to_task(None)));
            }
            CreateMsg::Settled => self.submitting = false,
        }
        None
    }
}

pub struct CreateController {
    service: Arc<dyn TaskService>,
    state: CreateState,
}

impl CreateController {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            state: CreateState::default(),
        }
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    pub fn edit(&mut self, msg: FormMsg) {
        self.state.update(CreateMsg::Form(msg));
    }

    /// Create the drafted task and return where to go next.
    ///
    /// An empty title fails before any request is sent. `submitting` is
    /// released whether or not the request succeeds.
    pub async fn submit(&mut self) -> Result<Route, FormError> {
        self.state.form.draft.validate()?;
        let Some(CreateCmd::Create(task)) = self.state.update(CreateMsg::Submit) else {
            return Ok(Route::Create);
        };
        debug!("creating task {:?}", task.title);
        let result = self.service.create_task(&task).await;
        self.state.update(CreateMsg::Settled);
        result?;
        Ok(Route::List)
    }

    pub fn cancel(&self) -> Route {
        Route::List
    }
}
