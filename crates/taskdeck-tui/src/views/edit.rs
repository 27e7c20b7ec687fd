use std::sync::Arc;

use serde::{Deserialize, Serialize};
use taskdeck_core::{Task, TaskDraft};
use taskdeck_service::{ServiceError, TaskService};
use tracing::debug;

use super::form::{Form, FormField, FormMsg};
use super::FormError;
use crate::route::Route;

pub const EDIT_FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Description,
    FormField::DueDate,
    FormField::Completed,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    pub id: String,
    pub form: Form,
    pub loading: bool,
    pub submitting: bool,
}

impl EditState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: Form::new(EDIT_FIELDS),
            loading: true,
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// The collection was fetched; carries the matching record, if any.
    Loaded(Option<Task>),
    LoadFailed,
    Form(FormMsg),
    Submit,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCmd {
    Update { id: String, task: Task },
}

impl EditState {
    pub fn update(&mut self, msg: EditMsg) -> Option<EditCmd> {
        match msg {
            EditMsg::Loaded(found) => {
                if let Some(task) = found {
                    self.form.draft = TaskDraft::from_task(&task);
                }
                self.loading = false;
            }
            EditMsg::LoadFailed => self.loading = false,
            EditMsg::Form(m) => self.form.update(m),
            EditMsg::Submit => {
                if self.form.draft.validate().is_err() {
                    return None;
                }
                self.submitting = true;
                return Some(EditCmd::Update {
                    id: self.id.clone(),
                    task: self.form.draft.to_task(Some(self.id.clone())),
                });
            }
            EditMsg::Settled => self.submitting = false,
        }
        None
    }
}

pub struct EditController {
    service: Arc<dyn TaskService>,
    state: EditState,
}

impl EditController {
    pub fn new(service: Arc<dyn TaskService>, id: impl Into<String>) -> Self {
        Self {
            service,
            state: EditState::new(id),
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Load the record being edited.
    ///
    /// There is no single-record endpoint, so this fetches the whole
    /// collection. Returns `Some(Route::List)` when the record is gone.
    pub async fn activate(&mut self) -> Result<Option<Route>, ServiceError> {
        let tasks = match self.service.list_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                self.state.update(EditMsg::LoadFailed);
                return Err(e);
            }
        };
        let found = tasks
            .into_iter()
            .find(|t| t.id_str() == Some(self.state.id.as_str()));
        let redirect = found.is_none().then_some(Route::List);
        if redirect.is_some() {
            debug!("task {} not found, back to list", self.state.id);
        }
        self.state.update(EditMsg::Loaded(found));
        Ok(redirect)
    }

    pub fn edit(&mut self, msg: FormMsg) {
        self.state.update(EditMsg::Form(msg));
    }

    /// Send the full draft as a replacement for the record.
    pub async fn submit(&mut self) -> Result<Route, FormError> {
        self.state.form.draft.validate()?;
        let Some(EditCmd::Update { id, task }) = self.state.update(EditMsg::Submit) else {
            return Ok(Route::Edit {
                id: self.state.id.clone(),
            });
        };
        debug!("updating task {id}");
        let result = self.service.update_task(&id, &task).await;
        self.state.update(EditMsg::Settled);
        result?;
        Ok(Route::List)
    }

    pub fn cancel(&self) -> Route {
        Route::List
    }
}
