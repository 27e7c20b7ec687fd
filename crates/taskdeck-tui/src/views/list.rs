use std::sync::Arc;

use serde::{Deserialize, Serialize};
use taskdeck_core::{view, SortKey, Task};
use taskdeck_service::{ServiceError, TaskService};
use tracing::debug;

/// State of the task list view.
///
/// `tasks` is the last fetched collection and is only ever replaced whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub tasks: Vec<Task>,
    pub search_term: String,
    pub sort_key: SortKey,
    /// At most one task awaits delete confirmation.
    pub pending_delete_id: Option<String>,
    pub loading: bool,
    /// Cursor into the derived list.
    pub selected: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            search_term: String::new(),
            sort_key: SortKey::default(),
            pending_delete_id: None,
            loading: true,
            selected: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    Refresh,
    Fetched(Vec<Task>),
    FetchFailed,
    SearchChanged(String),
    SortChanged(SortKey),
    CycleSort,
    SelectNext,
    SelectPrev,
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete(String),
    Deleted,
}

/// I/O requested by `ListState::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCmd {
    Fetch,
    Delete(String),
}

impl ListState {
    pub fn update(&mut self, msg: ListMsg) -> Option<ListCmd> {
        match msg {
            ListMsg::Refresh | ListMsg::Deleted => return Some(ListCmd::Fetch),
            ListMsg::Fetched(tasks) => {
                self.tasks = tasks;
                self.loading = false;
                self.clamp_selection();
            }
            ListMsg::FetchFailed => self.loading = false,
            ListMsg::SearchChanged(term) => {
                self.search_term = term;
                self.selected = 0;
            }
            ListMsg::SortChanged(key) => {
                self.sort_key = key;
                self.clamp_selection();
            }
            ListMsg::CycleSort => {
                self.sort_key = self.sort_key.next();
                self.clamp_selection();
            }
            ListMsg::SelectNext => {
                if self.selected + 1 < self.visible().len() {
                    self.selected += 1;
                }
            }
            ListMsg::SelectPrev => self.selected = self.selected.saturating_sub(1),
            ListMsg::RequestDelete(id) => self.pending_delete_id = Some(id),
            ListMsg::CancelDelete => self.pending_delete_id = None,
            // Cleared before the delete settles, whatever its outcome.
            ListMsg::ConfirmDelete(id) => {
                self.pending_delete_id = None;
                return Some(ListCmd::Delete(id));
            }
        }
        None
    }

    /// The filtered, sorted tasks to display.
    pub fn visible(&self) -> Vec<&Task> {
        view::derive(&self.tasks, &self.search_term, self.sort_key)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.selected).copied()
    }

    pub fn pending_delete(&self) -> Option<&Task> {
        let id = self.pending_delete_id.as_deref()?;
        self.tasks.iter().find(|t| t.id_str() == Some(id))
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Drives a `ListState` against a `TaskService`.
pub struct ListController {
    service: Arc<dyn TaskService>,
    state: ListState,
}

impl ListController {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Apply `msg` and run whatever I/O it leads to.
    ///
    /// A failed fetch still clears `loading`. A failed delete stops the
    /// chain, so no refresh follows it.
    pub async fn dispatch(&mut self, msg: ListMsg) -> Result<(), ServiceError> {
        let mut next = self.state.update(msg);
        while let Some(cmd) = next.take() {
            next = match cmd {
                ListCmd::Fetch => match self.service.list_tasks().await {
                    Ok(tasks) => {
                        debug!("fetched {} tasks", tasks.len());
                        self.state.update(ListMsg::Fetched(tasks))
                    }
                    Err(e) => {
                        self.state.update(ListMsg::FetchFailed);
                        return Err(e);
                    }
                },
                ListCmd::Delete(id) => {
                    debug!("deleting task {id}");
                    self.service.delete_task(&id).await?;
                    self.state.update(ListMsg::Deleted)
                }
            };
        }
        Ok(())
    }

    pub async fn refresh(&mut self) -> Result<(), ServiceError> {
        self.dispatch(ListMsg::Refresh).await
    }

    pub async fn confirm_delete(&mut self, id: &str) -> Result<(), ServiceError> {
        self.dispatch(ListMsg::ConfirmDelete(id.to_string())).await
    }

    pub fn request_delete(&mut self, id: &str) {
        self.state.update(ListMsg::RequestDelete(id.to_string()));
    }

    pub fn cancel_delete(&mut self) {
        self.state.update(ListMsg::CancelDelete);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.update(ListMsg::SearchChanged(term.into()));
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.update(ListMsg::SortChanged(key));
    }

    pub fn cycle_sort(&mut self) {
        self.state.update(ListMsg::CycleSort);
    }

    pub fn select_next(&mut self) {
        self.state.update(ListMsg::SelectNext);
    }

    pub fn select_prev(&mut self) {
        self.state.update(ListMsg::SelectPrev);
    }
}
