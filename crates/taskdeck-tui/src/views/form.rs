use serde::{Deserialize, Serialize};
use taskdeck_core::TaskDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Title,
    Description,
    DueDate,
    Completed,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title *",
            FormField::Description => "Description",
            FormField::DueDate => "Due date (YYYY-MM-DD)",
            FormField::Completed => "Completed",
        }
    }
}

/// Field edits shared by the create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    SetTitle(String),
    SetDescription(String),
    SetDueDate(String),
    SetCompleted(bool),
    /// Type a character into the focused field. On `Completed`, a space toggles.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
}

/// A draft plus which of `fields` has focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub draft: TaskDraft,
    pub focus: FormField,
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(fields: &[FormField]) -> Self {
        Self {
            draft: TaskDraft::default(),
            focus: fields.first().copied().unwrap_or(FormField::Title),
            fields: fields.to_vec(),
        }
    }

    pub fn update(&mut self, msg: FormMsg) {
        match msg {
            FormMsg::SetTitle(s) => self.draft.title = s,
            FormMsg::SetDescription(s) => self.draft.description = s,
            FormMsg::SetDueDate(s) => self.draft.due_date = s,
            FormMsg::SetCompleted(b) => self.draft.completed = b,
            FormMsg::Input(c) => match self.focus {
                FormField::Title => self.draft.title.push(c),
                FormField::Description => self.draft.description.push(c),
                FormField::DueDate => self.draft.due_date.push(c),
                FormField::Completed => {
                    if c == ' ' {
                        self.draft.completed = !self.draft.completed;
                    }
                }
            },
            FormMsg::Backspace => {
                match self.focus {
                    FormField::Title => self.draft.title.pop(),
                    FormField::Description => self.draft.description.pop(),
                    FormField::DueDate => self.draft.due_date.pop(),
                    FormField::Completed => None,
                };
            }
            FormMsg::FocusNext => self.move_focus(1),
            FormMsg::FocusPrev => self.move_focus(self.fields.len().saturating_sub(1)),
        }
    }

    fn move_focus(&mut self, step: usize) {
        if self.fields.is_empty() {
            return;
        }
        let current = self
            .fields
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = self.fields[(current + step) % self.fields.len()];
    }
}
