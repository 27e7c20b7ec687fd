use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::views::{Form, FormField};

/// Renders a create or edit form, one bordered box per field.
pub struct TaskForm<'a> {
    title: &'a str,
    form: &'a Form,
    busy: bool,
}

impl<'a> TaskForm<'a> {
    pub fn new(title: &'a str, form: &'a Form, busy: bool) -> Self {
        Self { title, form, busy }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut constraints: Vec<Constraint> =
            self.form.fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, row) in self.form.fields.iter().zip(rows.iter()) {
            self.render_field(frame, *field, *row);
        }

        if self.busy {
            let saving = Line::from(Span::styled(
                " Saving...",
                Style::default().fg(Color::Yellow),
            ));
            frame.render_widget(saving, rows[self.form.fields.len()]);
        }
    }

    fn render_field(&self, frame: &mut Frame, field: FormField, area: Rect) {
        let focused = self.form.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border_style);

        let draft = &self.form.draft;
        let value = match field {
            FormField::Title => draft.title.clone(),
            FormField::Description => draft.description.clone(),
            FormField::DueDate => draft.due_date.clone(),
            FormField::Completed => {
                let mark = if draft.completed { "[x]" } else { "[ ]" };
                format!("{mark} (space to toggle)")
            }
        };
        frame.render_widget(Paragraph::new(value).block(block), area);
    }
}
