use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState as WidgetListState, Paragraph, Wrap,
};
use taskdeck_core::{due_date, Task};

use super::centered_rect;
use crate::views::ListState;

/// Renders the derived task list plus the delete confirmation popup.
pub struct TaskList<'a> {
    state: &'a ListState,
    searching: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(state: &'a ListState, searching: bool) -> Self {
        Self { state, searching }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_search(frame, layout[0]);
        self.render_tasks(frame, layout[1]);

        if let Some(task) = self.state.pending_delete() {
            render_confirm_delete(frame, task, area);
        }
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Search | Sort: {} ", self.state.sort_key));
        let paragraph = Paragraph::new(self.state.search_term.as_str()).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_tasks(&self, frame: &mut Frame, area: Rect) {
        let visible = self.state.visible();
        let block = Block::default()
            .title(format!(" Tasks ({}) ", visible.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if self.state.loading {
            let paragraph = Paragraph::new("Loading tasks...")
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        }

        if visible.is_empty() {
            let paragraph = Paragraph::new("No tasks found")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = visible.iter().map(|t| task_item(t)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
            .highlight_symbol("> ");

        let mut widget_state = WidgetListState::default();
        widget_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, area, &mut widget_state);
    }
}

fn task_item(task: &Task) -> ListItem<'_> {
    let (mark, mark_style) = if task.completed {
        ("[x] ", Style::default().fg(Color::Green))
    } else {
        ("[ ] ", Style::default().fg(Color::Yellow))
    };
    let title_style = if task.completed {
        Style::default().fg(Color::DarkGray).crossed_out()
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(mark, mark_style),
        Span::styled(task.title.as_str(), title_style),
    ];
    if let Some(due) = format_due(task) {
        spans.push(Span::styled(
            format!("  due {due}"),
            Style::default().fg(Color::Magenta),
        ));
    }
    if !task.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", task.description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// Due date as shown in the list, e.g. `01 Jan 2024`. Falls back to the raw
/// text when it does not parse.
pub fn format_due(task: &Task) -> Option<String> {
    let raw = task.due_date.as_deref().filter(|d| !d.trim().is_empty())?;
    Some(match due_date::parse(raw) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    })
}

fn render_confirm_delete(frame: &mut Frame, task: &Task, area: Rect) {
    let popup = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm Delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = format!("Delete \"{}\"?\n\n(y)es / (any key) cancel", task.title);
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup);
}
