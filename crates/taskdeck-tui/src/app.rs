use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use taskdeck_service::TaskService;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::components::{TaskForm, TaskList};
use crate::route::Route;
use crate::views::{
    CreateController, CreateState, EditController, EditState, FormMsg, ListController, ListState,
};

/// Which view is on screen.
pub enum Screen {
    List,
    Create(CreateController),
    Edit(EditController),
}

/// Keyboard mode within the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Keys edit the search term.
    Search,
}

/// The terminal front end.
///
/// Owns a tokio runtime and blocks on each controller call, so key handling
/// stays synchronous.
pub struct App {
    rt: Runtime,
    service: Arc<dyn TaskService>,
    list: ListController,
    screen: Screen,
    mode: Mode,
    status_message: Option<String>,
}

impl App {
    pub fn new(service: Arc<dyn TaskService>) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self::with_runtime(rt, service))
    }

    pub fn with_runtime(rt: Runtime, service: Arc<dyn TaskService>) -> Self {
        let mut app = Self {
            rt,
            list: ListController::new(service.clone()),
            service,
            screen: Screen::List,
            mode: Mode::Normal,
            status_message: None,
        };
        app.navigate(Route::List);
        app
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::List => Route::List,
            Screen::Create(_) => Route::Create,
            Screen::Edit(ctl) => Route::Edit {
                id: ctl.state().id.clone(),
            },
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn list_state(&self) -> &ListState {
        self.list.state()
    }

    pub fn create_state(&self) -> Option<&CreateState> {
        match &self.screen {
            Screen::Create(ctl) => Some(ctl.state()),
            _ => None,
        }
    }

    pub fn edit_state(&self) -> Option<&EditState> {
        match &self.screen {
            Screen::Edit(ctl) => Some(ctl.state()),
            _ => None,
        }
    }

    /// True when plain characters are text input rather than commands.
    pub fn is_input_mode(&self) -> bool {
        match self.screen {
            Screen::List => self.mode == Mode::Search,
            Screen::Create(_) | Screen::Edit(_) => true,
        }
    }

    /// Switch views, running the target's activation.
    pub fn navigate(&mut self, route: Route) {
        info!("navigate to {route}");
        self.mode = Mode::Normal;
        match route {
            // Entering the list starts from a fresh view state.
            Route::List => {
                self.screen = Screen::List;
                self.list = ListController::new(self.service.clone());
                self.refresh_list();
            }
            Route::Create => {
                self.screen = Screen::Create(CreateController::new(self.service.clone()));
            }
            Route::Edit { id } => {
                let mut ctl = EditController::new(self.service.clone(), id);
                match self.rt.block_on(ctl.activate()) {
                    Ok(Some(redirect)) => self.navigate(redirect),
                    Ok(None) => self.screen = Screen::Edit(ctl),
                    Err(e) => {
                        self.screen = Screen::Edit(ctl);
                        self.report_error(e);
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        match self.screen {
            Screen::List => match self.mode {
                Mode::Normal => self.handle_list(key),
                Mode::Search => self.handle_search(key),
            },
            Screen::Create(_) | Screen::Edit(_) => self.handle_form(key),
        }
    }

    fn handle_list(&mut self, key: KeyEvent) {
        if let Some(id) = self.list.state().pending_delete_id.clone() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                let result = self.rt.block_on(self.list.confirm_delete(&id));
                match result {
                    Ok(()) => self.status_message = Some("Task deleted".into()),
                    Err(e) => self.report_error(e),
                }
            } else {
                self.list.cancel_delete();
            }
            return;
        }

        match key.code {
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('s') => self.list.cycle_sort(),
            KeyCode::Char('r') => self.refresh_list(),
            KeyCode::Char('n') => self.navigate(Route::Create),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.navigate(Route::Edit { id });
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.list.request_delete(&id);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.list.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.list.select_prev(),
            _ => {}
        }
    }

    fn handle_search(&mut self, key: KeyEvent) {
        let mut term = self.list.state().search_term.clone();
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                term.clear();
            }
            KeyCode::Backspace => {
                term.pop();
            }
            KeyCode::Char(c) => term.push(c),
            _ => return,
        }
        self.list.set_search(term);
    }

    fn handle_form(&mut self, key: KeyEvent) {
        let msg = match key.code {
            KeyCode::Tab | KeyCode::Down => FormMsg::FocusNext,
            KeyCode::BackTab | KeyCode::Up => FormMsg::FocusPrev,
            KeyCode::Backspace => FormMsg::Backspace,
            KeyCode::Char(c) => FormMsg::Input(c),
            KeyCode::Esc => {
                let back = match &self.screen {
                    Screen::Create(ctl) => ctl.cancel(),
                    Screen::Edit(ctl) => ctl.cancel(),
                    Screen::List => Route::List,
                };
                self.navigate(back);
                return;
            }
            KeyCode::Enter => {
                self.submit_form();
                return;
            }
            _ => return,
        };
        match &mut self.screen {
            Screen::Create(ctl) => ctl.edit(msg),
            Screen::Edit(ctl) => ctl.edit(msg),
            Screen::List => {}
        }
    }

    fn submit_form(&mut self) {
        let (result, done) = match &mut self.screen {
            Screen::Create(ctl) => (self.rt.block_on(ctl.submit()), "Task created"),
            Screen::Edit(ctl) => (self.rt.block_on(ctl.submit()), "Task saved"),
            Screen::List => return,
        };
        match result {
            Ok(next) => {
                self.navigate(next);
                if self.status_message.is_none() {
                    self.status_message = Some(done.into());
                }
            }
            Err(e) => self.report_error(e),
        }
    }

    fn refresh_list(&mut self) {
        let result = self.rt.block_on(self.list.refresh());
        if let Err(e) = result {
            self.report_error(e);
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.list
            .state()
            .selected_task()
            .and_then(|t| t.id_str())
            .map(str::to_string)
    }

    fn report_error(&mut self, e: impl std::fmt::Display) {
        warn!("{e}");
        self.status_message = Some(format!("Error: {e}"));
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        match &self.screen {
            Screen::List => {
                TaskList::new(self.list.state(), self.mode == Mode::Search)
                    .render(frame, layout[1]);
            }
            Screen::Create(ctl) => {
                let state = ctl.state();
                TaskForm::new("New Task", &state.form, state.submitting).render(frame, layout[1]);
            }
            Screen::Edit(ctl) => {
                let state = ctl.state();
                if state.loading {
                    frame.render_widget(Line::from(" Loading task..."), layout[1]);
                } else {
                    TaskForm::new("Edit Task", &state.form, state.submitting)
                        .render(frame, layout[1]);
                }
            }
        }
        self.render_status_bar(frame, layout[2]);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" taskdeck ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(self.route().path(), Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(title, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let color = if msg.starts_with("Error") {
                Color::Red
            } else {
                Color::Green
            };
            let line = Line::from(Span::styled(format!(" {msg}"), Style::default().fg(color)));
            frame.render_widget(line, area);
            return;
        }

        let hints = match (&self.screen, self.mode) {
            (Screen::List, _) if self.list.state().pending_delete_id.is_some() => {
                vec![("y", "confirm"), ("any", "cancel")]
            }
            (Screen::List, Mode::Normal) => vec![
                ("q", "quit"),
                ("j/k", "tasks"),
                ("/", "search"),
                ("s", "sort"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "del"),
                ("r", "refresh"),
            ],
            (Screen::List, Mode::Search) => vec![("Enter", "done"), ("Esc", "clear")],
            (Screen::Create(_) | Screen::Edit(_), _) => vec![
                ("Tab", "next field"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}
