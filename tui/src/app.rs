//! Application state and logic

use todo_core::{TodoSession, Transport};

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Description,
    List,
}

impl Focus {
    /// Move to the next area (wrapping)
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    /// Move to the previous area (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Description => Focus::Title,
            Focus::List => Focus::Description,
        }
    }
}

/// Application state
pub struct App {
    /// The mirrored server list plus the draft form fields
    pub session: TodoSession,
    /// Which area has focus
    pub focus: Focus,
    /// Currently selected row in the list
    pub selected: usize,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// Whether the app should exit
    pub should_quit: bool,
}

impl App {
    pub fn new(session: TodoSession) -> Self {
        Self {
            session,
            focus: Focus::Title,
            selected: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Id of the currently selected row, if the list is non-empty.
    pub fn selected_id(&self) -> Option<i64> {
        self.session.todos().get(self.selected).map(|t| t.id)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_draft(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Title => Some(&mut self.session.draft_title),
            Focus::Description => Some(&mut self.session.draft_description),
            Focus::List => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_draft() {
            field.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.focused_draft() {
            field.pop();
        }
    }

    /// Move selection up in the list
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down in the list
    pub fn move_down(&mut self) {
        if self.selected < self.session.todos().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn refresh(&mut self, transport: &impl Transport) {
        self.session.refresh(transport);
        self.clamp_selection();
    }

    /// Submit the draft form. Title is the required input; with it empty
    /// nothing is sent and the user is prompted instead.
    pub fn submit(&mut self, transport: &impl Transport) {
        if self.session.draft_title.is_empty() {
            self.status_message = Some("Title is required".to_string());
            return;
        }
        self.session.submit_draft(transport);
        self.clamp_selection();
    }

    pub fn toggle_selected(&mut self, transport: &impl Transport) {
        if let Some(id) = self.selected_id() {
            self.session.toggle(transport, id);
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self, transport: &impl Transport) {
        if let Some(id) = self.selected_id() {
            self.session.remove(transport, id);
            self.clamp_selection();
        }
    }

    /// Keep the selection on a real row after the list changed size.
    fn clamp_selection(&mut self) {
        let len = self.session.todos().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
