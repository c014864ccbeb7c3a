//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_input(
        frame,
        chunks[0],
        " Title ",
        &app.session.draft_title,
        app.focus == Focus::Title,
    );
    draw_input(
        frame,
        chunks[1],
        " Description (optional) ",
        &app.session.draft_description,
        app.focus == Focus::Description,
    );
    draw_todo_list(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

/// Draw one single-line form input, with the cursor when focused
fn draw_input(frame: &mut Frame, area: Rect, title: &str, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(value).block(block), area);

    if is_active {
        let cursor_x = area.x + 1 + value.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Draw the todo list, or the empty-state message when there is nothing
fn draw_todo_list(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.focus == Focus::List;

    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let title = format!(" Todos ({}) ", app.session.todos().len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.session.todos().is_empty() {
        let empty = Paragraph::new("No todos yet. Add one above!")
            .block(block)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .session
        .todos()
        .iter()
        .map(|todo| {
            let marker = if todo.completed { "[x] " } else { "[ ] " };
            let title_style = if todo.completed {
                Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
            } else {
                Style::default()
            };

            let mut lines = vec![Line::from(vec![
                Span::raw(marker),
                Span::styled(todo.title.clone(), title_style),
            ])];
            if !todo.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", todo.description),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let highlight_style = if is_active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style);

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        match app.focus {
            Focus::Title | Focus::Description => {
                "Enter:add  Tab:next field  Ctrl-C:quit".to_string()
            }
            Focus::List => {
                "j/k:move  Enter/Space:toggle  d:delete  r:refresh  Tab:form  q:quit".to_string()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}
