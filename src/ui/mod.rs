//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - Main module - screen layout, object list, status bar, help overlay
//! - `dialog` - modal batch-rename dialog rendering

mod dialog;

use crate::app::{AppMode, AppState};
use crate::scene::{ObjectKind, SceneObject};
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the whole application frame
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, state, chunks[0]);
    render_object_list(f, state, chunks[1]);
    render_status_bar(f, state, chunks[2]);

    if state.mode == AppMode::RenameDialog {
        dialog::render_rename_dialog(f, state);
    }
    if state.help_visible {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    let title = match &state.scene_path {
        Some(path) => format!(" rigrename - {} ", path.display()),
        None => " rigrename - demo scene ".to_string(),
    };
    let dirty_marker = if state.dirty { " [modified]" } else { "" };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, Styles::title()),
        Span::styled(dirty_marker, Styles::warning()),
    ]))
    .alignment(Alignment::Left)
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(header, area);
}

fn render_object_list(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = state
        .scene
        .objects
        .iter()
        .enumerate()
        .map(|(i, obj)| object_row(state, i, obj))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Objects ")
            .border_style(if state.mode == AppMode::ObjectList {
                Styles::border_active()
            } else {
                Styles::border_inactive()
            }),
    );
    f.render_widget(list, area);
}

fn object_row<'a>(state: &AppState, index: usize, obj: &'a SceneObject) -> ListItem<'a> {
    let cursor = if index == state.list_selection && state.mode == AppMode::ObjectList {
        "> "
    } else {
        "  "
    };
    let select_marker = if obj.selected { "[x] " } else { "[ ] " };
    let active_marker = if state.scene.active == Some(index) {
        "* "
    } else {
        "  "
    };

    let counts = if obj.kind == ObjectKind::Armature {
        format!(
            "constraints:{} bones:{}",
            obj.constraints.len(),
            obj.pose_bones.len()
        )
    } else {
        format!(
            "modifiers:{} constraints:{} vgroups:{}",
            obj.modifiers.len(),
            obj.constraints.len(),
            obj.vertex_groups.len()
        )
    };

    let name_style = if index == state.list_selection && state.mode == AppMode::ObjectList {
        Styles::selected()
    } else if obj.selected {
        Styles::text()
    } else {
        Styles::text_muted()
    };

    ListItem::new(Line::from(vec![
        Span::styled(cursor, Styles::focused()),
        Span::styled(select_marker, Styles::text()),
        Span::styled(active_marker, Styles::success()),
        Span::styled(format!("{:<20}", obj.name), name_style),
        Span::styled(format!("{:<10}", obj.kind.to_string()), Styles::text_muted()),
        Span::styled(counts, Styles::text_muted()),
    ]))
}

fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(52)])
        .split(area);

    let message_style = if state.status_message.starts_with("Warning:") {
        Styles::warning()
    } else {
        Styles::text()
    };
    let status = Paragraph::new(Span::styled(state.status_message.clone(), message_style))
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(status, chunks[0]);

    let hints = Paragraph::new(Span::styled(
        "space select | a active | r rename | s save | q quit",
        Styles::nav_hint(),
    ))
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(hints, chunks[1]);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(f.area(), 50, 14);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("Keys", Styles::title())),
        Line::from(""),
        Line::from("  Up/Down, j/k   move cursor"),
        Line::from("  Space          toggle object selection"),
        Line::from("  a              set active object"),
        Line::from("  r              open batch rename dialog"),
        Line::from("  s              save scene document"),
        Line::from("  ?              toggle this help"),
        Line::from("  q, Esc         quit"),
        Line::from(""),
        Line::from(Span::styled(
            "In the dialog: Up/Down move, Left/Right cycle,",
            Styles::text_muted(),
        )),
        Line::from(Span::styled(
            "type to edit, Enter applies, Esc cancels.",
            Styles::text_muted(),
        )),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Styles::border_active()),
    );
    f.render_widget(help, area);
}

/// Center a fixed-size rect inside the given area, clamped to fit
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
