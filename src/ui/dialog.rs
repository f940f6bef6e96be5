//! Dialog rendering module
//!
//! Renders the modal batch-rename dialog: the visible field rows with
//! `< value >` cycling indicators, the forced-constraints info label for
//! bones, and the active-armature warning for all-bones scope.

use crate::app::{AppState, DialogField, DialogState};
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the batch-rename dialog over the current frame
pub fn render_rename_dialog(f: &mut Frame, state: &AppState) {
    let Some(ref dialog) = state.dialog else {
        return;
    };

    let fields = dialog.visible_fields();
    // Field rows + info/warning labels + borders + hint row
    let label_rows = dialog.bones_info().is_some() as u16
        + dialog.bones_scope_warning().is_some() as u16;
    let height = fields.len() as u16 + label_rows + 4;
    let area = super::centered_rect(f.area(), 56, height);

    f.render_widget(Clear, area);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Batch Rename ")
            .border_style(Styles::border_active()),
        area,
    );

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let mut rows: Vec<ListItem> = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        rows.push(field_row(dialog, *field, i == dialog.focus));

        // Context labels appear right below the field they explain
        if *field == DialogField::Target {
            if let Some(info) = dialog.bones_info() {
                rows.push(label_row(info, Styles::info()));
            }
        }
        if *field == DialogField::Scope {
            if let Some(warning) = dialog.bones_scope_warning() {
                rows.push(label_row(warning, Styles::warning()));
            }
        }
    }

    let list = List::new(rows);
    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    f.render_widget(list, list_area);

    let hint = Paragraph::new(Span::styled(
        "Enter apply | Esc cancel | \u{2190}\u{2192} cycle",
        Styles::nav_hint(),
    ));
    let hint_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    f.render_widget(hint, hint_area);
}

fn field_row(dialog: &DialogState, field: DialogField, focused: bool) -> ListItem<'static> {
    let value = field_value(dialog, field);
    let display_value = if field.is_text() {
        if focused {
            format!("{}_", value)
        } else {
            value
        }
    } else if focused {
        format!("< {} >", value)
    } else {
        value
    };

    let value_style = if focused {
        Styles::focused()
    } else {
        Styles::text()
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<12}", field.label()),
            Style::default().fg(Colors::PRIMARY),
        ),
        Span::styled(display_value, value_style),
    ]))
}

fn label_row(text: &'static str, style: Style) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(text, style),
    ]))
}

fn field_value(dialog: &DialogState, field: DialogField) -> String {
    match field {
        DialogField::Operator => dialog.operator.to_string(),
        DialogField::Target => dialog.target.to_string(),
        DialogField::Data => dialog.data.to_string(),
        DialogField::Scope => dialog.scope.to_string(),
        DialogField::Operation => dialog.operation.to_string(),
        DialogField::Find => dialog.find.clone(),
        DialogField::Replace => dialog.replace.clone(),
        DialogField::ExactMatch => {
            if dialog.exact_match {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        }
        DialogField::Prefix => dialog.prefix.clone(),
        DialogField::Suffix => dialog.suffix.clone(),
    }
}
