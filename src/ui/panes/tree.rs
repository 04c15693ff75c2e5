//! AST outline pane rendering
//!
//! Shows the visible outline rows indented by depth, a fold marker on rows
//! that have children, and the selected row highlighted. The pane scrolls
//! just enough to keep the selection on screen.

use crate::outline::Row;
use crate::ui::theme::DEFAULT_THEME;
use rustc_hash::FxHashSet;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to draw the outline pane
pub struct TreeRenderData<'a> {
    pub rows: &'a [Row],
    /// Indices into `rows`, in display order
    pub visible: &'a [usize],
    /// Position of the selection within `visible`
    pub selected: usize,
    pub collapsed: &'a FxHashSet<usize>,
}

fn row_line<'a>(row: &'a Row, collapsed: bool, selected: bool) -> Line<'a> {
    let marker = match (row.has_children, collapsed) {
        (false, _) => "  ",
        (true, false) => "▾ ",
        (true, true) => "▸ ",
    };

    let mut spans = vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.comment)),
    ];

    if let Some(field) = row.field {
        spans.push(Span::styled(
            format!("{field}: "),
            Style::default().fg(DEFAULT_THEME.field_name),
        ));
    }

    spans.push(Span::styled(
        row.kind,
        Style::default()
            .fg(DEFAULT_THEME.node_kind)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(detail) = &row.detail {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            detail.as_str(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    if selected {
        for span in &mut spans {
            span.style = span.style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
        }
    }

    Line::from(spans)
}

/// Render the outline pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    data: &TreeRenderData,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Keep the selection inside the window
    if data.selected < *scroll {
        *scroll = data.selected;
    } else if data.selected >= *scroll + visible_height {
        *scroll = data.selected + 1 - visible_height;
    }

    let lines: Vec<Line> = data
        .visible
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(position, &index)| {
            row_line(
                &data.rows[index],
                data.collapsed.contains(&index),
                position == data.selected,
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
