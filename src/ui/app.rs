//! Main TUI application state and logic

use crate::outline::{self, Row};
use crate::parser::ast::Program;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tree,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code that was parsed
    pub source_code: String,

    /// Every outline row of the tree, folded or not
    pub rows: Vec<Row>,

    /// Rows whose descendants are hidden
    pub collapsed: FxHashSet<usize>,

    /// Indices into `rows` currently on display
    pub visible: Vec<usize>,

    /// Selected position within `visible`
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app browsing `program`, parsed from `source_code`
    pub fn new(program: &Program, source_code: String) -> Self {
        let rows = outline::rows(program);
        let collapsed = FxHashSet::default();
        let visible = outline::visible(&rows, &collapsed);

        App {
            source_code,
            rows,
            collapsed,
            visible,
            selected: 0,
            focused_pane: FocusedPane::Tree,
            source_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Index into `rows` of the selected row
    pub fn selected_row(&self) -> usize {
        self.visible.get(self.selected).copied().unwrap_or(0)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let data = super::panes::TreeRenderData {
            rows: &self.rows,
            visible: &self.visible,
            selected: self.selected,
            collapsed: &self.collapsed,
        };
        super::panes::render_tree_pane(
            frame,
            columns[1],
            &data,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.visible.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Tree => {
                    self.selected = self.selected.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Clamped against the line count when rendered
                    self.source_scroll = self.source_scroll.saturating_add(1);
                }
                FocusedPane::Tree => {
                    if self.selected + 1 < self.visible.len() {
                        self.selected += 1;
                    }
                }
            },
            KeyCode::Home => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = 0,
                FocusedPane::Tree => self.selected = 0,
            },
            KeyCode::End => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = usize::MAX,
                FocusedPane::Tree => self.selected = self.visible.len().saturating_sub(1),
            },
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Left => self.collapse_selected(),
            KeyCode::Right => self.expand_selected(),
            _ => {}
        }
    }

    /// Fold or unfold the selected row
    fn toggle_selected(&mut self) {
        let row = self.selected_row();
        if self.collapsed.contains(&row) {
            self.expand_selected();
        } else {
            self.collapse_selected();
        }
    }

    /// Fold the selected row, or jump to its parent if it is already folded
    /// or has nothing to fold
    fn collapse_selected(&mut self) {
        let row = self.selected_row();

        if self.rows[row].has_children && self.collapsed.insert(row) {
            self.status_message = format!("Folded {}", self.rows[row].kind);
            self.refresh_visible();
            return;
        }

        let depth = self.rows[row].depth;
        if let Some(parent) = (0..row).rev().find(|&i| self.rows[i].depth < depth) {
            if let Some(position) = self.visible.iter().position(|&i| i == parent) {
                self.selected = position;
            }
        }
    }

    fn expand_selected(&mut self) {
        let row = self.selected_row();
        if self.collapsed.remove(&row) {
            self.status_message = format!("Unfolded {}", self.rows[row].kind);
            self.refresh_visible();
        }
    }

    /// Recompute visible rows, keeping the same row selected
    fn refresh_visible(&mut self) {
        let current = self.selected_row();
        self.visible = outline::visible(&self.rows, &self.collapsed);
        self.selected = self
            .visible
            .iter()
            .position(|&i| i == current)
            .unwrap_or(0);
    }
}
