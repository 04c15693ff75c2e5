//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the program
//! being browsed with basic syntax highlighting and line numbers.
//!
//! # Rendering
//!
//! The pane uses a simple per-line word scanner to apply highlighting styles.
//! It does not run the real tokenizer, so a string spanning lines is only
//! coloured on its first line.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for one line of source
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word {
            word_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = word_start.take() {
            let word = &line[start..i];
            spans.push(Span::styled(word, get_word_style(word)));
        }

        // Comments run to end of line
        if c == '/' && matches!(chars.peek(), Some((_, '/'))) {
            spans.push(Span::styled(
                &line[i..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // Strings, either quote style, no escapes
        if c == '"' || c == '\'' {
            let end = line[i + 1..]
                .find(c)
                .map(|offset| i + 1 + offset + 1)
                .unwrap_or(line.len());
            spans.push(Span::styled(
                &line[i..end],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            while chars.peek().is_some_and(|(next, _)| *next < end) {
                chars.next();
            }
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }

    if let Some(start) = word_start {
        let word = &line[start..];
        spans.push(Span::styled(word, get_word_style(word)));
    }

    Line::from(spans)
}

fn get_word_style(word: &str) -> Style {
    match word {
        "int" | "if" | "else" | "while" | "do" | "for" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD), // Keywords
        "true" | "false" | "null" => Style::default().fg(DEFAULT_THEME.number), // Constants
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg), // Identifiers
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
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
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Clamp scroll offset to valid range
    *scroll = (*scroll).min(total_lines.saturating_sub(visible_height));

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num_str = format!("{:4} ", idx + 1);
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default().fg(DEFAULT_THEME.comment), // Line numbers
            )];
            spans.extend(highlight_source_code(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        highlight_source_code(line)
            .spans
            .iter()
            .map(|span| span.content.to_string())
            .collect()
    }

    #[test]
    fn test_highlight_splits_words_and_symbols() {
        assert_eq!(texts("int x=42;"), vec!["int", " ", "x", "=", "42", ";"]);
    }

    #[test]
    fn test_highlight_strings_and_comments() {
        assert_eq!(
            texts("s = 'a b'; // done"),
            vec!["s", " ", "=", " ", "'a b'", ";", " ", "// done"]
        );
        // Unterminated string runs to end of line
        assert_eq!(texts("\"abc"), vec!["\"abc"]);
    }
}
