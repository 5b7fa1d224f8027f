//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = vec![Line::from(vec![
        Span::styled("arrows", key),
        Span::raw(": cursor | "),
        Span::styled("enter", key),
        Span::raw(": add | "),
        Span::styled("a/A b/B", key),
        Span::raw(": coefficients | "),
        Span::styled("j/k", key),
        Span::raw(": row | "),
        Span::styled("x", key),
        Span::raw(": remove | "),
        Span::styled("h", key),
        Span::raw(": history | "),
        Span::styled("q", key),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
