//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fitline_core::FitModel;

/// Render the header panel with the current equation and SSE.
pub fn render_header(frame: &mut Frame, area: Rect, model: &FitModel) {
    let sign = if model.slope() < 0.0 { '-' } else { '+' };
    let text = vec![Line::from(vec![
        Span::styled("FitLine-rs", Style::default().fg(Color::Cyan)),
        Span::raw(format!(
            " | ŷ = {:.2} {sign} {:.2}·x | points {}/{} | SSE {:.2}",
            model.intercept(),
            model.slope().abs(),
            model.len(),
            model.capacity(),
            model.total_squared_error()
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" FitLine-rs ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
