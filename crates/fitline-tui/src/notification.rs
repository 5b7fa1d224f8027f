//! Transient notification overlay.

use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(1);

/// A transient notice and the instant it was (re-)armed.
///
/// Showing a new notice while one is pending replaces it outright,
/// restarting the visibility window.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Message text.
    pub message: String,
    /// When the notice was armed.
    pub since: Instant,
}

impl Notice {
    /// Create a notice armed now.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            since: Instant::now(),
        }
    }

    /// Whether the notice has outlived its window at the given instant.
    #[must_use]
    pub fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.since) >= NOTICE_TTL
    }
}

/// Render the notice as a centered overlay.
#[allow(clippy::cast_possible_truncation)]
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(4);
    let overlay = centered_rect(area, width, 3);
    frame.render_widget(Clear, overlay);
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(paragraph, overlay);
}

/// Center a `width` x `height` rect inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
