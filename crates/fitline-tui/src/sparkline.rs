//! SSE history sparkline.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Sparkline};
use ratatui::Frame;

/// How many SSE samples the history panel keeps.
pub const HISTORY_LEN: usize = 60;

/// Ring buffer of recent SSE values.
#[derive(Debug, Clone)]
pub struct SparklineBuffer {
    data: Vec<f64>,
    capacity: usize,
}

impl SparklineBuffer {
    /// Create a buffer keeping the last `capacity` values.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Push a value, evicting the oldest past capacity.
    pub fn push(&mut self, value: f64) {
        self.data.push(value);
        if self.data.len() > self.capacity {
            self.data.remove(0);
        }
    }

    /// The buffered values, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Number of buffered values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for SparklineBuffer {
    fn default() -> Self {
        Self::new(HISTORY_LEN)
    }
}

/// Render the SSE history panel.
///
/// Values are scaled relative to the window maximum; the sparkline only
/// conveys shape, the exact SSE lives in the table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_history(frame: &mut Frame, area: Rect, data: &[f64]) {
    let max = data.iter().copied().fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { 100.0 / max } else { 1.0 };
    let scaled: Vec<u64> = data.iter().map(|&v| (v * scale) as u64).collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SSE history "),
        )
        .data(&scaled)
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(sparkline, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    #[test]
    fn buffer_evicts_past_capacity() {
        let mut buffer = SparklineBuffer::new(3);
        for i in 0..5 {
            buffer.push(f64::from(i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn default_capacity() {
        let mut buffer = SparklineBuffer::default();
        for i in 0..(HISTORY_LEN + 10) {
            #[allow(clippy::cast_precision_loss)]
            buffer.push(i as f64);
        }
        assert_eq!(buffer.len(), HISTORY_LEN);
    }

    #[test]
    fn render_empty_history() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_history(frame, area, &[]);
            })
            .unwrap();
    }

    #[test]
    fn render_all_zero_history() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_history(frame, area, &[0.0, 0.0, 0.0]);
            })
            .unwrap();
    }

    #[test]
    fn render_varied_history() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_history(frame, area, &[12.5, 3.0, 0.25, 40.0]);
            })
            .unwrap();
    }
}
