//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::Terminal;
use tracing::debug;

use fitline_core::{Coefficient, FitModel, PointId, COEFFICIENT_STEP};

use crate::chart::{cell_to_data, chart_bounds, render_chart};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::notification::{render_notice, Notice};
use crate::sparkline::{render_history, SparklineBuffer};
use crate::table::render_table;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// The fit model being edited.
    model: FitModel,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the user cancelled (Ctrl+C) rather than quitting normally.
    pub cancelled: bool,
    /// Grid cursor x coordinate.
    pub cursor_x: i32,
    /// Grid cursor y coordinate.
    pub cursor_y: i32,
    /// Table selection, keyed by point id.
    pub selected: Option<PointId>,
    /// Pending transient notice, if any.
    pub notice: Option<Notice>,
    /// SSE value after each mutation, for the history panel.
    pub sse_history: SparklineBuffer,
    /// Whether the history panel is shown.
    pub show_history: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Message receiver (fed by the model's observer bridge).
    rx: Receiver<TuiMessage>,
    /// Chart panel area from the last render, for mouse mapping.
    chart_area: Option<Rect>,
}

impl TuiApp {
    /// Create a new TUI app around a model.
    ///
    /// The receiver side of the observer bridge channel is drained on
    /// every loop iteration; register a `TuiEventBridge` on the model
    /// before handing it over.
    #[must_use]
    pub fn new(model: FitModel, rx: Receiver<TuiMessage>) -> Self {
        let cursor = 0i32.clamp(model.min_value(), model.max_value());
        Self {
            model,
            should_quit: false,
            cancelled: false,
            cursor_x: cursor,
            cursor_y: cursor,
            selected: None,
            notice: None,
            sse_history: SparklineBuffer::default(),
            show_history: true,
            terminal_width: 80,
            terminal_height: 24,
            rx,
            chart_area: None,
        }
    }

    /// The fit model being edited.
    #[must_use]
    pub fn model(&self) -> &FitModel {
        &self.model
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Refresh => {
                self.sse_history.push(self.model.total_squared_error());
            }
            TuiMessage::Notice(text) => {
                self.show_notice(text);
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Tick => {
                self.expire_notice_at(Instant::now());
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Cancel => {
                self.cancelled = true;
                self.should_quit = true;
            }
            KeyAction::CursorUp => {
                self.cursor_y = (self.cursor_y + 1).min(self.model.max_value());
            }
            KeyAction::CursorDown => {
                self.cursor_y = (self.cursor_y - 1).max(self.model.min_value());
            }
            KeyAction::CursorLeft => {
                self.cursor_x = (self.cursor_x - 1).max(self.model.min_value());
            }
            KeyAction::CursorRight => {
                self.cursor_x = (self.cursor_x + 1).min(self.model.max_value());
            }
            KeyAction::AddPoint => {
                self.add_point_at(self.cursor_x, self.cursor_y);
            }
            KeyAction::NextRow => {
                self.select_next();
            }
            KeyAction::PrevRow => {
                self.select_prev();
            }
            KeyAction::RemoveRow => {
                self.remove_selected();
            }
            KeyAction::InterceptUp => {
                self.model
                    .nudge_coefficient(Coefficient::Intercept, COEFFICIENT_STEP);
            }
            KeyAction::InterceptDown => {
                self.model
                    .nudge_coefficient(Coefficient::Intercept, -COEFFICIENT_STEP);
            }
            KeyAction::SlopeUp => {
                self.model
                    .nudge_coefficient(Coefficient::Slope, COEFFICIENT_STEP);
            }
            KeyAction::SlopeDown => {
                self.model
                    .nudge_coefficient(Coefficient::Slope, -COEFFICIENT_STEP);
            }
            KeyAction::ToggleHistory => {
                self.show_history = !self.show_history;
            }
            KeyAction::None => {}
        }
    }

    /// Handle a left mouse click at a terminal cell.
    ///
    /// Clicks inside the chart panel snap to the nearest lattice point and
    /// add a point there, mirroring the grid-cell click of the widget.
    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.chart_area else {
            return;
        };
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let (x_bounds, y_bounds) = chart_bounds(&self.model);
        let Some((x, y)) = cell_to_data(inner, column, row, x_bounds, y_bounds) else {
            return;
        };
        let gx = x.round() as i32;
        let gy = y.round() as i32;
        if gx < self.model.min_value()
            || gx > self.model.max_value()
            || gy < self.model.min_value()
            || gy > self.model.max_value()
        {
            return;
        }
        self.cursor_x = gx;
        self.cursor_y = gy;
        self.add_point_at(gx, gy);
    }

    fn add_point_at(&mut self, x: i32, y: i32) {
        match self.model.add_point(x, y) {
            Ok(id) => {
                self.selected = Some(id);
            }
            Err(err) => {
                // The observer bridge surfaces the notification.
                debug!(%err, "add rejected");
            }
        }
    }

    fn selected_pos(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.model.points().iter().position(|p| p.id == id))
    }

    fn select_next(&mut self) {
        let points = self.model.points();
        if points.is_empty() {
            self.selected = None;
            return;
        }
        let next = match self.selected_pos() {
            Some(i) if i + 1 < points.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(points[next].id);
    }

    fn select_prev(&mut self) {
        let points = self.model.points();
        if points.is_empty() {
            self.selected = None;
            return;
        }
        let prev = match self.selected_pos() {
            Some(i) => i.saturating_sub(1),
            None => points.len() - 1,
        };
        self.selected = Some(points[prev].id);
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        let pos = self.selected_pos();
        match self.model.remove_point(id) {
            Ok(_) => {
                // Keep the selection on the row that slid into place,
                // falling back to the new last row.
                let points = self.model.points();
                self.selected = pos
                    .and_then(|i| points.get(i).or_else(|| points.last()))
                    .map(|p| p.id);
            }
            Err(err) => {
                debug!(%err, "remove ignored");
                self.selected = None;
            }
        }
    }

    /// Show a transient notice, replacing and re-arming any pending one.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(message));
    }

    /// Drop the notice once it has outlived its window at `now`.
    pub fn expire_notice_at(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if notice.expired_at(now) {
                self.notice = None;
            }
        }
    }

    /// Compute the header / main / footer layout.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(10),   // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2])
    }

    /// Split the main area into chart and side column.
    #[must_use]
    pub fn compute_main_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // chart
                Constraint::Percentage(40), // table + history
            ])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Split the side column into table and history panel.
    #[must_use]
    pub fn compute_side_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // results table
                Constraint::Length(6), // SSE history
            ])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let (header_area, main_area, footer_area) = Self::compute_layout(frame.area());

        render_header(frame, header_area, &self.model);

        let (chart_area, side_area) = Self::compute_main_layout(main_area);
        self.chart_area = Some(chart_area);
        render_chart(
            frame,
            chart_area,
            &self.model,
            (self.cursor_x, self.cursor_y),
        );

        if self.show_history {
            let (table_area, history_area) = Self::compute_side_layout(side_area);
            render_table(frame, table_area, &self.model, self.selected);
            render_history(frame, history_area, self.sse_history.as_slice());
        } else {
            render_table(frame, side_area, &self.model, self.selected);
        }

        render_footer(frame, footer_area);

        if let Some(notice) = self.notice.clone() {
            render_notice(frame, frame.area(), &notice.message);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Mouse(mouse) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            self.handle_click(mouse.column, mouse.row);
                        }
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            // Process refreshes and notices from the model's observers.
            self.update();
            self.expire_notice_at(Instant::now());
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
