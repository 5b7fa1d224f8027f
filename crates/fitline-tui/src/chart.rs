//! Scatter chart canvas: grid lattice, axes, fitted line, and per-point
//! offset indicators.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use fitline_core::FitModel;

/// Canvas bounds: the grid range with half a cell of padding on each side.
#[must_use]
pub fn chart_bounds(model: &FitModel) -> ([f64; 2], [f64; 2]) {
    let lo = f64::from(model.min_value()) - 0.5;
    let hi = f64::from(model.max_value()) + 0.5;
    ([lo, hi], [lo, hi])
}

/// Map a terminal cell inside `inner` back to data coordinates.
///
/// Inverse of the canvas cell mapping (cell centers); used to turn mouse
/// clicks into grid selections. Returns `None` for cells outside `inner`.
#[must_use]
pub fn cell_to_data(
    inner: Rect,
    column: u16,
    row: u16,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) -> Option<(f64, f64)> {
    if inner.width == 0 || inner.height == 0 || !inner.contains(Position::new(column, row)) {
        return None;
    }
    let dx = f64::from(column - inner.x) + 0.5;
    // Terminal rows grow downward, data y grows upward.
    let dy = f64::from(inner.height - 1 - (row - inner.y)) + 0.5;
    let x = x_bounds[0] + dx * (x_bounds[1] - x_bounds[0]) / f64::from(inner.width);
    let y = y_bounds[0] + dy * (y_bounds[1] - y_bounds[0]) / f64::from(inner.height);
    Some((x, y))
}

/// Render the chart panel.
pub fn render_chart(frame: &mut Frame, area: Rect, model: &FitModel, cursor: (i32, i32)) {
    let (x_bounds, y_bounds) = chart_bounds(model);
    let min = f64::from(model.min_value());
    let max = f64::from(model.max_value());

    let lattice: Vec<(f64, f64)> = (model.min_value()..=model.max_value())
        .flat_map(|x| {
            (model.min_value()..=model.max_value()).map(move |y| (f64::from(x), f64::from(y)))
        })
        .collect();
    let coords: Vec<(f64, f64)> = model
        .points()
        .iter()
        .map(|p| (f64::from(p.x), f64::from(p.y)))
        .collect();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" Fit "))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &lattice,
                color: Color::DarkGray,
            });
            // Axes through the origin, arrow-free.
            ctx.draw(&CanvasLine {
                x1: min,
                y1: 0.0,
                x2: max,
                y2: 0.0,
                color: Color::Gray,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: min,
                x2: 0.0,
                y2: max,
                color: Color::Gray,
            });
            ctx.layer();
            // Offset indicator from each point to the fitted line.
            for p in model.points() {
                let x = f64::from(p.x);
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: f64::from(p.y),
                    x2: x,
                    y2: model.predict(x),
                    color: Color::Magenta,
                });
            }
            // The fitted segment spans the grid; the canvas clips the rest.
            ctx.draw(&CanvasLine {
                x1: min,
                y1: model.predict(min),
                x2: max,
                y2: model.predict(max),
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Cyan,
            });
            ctx.print(
                f64::from(cursor.0),
                f64::from(cursor.1),
                TextLine::styled("+", Style::default().fg(Color::Yellow)),
            );
        });

    frame.render_widget(canvas, area);
}
