//! Results table: per-point residuals and the SSE aggregate row.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use fitline_core::{FitModel, PointId};

/// Table row index of the selected point id, if it still exists.
#[must_use]
pub fn selected_index(model: &FitModel, selected: Option<PointId>) -> Option<usize> {
    let id = selected?;
    model.points().iter().position(|p| p.id == id)
}

/// Render the results table.
///
/// The selection is keyed by point id, not row position, so removing
/// other rows leaves it on the same point.
pub fn render_table(frame: &mut Frame, area: Rect, model: &FitModel, selected: Option<PointId>) {
    let header = Row::new(["#", "x", "y", "y-ŷ", "(y-ŷ)²"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = model
        .points()
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id.to_string()),
                Cell::from(p.x.to_string()),
                Cell::from(p.y.to_string()),
                Cell::from(format!("{:.2}", model.residual(p))),
                Cell::from(format!("{:.2}", model.squared_error(p))),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from("Σ"),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
            Cell::from(format!("{:.2}", model.total_squared_error())),
        ])
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    );

    let widths = [
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Points {}/{} ",
            model.len(),
            model.capacity()
        )))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(selected_index(model, selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn render_in_test_terminal(model: &FitModel, selected: Option<PointId>) {
        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_table(frame, area, model, selected);
            })
            .unwrap();
    }

    #[test]
    fn render_empty_table() {
        render_in_test_terminal(&FitModel::new(), None);
    }

    #[test]
    fn render_with_rows_and_selection() {
        let mut model = FitModel::new();
        let first = model.add_point(0, 1).unwrap();
        model.add_point(2, 3).unwrap();
        render_in_test_terminal(&model, Some(first));
    }

    #[test]
    fn selection_index_follows_id() {
        let mut model = FitModel::new();
        let a = model.add_point(0, 0).unwrap();
        let b = model.add_point(1, 1).unwrap();
        let c = model.add_point(2, 2).unwrap();

        assert_eq!(selected_index(&model, Some(b)), Some(1));
        model.remove_point(a).unwrap();
        // Same point, new row position.
        assert_eq!(selected_index(&model, Some(b)), Some(0));
        assert_eq!(selected_index(&model, Some(c)), Some(1));
    }

    #[test]
    fn selection_index_of_removed_id_is_none() {
        let mut model = FitModel::new();
        let a = model.add_point(0, 0).unwrap();
        model.remove_point(a).unwrap();
        assert_eq!(selected_index(&model, Some(a)), None);
        assert_eq!(selected_index(&model, None), None);
    }

    #[test]
    fn render_small_area() {
        let mut model = FitModel::new();
        model.add_point(0, 1).unwrap();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_table(frame, area, &model, None);
            })
            .unwrap();
    }
}
