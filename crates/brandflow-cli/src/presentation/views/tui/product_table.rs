use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use super::{change_color, hex_color};
use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::ProductTableViewModel;

const NAME_WIDTH: u16 = 32;
const CELL_WIDTH: u16 = 12;

/// Product table; `cursor` marks the focused row
pub struct ProductTableView<'a> {
    model: &'a ProductTableViewModel,
    cursor: Option<usize>,
}

impl<'a> ProductTableView<'a> {
    pub fn new(model: &'a ProductTableViewModel, cursor: Option<usize>) -> Self {
        Self { model, cursor }
    }
}

impl<'a> Widget for ProductTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut header_cells = vec![Cell::from(" "), Cell::from(self.model.score_label.as_str())];
        header_cells.extend(self.model.headers.iter().map(|h| Cell::from(h.as_str())));
        let header = Row::new(header_cells).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .model
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let mut cells = vec![
                    Cell::from(check),
                    Cell::from(Span::styled(
                        row.score.to_string(),
                        Style::default().fg(hex_color(&row.score_color)),
                    )),
                ];

                for (col, cell) in row.cells.iter().enumerate() {
                    if col == 0 {
                        let mut spans = vec![Span::raw(truncate(
                            &cell.display,
                            NAME_WIDTH as usize,
                        ))];
                        for tag in &row.tags {
                            spans.push(Span::styled(
                                format!(" #{}", tag.name),
                                Style::default().fg(hex_color(&tag.color)),
                            ));
                        }
                        cells.push(Cell::from(Line::from(spans)));
                        continue;
                    }

                    let style = match cell.is_positive {
                        Some(positive) => Style::default().fg(change_color(positive)),
                        None => Style::default(),
                    };
                    cells.push(Cell::from(Span::styled(cell.display.as_str(), style)));
                }

                let mut style = Style::default();
                if self.cursor == Some(idx) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(cells).style(style)
            })
            .collect();

        let mut widths = vec![Constraint::Length(3), Constraint::Length(4)];
        for idx in 0..self.model.headers.len() {
            widths.push(Constraint::Length(if idx == 0 { NAME_WIDTH + 12 } else { CELL_WIDTH }));
        }

        let title = match &self.model.preset {
            Some(preset) => format!(
                "Products ({} selected) · {} preset",
                self.model.selected_count, preset
            ),
            None => format!("Products ({} selected)", self.model.selected_count),
        };

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(area, buf);
    }
}
