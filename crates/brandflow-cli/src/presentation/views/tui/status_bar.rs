use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::{Focus, StatusBarViewModel};

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    focus: Focus,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, focus: Focus) -> Self {
        Self { model, focus }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let focus = match self.focus {
            Focus::Metrics => "metrics",
            Focus::Table => "table",
        };
        let status_line = Line::from(vec![
            Span::raw(format!(
                "Selected: {}/{} ",
                self.model.selected_products, self.model.product_count
            )),
            Span::raw("| "),
            Span::raw(format!("Focus: {} ", focus)),
            Span::raw("| "),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[m]", key),
            Span::raw("ode "),
            Span::styled("[tab]", key),
            Span::raw("focus "),
            Span::styled("[space]", key),
            Span::raw("toggle "),
            Span::styled("[a]", key),
            Span::raw("ll "),
            Span::styled("[s]", key),
            Span::raw("tore "),
            Span::styled("[p]", key),
            Span::raw("eriod "),
            Span::styled("[f]", key),
            Span::raw("ilters"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
