use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::DashboardHeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a DashboardHeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a DashboardHeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("Mode ", label),
            Span::styled(self.model.mode.as_str(), value),
            Span::raw("  "),
            Span::styled("Channels ", label),
            Span::styled(self.model.channels.as_str(), value),
            Span::raw("  "),
            Span::styled("Stores ", label),
            Span::styled(
                format!("{} ({})", self.model.stores, self.model.store_count),
                value,
            ),
            Span::raw("  "),
            Span::styled("Group by ", label),
            Span::styled(self.model.group_by.as_str(), value),
            Span::raw("  "),
            Span::styled("Period ", label),
            Span::styled(
                format!("{} · {}", self.model.period, self.model.range),
                value,
            ),
        ]);

        Paragraph::new(line)
            .block(Block::default().title("brandflow").borders(Borders::ALL))
            .render(area, buf);
    }
}
