use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ChipBarViewModel;

pub struct ChipBarView<'a> {
    model: &'a ChipBarViewModel,
}

impl<'a> ChipBarView<'a> {
    pub fn new(model: &'a ChipBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ChipBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chip_style = Style::default().fg(Color::Black).bg(Color::Gray);

        let mut spans = Vec::new();
        for chip in self.model.chips.iter().take(self.model.visible) {
            spans.push(Span::styled(format!(" {} × ", chip.text), chip_style));
            spans.push(Span::raw(" "));
        }
        if let Some(toggle) = &self.model.toggle_label {
            spans.push(Span::styled(
                format!("[f] {}", toggle),
                Style::default().fg(Color::Cyan),
            ));
        }
        if spans.is_empty() {
            spans.push(Span::styled(
                "No filters applied",
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Filters").borders(Borders::ALL))
            .render(area, buf);
    }
}
