use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{change_color, hex_color};
use crate::presentation::view_models::MetricCardViewModel;

/// Row of metric cards; `cursor` is highlighted when the row has focus
pub struct MetricCardsView<'a> {
    cards: &'a [MetricCardViewModel],
    cursor: Option<usize>,
}

impl<'a> MetricCardsView<'a> {
    pub fn new(cards: &'a [MetricCardViewModel], cursor: Option<usize>) -> Self {
        Self { cards, cursor }
    }
}

impl<'a> Widget for MetricCardsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            Paragraph::new("No metrics selected")
                .block(Block::default().title("Metrics").borders(Borders::ALL))
                .render(area, buf);
            return;
        }

        let constraints = vec![Constraint::Ratio(1, self.cards.len() as u32); self.cards.len()];
        let slots = Layout::horizontal(constraints).split(area);

        for (idx, (card, slot)) in self.cards.iter().zip(slots.iter()).enumerate() {
            let accent = hex_color(&card.accent_color);
            let mut border = Style::default().fg(accent);
            if self.cursor == Some(idx) {
                border = border.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            let marker = if card.chart_visible { "●" } else { "○" };
            let lines = vec![
                Line::from(Span::styled(
                    card.value.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        card.change.as_str(),
                        Style::default().fg(change_color(card.is_positive)),
                    ),
                    Span::styled(
                        format!(" vs {}", card.previous_value),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ];

            Paragraph::new(lines)
                .block(
                    Block::default()
                        .title(format!("{} {}", marker, card.label))
                        .borders(Borders::ALL)
                        .border_style(border),
                )
                .render(*slot, buf);
        }
    }
}
