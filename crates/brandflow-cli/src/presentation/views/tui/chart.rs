use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use super::hex_color;
use crate::presentation::view_models::ChartSeriesViewModel;

/// Trend chart; each series is scaled to its own maximum so lines with
/// different units share one axis
pub struct ChartView<'a> {
    series: &'a [ChartSeriesViewModel],
}

impl<'a> ChartView<'a> {
    pub fn new(series: &'a [ChartSeriesViewModel]) -> Self {
        Self { series }
    }
}

fn normalised(series: &ChartSeriesViewModel) -> Vec<(f64, f64)> {
    let max = series
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    series
        .points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let y = if max > 0.0 { p.value / max * 100.0 } else { 0.0 };
            (idx as f64, y)
        })
        .collect()
}

impl<'a> Widget for ChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Trend").borders(Borders::ALL);

        if self.series.is_empty() {
            Paragraph::new(Span::styled(
                "Nothing plotted",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let data: Vec<Vec<(f64, f64)>> = self.series.iter().map(normalised).collect();
        let points = self.series[0].points.len().max(1);

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(data.iter())
            .map(|(series, data)| {
                let graph_type = if series.render_as == "bar" {
                    GraphType::Bar
                } else {
                    GraphType::Line
                };
                Dataset::default()
                    .name(series.label.as_str())
                    .marker(symbols::Marker::Braille)
                    .graph_type(graph_type)
                    .style(Style::default().fg(hex_color(&series.color)))
                    .data(data)
            })
            .collect();

        let first = &self.series[0].points;
        let x_labels: Vec<Span> = match (first.first(), first.last()) {
            (Some(start), Some(end)) => vec![
                Span::raw(start.label.as_str()),
                Span::raw(end.label.as_str()),
            ],
            _ => Vec::new(),
        };

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, (points - 1) as f64])
                    .labels(x_labels)
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(Axis::default().bounds([0.0, 100.0]))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ChartPointViewModel;

    #[test]
    fn test_series_scaled_to_its_peak() {
        let series = ChartSeriesViewModel {
            metric_id: "sales".to_string(),
            label: "Sales".to_string(),
            color: "#3b82f6".to_string(),
            render_as: "line".to_string(),
            points: vec![
                ChartPointViewModel {
                    label: "Jan 1".to_string(),
                    value: 50.0,
                },
                ChartPointViewModel {
                    label: "Jan 2".to_string(),
                    value: 200.0,
                },
            ],
        };
        assert_eq!(normalised(&series), vec![(0.0, 25.0), (1.0, 100.0)]);
    }
}
