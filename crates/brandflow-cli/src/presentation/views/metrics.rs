use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::number::format_compact;
use crate::presentation::view_models::{MetricCatalogViewModel, MetricChartViewModel, ViewMode};

// --------------------------------------------------------
// Metric Catalog View
// --------------------------------------------------------

pub struct MetricCatalogView<'a> {
    data: &'a MetricCatalogViewModel,
    mode: ViewMode,
}

impl<'a> MetricCatalogView<'a> {
    pub fn new(data: &'a MetricCatalogViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for group in &self.data.groups {
            for metric in &group.metrics {
                writeln!(f, "{}", metric.id)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for group in &self.data.groups {
            writeln!(f, "{}", group.category.bold())?;
            for metric in &group.metrics {
                writeln!(
                    f,
                    "  {} {:<28} {:>12}",
                    marker(metric.selected),
                    metric.label,
                    metric.value
                )?;
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mode: {}\n", self.data.mode)?;
        for group in &self.data.groups {
            writeln!(f, "{} ({})", group.category.bold(), group.accent_color)?;
            for metric in &group.metrics {
                let change = if metric.is_positive {
                    metric.change.green().to_string()
                } else {
                    metric.change.red().to_string()
                };
                writeln!(
                    f,
                    "  {} {:<28} {:>12}  {}",
                    marker(metric.selected),
                    metric.label,
                    metric.value,
                    change
                )?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{} card(s) selected", self.data.selected_count)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mode: {}\n", self.data.mode)?;
        writeln!(
            f,
            "  {:<3} {:<24} {:<28} {:>12} {:>8} {:<6} {}",
            "", "ID", "LABEL", "VALUE", "CHANGE", "CHART", "CATEGORY"
        )?;
        for group in &self.data.groups {
            for metric in &group.metrics {
                let chart = match (metric.chartable, metric.chart_visible) {
                    (false, _) => "-",
                    (true, true) => "shown",
                    (true, false) => "hidden",
                };
                writeln!(
                    f,
                    "  {:<3} {:<24} {:<28} {:>12} {:>8} {:<6} {}",
                    marker(metric.selected),
                    metric.id,
                    metric.label,
                    metric.value,
                    metric.change,
                    chart,
                    group.category
                )?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for MetricCatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

fn marker(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

// --------------------------------------------------------
// Metric Chart View
// --------------------------------------------------------

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct MetricChartView<'a> {
    data: &'a MetricChartViewModel,
    mode: ViewMode,
}

impl<'a> MetricChartView<'a> {
    pub fn new(data: &'a MetricChartViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.cards {
            let arrow = if card.is_positive { "▲" } else { "▼" };
            let chart = if card.chart_visible { "" } else { "  (hidden)" };
            writeln!(
                f,
                "  {:<28} {:>12}  {} {}  was {}{}",
                card.label, card.value, arrow, card.change, card.previous_value, chart
            )?;
        }
        Ok(())
    }

    fn render_series(&self, f: &mut fmt::Formatter, with_values: bool) -> fmt::Result {
        for series in &self.data.series {
            let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
            writeln!(
                f,
                "  {:<28} {:<4} {}",
                series.label,
                series.render_as,
                sparkline(&values)
            )?;
            if with_values {
                let row: Vec<String> = series
                    .points
                    .iter()
                    .map(|p| format!("{} {}", p.label, format_compact(p.value)))
                    .collect();
                writeln!(f, "    {}", row.join(" | ").dimmed())?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for MetricChartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for series in &self.data.series {
                    writeln!(f, "{}", series.metric_id)?;
                }
                Ok(())
            }
            ViewMode::Compact => self.render_series(f, false),
            ViewMode::Standard => {
                writeln!(f, "Cards:")?;
                self.render_cards(f)?;
                writeln!(f, "\nChart:")?;
                self.render_series(f, false)
            }
            ViewMode::Verbose => {
                writeln!(f, "Cards:")?;
                self.render_cards(f)?;
                writeln!(f, "\nChart:")?;
                self.render_series(f, true)
            }
        }
    }
}

/// One block character per value, scaled between the series min and max
fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((v - min) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}
