use brandflow_engine::{AnalyticsState, MetricSelection};
use brandflow_types::RenderAs;

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    ChartPointViewModel, ChartSeriesViewModel, CommandResultViewModel, Guidance,
    MetricCardViewModel, MetricCatalogViewModel, MetricChartViewModel, MetricEntryViewModel,
    MetricGroupViewModel, StatusBadge,
};

pub fn present_metric_catalog(
    selection: &MetricSelection,
    query: Option<&str>,
) -> CommandResultViewModel<MetricCatalogViewModel> {
    let mode = selection.mode();
    let groups: Vec<MetricGroupViewModel> = selection
        .search_grouped(query.unwrap_or(""))
        .into_iter()
        .map(|group| MetricGroupViewModel {
            category: group.category.label().to_string(),
            accent_color: group.category.accent_color().to_string(),
            metrics: group
                .metrics
                .into_iter()
                .map(|m| MetricEntryViewModel {
                    id: m.id.to_string(),
                    label: m.label.to_string(),
                    value: m.value.to_string(),
                    change: m.change.value.to_string(),
                    is_positive: m.change.is_positive,
                    selected: selection.is_selected(m.id),
                    chart_visible: selection.is_chart_visible(m.id),
                    chartable: m.is_chartable(),
                })
                .collect(),
        })
        .collect();

    let metric_count: usize = groups.iter().map(|g| g.metrics.len()).sum();
    let group_count = groups.len();

    let content = MetricCatalogViewModel {
        mode: mode.label().to_string(),
        query: query.map(str::to_string),
        groups,
        selected_count: selection.selected_ids().len(),
    };

    let mut result = CommandResultViewModel::new(content);

    if metric_count == 0 {
        match query {
            Some(q) => {
                result = result.with_badge(StatusBadge::info(format!("No metrics match '{}'", q)))
            }
            None => {
                result = result
                    .with_badge(StatusBadge::warning(format!(
                        "No metrics available in {} mode",
                        mode
                    )))
                    .with_suggestion(
                        Guidance::new("Pick an account mode")
                            .with_command(fmt::with_mode(cmd::METRICS_LIST, "seller")),
                    )
            }
        }
    } else {
        result = result
            .with_badge(StatusBadge::success(format!(
                "{} metric(s) in {} categories",
                metric_count, group_count
            )))
            .with_suggestion(
                Guidance::new("Plot the selected cards").with_command(cmd::METRICS_CHART),
            );
    }

    result
}

pub fn present_metric_chart(state: &AnalyticsState) -> CommandResultViewModel<MetricChartViewModel> {
    let content = MetricChartViewModel {
        mode: state.mode().label().to_string(),
        cards: metric_cards(state),
        series: chart_series(state),
    };

    let plotted = content.series.len();
    let mut result = CommandResultViewModel::new(content);

    if plotted == 0 {
        result = result
            .with_badge(StatusBadge::info("Nothing plotted"))
            .with_suggestion(
                Guidance::new("Browse metrics that can be charted")
                    .with_command(cmd::METRICS_LIST),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!("{} series plotted", plotted)));
    }

    result
}

pub(crate) fn metric_cards(state: &AnalyticsState) -> Vec<MetricCardViewModel> {
    let metrics = state.metrics();
    metrics
        .selected_metrics()
        .into_iter()
        .map(|m| MetricCardViewModel {
            id: m.id.to_string(),
            label: m.label.to_string(),
            accent_color: m.accent_color.to_string(),
            value: m.value.to_string(),
            previous_value: m.previous_value.to_string(),
            change: m.change.value.to_string(),
            is_positive: m.change.is_positive,
            chart_visible: metrics.is_chart_visible(m.id),
        })
        .collect()
}

pub(crate) fn chart_series(state: &AnalyticsState) -> Vec<ChartSeriesViewModel> {
    state
        .chart_data()
        .into_iter()
        .map(|data| ChartSeriesViewModel {
            metric_id: data.series.metric_id.to_string(),
            label: data.series.label.to_string(),
            color: data.series.color.to_string(),
            render_as: match data.series.render_as {
                RenderAs::Line => "line".to_string(),
                RenderAs::Bar => "bar".to_string(),
            },
            points: data
                .values
                .into_iter()
                .map(|(label, value)| ChartPointViewModel { label, value })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    #[test]
    fn test_catalog_badge_counts_metrics() {
        let selection = MetricSelection::new(AccountMode::Seller);
        let result = present_metric_catalog(&selection, None);
        let badge = result.badge.unwrap();
        assert!(badge.label.contains("metric(s)"));
        assert!(!result.content.groups.is_empty());
    }

    #[test]
    fn test_catalog_without_matches_is_info() {
        let selection = MetricSelection::new(AccountMode::Seller);
        let result = present_metric_catalog(&selection, Some("zzz"));
        assert_eq!(result.badge.unwrap().label, "No metrics match 'zzz'");
        assert!(result.content.groups.is_empty());
    }

    #[test]
    fn test_chart_lists_bars_before_lines() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let series = chart_series(&state);
        let first_line = series.iter().position(|s| s.render_as == "line");
        let last_bar = series.iter().rposition(|s| s.render_as == "bar");
        if let (Some(line), Some(bar)) = (first_line, last_bar) {
            assert!(bar < line);
        }
    }
}
