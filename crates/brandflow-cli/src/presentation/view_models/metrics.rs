use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MetricCatalogViewModel {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub groups: Vec<MetricGroupViewModel>,
    pub selected_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MetricGroupViewModel {
    pub category: String,
    pub accent_color: String,
    pub metrics: Vec<MetricEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct MetricEntryViewModel {
    pub id: String,
    pub label: String,
    pub value: String,
    pub change: String,
    pub is_positive: bool,
    pub selected: bool,
    pub chart_visible: bool,
    pub chartable: bool,
}

#[derive(Debug, Serialize)]
pub struct MetricChartViewModel {
    pub mode: String,
    pub cards: Vec<MetricCardViewModel>,
    pub series: Vec<ChartSeriesViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCardViewModel {
    pub id: String,
    pub label: String,
    pub accent_color: String,
    pub value: String,
    pub previous_value: String,
    pub change: String,
    pub is_positive: bool,
    pub chart_visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeriesViewModel {
    pub metric_id: String,
    pub label: String,
    pub color: String,
    pub render_as: String,
    pub points: Vec<ChartPointViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPointViewModel {
    pub label: String,
    pub value: f64,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for MetricCatalogViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::metrics::MetricCatalogView;
        Box::new(MetricCatalogView::new(self, mode))
    }
}

impl CreateView for MetricChartViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::metrics::MetricChartView;
        Box::new(MetricChartView::new(self, mode))
    }
}
