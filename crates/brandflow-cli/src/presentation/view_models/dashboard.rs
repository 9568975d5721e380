//! Screen model of the interactive dashboard.
//!
//! Rebuilt from `AnalyticsState` after every key press; the TUI views only
//! read it.

use serde::Serialize;

use super::common::StatusLevel;
use super::filters::ChipViewModel;
use super::metrics::{ChartSeriesViewModel, MetricCardViewModel};
use super::products::ProductTableViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub header: DashboardHeaderViewModel,
    pub chips: ChipBarViewModel,
    pub cards: Vec<MetricCardViewModel>,
    pub chart: Vec<ChartSeriesViewModel>,
    pub table: ProductTableViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardHeaderViewModel {
    pub mode: String,
    pub channels: String,
    pub stores: String,
    pub store_count: String,
    pub group_by: String,
    pub period: String,
    pub range: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipBarViewModel {
    pub chips: Vec<ChipViewModel>,
    pub visible: usize,
    pub hidden: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status_level: StatusLevel,
    pub message: String,
    pub selected_products: usize,
    pub product_count: usize,
}

/// Region of the dashboard that receives cursor keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Metrics,
    Table,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Metrics => Focus::Table,
            Focus::Table => Focus::Metrics,
        }
    }
}
