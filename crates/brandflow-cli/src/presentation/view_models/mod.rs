pub mod columns;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod filters;
pub mod metrics;
pub mod period;
pub mod products;
pub mod result;
pub mod tags;

pub use columns::{ColumnEntryViewModel, ColumnListViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel, GuidanceViewModel};
pub use dashboard::{
    ChipBarViewModel, DashboardHeaderViewModel, Focus, StatusBarViewModel, TuiScreenViewModel,
};
pub use filters::{
    CatalogEntryViewModel, CatalogSectionViewModel, ChipViewModel, FilterCatalogViewModel,
    FilterChipsViewModel, FilterPreviewViewModel, OptionViewModel,
};
pub use metrics::{
    ChartPointViewModel, ChartSeriesViewModel, MetricCardViewModel, MetricCatalogViewModel,
    MetricChartViewModel, MetricEntryViewModel, MetricGroupViewModel,
};
pub use period::{PeriodPresetViewModel, PeriodViewModel};
pub use products::{
    CellViewModel, ExportResultViewModel, ProductRowViewModel, ProductTableViewModel,
    TagBadgeViewModel,
};
pub use result::CommandResultViewModel;
pub use tags::{TagCreateViewModel, TagEntryViewModel, TagListViewModel};

use std::fmt;

/// Bridge from a view model to the `fmt::Display` view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
