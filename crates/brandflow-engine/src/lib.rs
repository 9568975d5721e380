// Engine module - view-state machines and pure derivations of the analytics page
// This layer sits between the static registries (catalog) and CLI presentation

pub mod channels;
pub mod columns;
pub mod comparison;
pub mod dashboard;
pub mod filter;
pub mod layout;
pub mod metrics;
pub mod period;
pub mod table;
pub mod tags;

pub use channels::{ChannelSelection, STORES, StoreSelection, clamp_group_by, group_by_options};
pub use columns::ColumnSelection;
pub use comparison::{Comparison, comparison_hash, pseudo_comparison};
pub use dashboard::{AnalyticsState, DashboardSnapshot, MetricCard, SeriesData};
pub use filter::{
    CatalogEntry, CatalogSection, Chip, ClickTarget, EditorOrigin, EditorState, FilterBar,
    TagColor, chip_text, tag_color_class,
};
pub use layout::{ChipLayout, ChipOverflow, RowBudget, wrap_index};
pub use metrics::{ChartSeries, MetricGroup, MetricSelection};
pub use period::{DateRange, PeriodPreset, PeriodSelection};
pub use table::{
    Breakdown, ProductTable, ScoreBand, SortDirection, TableCell, TableRow, score_band, score_for,
    score_label, score_title,
};
pub use tags::{TagStore, toggle_on_product};

// Façade API - stable entry points for the CLI layer

/// Analytics page in its initial state for the mode
pub fn analytics(mode: brandflow_types::AccountMode) -> AnalyticsState {
    AnalyticsState::new(mode)
}
