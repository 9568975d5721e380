//! The analytics page as one value.
//!
//! `AnalyticsState` owns every view-state machine of the page and is the only
//! place an account mode change is fanned out, so the filter bar, metric
//! cards, table columns and grouping always agree on the mode.

use brandflow_catalog::trend_points;
use brandflow_types::{AccountMode, Channel, GroupBy, StoreScope};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::channels::{ChannelSelection, StoreSelection, clamp_group_by, group_by_options};
use crate::columns::ColumnSelection;
use crate::filter::{Chip, FilterBar};
use crate::layout::ChipOverflow;
use crate::metrics::{ChartSeries, MetricSelection};
use crate::period::{DateRange, PeriodSelection};
use crate::table::ProductTable;

#[derive(Debug, Clone)]
pub struct AnalyticsState {
    mode: AccountMode,
    filters: FilterBar,
    chip_overflow: ChipOverflow,
    metrics: MetricSelection,
    columns: ColumnSelection,
    table: ProductTable,
    channels: ChannelSelection,
    stores: StoreSelection,
    group_by: GroupBy,
    period: PeriodSelection,
}

impl AnalyticsState {
    pub fn new(mode: AccountMode) -> Self {
        Self::with_table(mode, ProductTable::default())
    }

    pub fn with_table(mode: AccountMode, table: ProductTable) -> Self {
        Self {
            mode,
            filters: FilterBar::new(mode),
            chip_overflow: ChipOverflow::default(),
            metrics: MetricSelection::new(mode),
            columns: ColumnSelection::new(mode),
            table,
            channels: ChannelSelection::default(),
            stores: StoreSelection::default(),
            group_by: clamp_group_by(mode, GroupBy::default()),
            period: PeriodSelection::default(),
        }
    }

    pub fn mode(&self) -> AccountMode {
        self.mode
    }

    /// Switch account mode and prune every part to what the mode offers
    pub fn set_mode(&mut self, mode: AccountMode) {
        self.mode = mode;
        self.filters.set_mode(mode);
        self.metrics.set_mode(mode);
        self.columns.set_mode(mode);
        self.group_by = clamp_group_by(mode, self.group_by);
        debug!(%mode, group_by = ?self.group_by, "account mode switched");
    }

    /// Cycle seller → vendor → both, used by the mode toggle
    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn filters(&self) -> &FilterBar {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterBar {
        &mut self.filters
    }

    pub fn chip_overflow(&self) -> &ChipOverflow {
        &self.chip_overflow
    }

    pub fn chip_overflow_mut(&mut self) -> &mut ChipOverflow {
        &mut self.chip_overflow
    }

    pub fn metrics(&self) -> &MetricSelection {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut MetricSelection {
        &mut self.metrics
    }

    pub fn columns(&self) -> &ColumnSelection {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnSelection {
        &mut self.columns
    }

    pub fn table(&self) -> &ProductTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ProductTable {
        &mut self.table
    }

    pub fn channels(&self) -> &ChannelSelection {
        &self.channels
    }

    /// Replace the channel set; an empty list keeps the default channel
    pub fn set_channels(&mut self, channels: Vec<Channel>) {
        self.channels = ChannelSelection::new(channels);
    }

    pub fn toggle_channel(&mut self, channel: Channel) -> bool {
        self.channels.toggle(channel)
    }

    pub fn stores(&self) -> &StoreSelection {
        &self.stores
    }

    pub fn stores_mut(&mut self) -> &mut StoreSelection {
        &mut self.stores
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Only groupings offered in the current mode are accepted
    pub fn set_group_by(&mut self, group_by: GroupBy) -> bool {
        if group_by_options(self.mode).contains(&group_by) {
            self.group_by = group_by;
            true
        } else {
            false
        }
    }

    pub fn set_store_scope(&mut self, scope: StoreScope) {
        self.table.set_scope(scope);
    }

    pub fn period(&self) -> &PeriodSelection {
        &self.period
    }

    pub fn period_mut(&mut self) -> &mut PeriodSelection {
        &mut self.period
    }

    /// Plotted series with their values over the trend dates
    pub fn chart_data(&self) -> Vec<SeriesData> {
        let points = trend_points();
        self.metrics
            .chart_series()
            .into_iter()
            .map(|series| {
                let values = points
                    .iter()
                    .map(|p| (p.label(), p.value(series.data_key).unwrap_or(0.0)))
                    .collect();
                SeriesData { series, values }
            })
            .collect()
    }

    pub fn snapshot(&self, today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot {
            mode: self.mode,
            channels: self.channels.channels().to_vec(),
            stores: self.stores.label(),
            store_count: self.stores.count_label(),
            group_by: self.group_by,
            period: self.period.label(),
            range: self.period.range(today),
            filters: self.filters.chips(),
            metrics: self
                .metrics
                .selected_metrics()
                .into_iter()
                .map(|m| MetricCard {
                    id: m.id,
                    label: m.label,
                    value: m.value,
                    previous_value: m.previous_value,
                    change: m.change.value,
                    is_positive: m.change.is_positive,
                    chart_visible: self.metrics.is_chart_visible(m.id),
                })
                .collect(),
            chart: self.metrics.chart_series(),
            columns: self
                .columns
                .visible_columns()
                .into_iter()
                .map(|c| c.id)
                .collect(),
            preset: self.columns.active_preset(),
            products: self.table.products().len(),
            selected_products: self.table.selected_ids().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub series: ChartSeries,
    pub values: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub previous_value: &'static str,
    pub change: &'static str,
    pub is_positive: bool,
    pub chart_visible: bool,
}

/// Serializable summary of the whole page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub mode: AccountMode,
    pub channels: Vec<Channel>,
    pub stores: String,
    pub store_count: String,
    pub group_by: GroupBy,
    pub period: String,
    pub range: DateRange,
    pub filters: Vec<Chip>,
    pub metrics: Vec<MetricCard>,
    pub chart: Vec<ChartSeries>,
    pub columns: Vec<&'static str>,
    pub preset: Option<&'static str>,
    pub products: usize,
    pub selected_products: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_reaches_every_part() {
        let mut state = AnalyticsState::new(AccountMode::Seller);
        assert!(state.set_group_by(GroupBy::Sku));

        state.set_mode(AccountMode::Vendor);
        assert_eq!(state.filters().mode(), AccountMode::Vendor);
        assert_eq!(state.metrics().mode(), AccountMode::Vendor);
        assert_eq!(state.columns().mode(), AccountMode::Vendor);
        assert_eq!(state.group_by(), GroupBy::Asin);
        assert!(!state.set_group_by(GroupBy::Sku));
    }

    #[test]
    fn cycle_mode_walks_active_modes() {
        let mut state = AnalyticsState::new(AccountMode::Seller);
        state.cycle_mode();
        assert_eq!(state.mode(), AccountMode::Vendor);
        state.cycle_mode();
        assert_eq!(state.mode(), AccountMode::Both);
    }

    #[test]
    fn channels_and_stores_update_in_place() {
        let mut state = AnalyticsState::new(AccountMode::Seller);
        assert!(state.toggle_channel(Channel::Shopify));
        assert_eq!(state.channels().channels(), &[Channel::Amazon, Channel::Shopify]);

        let first = crate::channels::STORES[0];
        assert!(state.stores_mut().toggle(first));
        assert_eq!(state.stores().label(), first);
        assert!(!state.stores_mut().toggle("No Such Store"));
    }

    #[test]
    fn chart_data_has_a_value_per_trend_point() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let data = state.chart_data();
        assert_eq!(data.len(), 4);
        assert!(data.iter().all(|d| d.values.len() == trend_points().len()));
    }

    #[test]
    fn snapshot_summarises_the_page() {
        let state = AnalyticsState::new(AccountMode::Seller);
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let snap = state.snapshot(today);
        assert_eq!(snap.period, "Last 30 days");
        assert_eq!(snap.range.days(), 30);
        assert_eq!(snap.stores, "All Stores");
        assert_eq!(snap.metrics.len(), 4);
        assert_eq!(snap.columns[0], "product");
        assert_eq!(snap.products, 5);
    }
}
