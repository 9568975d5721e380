use brandflow_catalog::{default_metric_ids, metric_definitions};
use brandflow_types::{AccountMode, MetricCategory, MetricDefinition, RenderAs};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Selected metric cards plus the subset drawn on the trend chart.
///
/// Every mutation funnels through [`MetricSelection::commit`], which keeps
/// ids inside the active registry and the chart set inside the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSelection {
    mode: AccountMode,
    selected: Vec<String>,
    chart_visible: BTreeSet<String>,
}

/// Registry entries of one category, used by the manage-metrics panel
#[derive(Debug, Clone, Serialize)]
pub struct MetricGroup {
    pub category: MetricCategory,
    pub metrics: Vec<&'static MetricDefinition>,
}

/// One plotted series in draw order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub metric_id: &'static str,
    pub label: &'static str,
    pub data_key: &'static str,
    pub color: &'static str,
    pub render_as: RenderAs,
}

impl MetricSelection {
    /// Mode defaults, all of them visible on the chart
    pub fn new(mode: AccountMode) -> Self {
        let defaults = owned(default_metric_ids(mode));
        let mut selection = Self {
            mode,
            selected: Vec::new(),
            chart_visible: BTreeSet::new(),
        };
        let visible = defaults.iter().cloned().collect();
        selection.commit(defaults, visible);
        selection
    }

    pub fn mode(&self) -> AccountMode {
        self.mode
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn chart_visible_ids(&self) -> &BTreeSet<String> {
        &self.chart_visible
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_chart_visible(&self, id: &str) -> bool {
        self.chart_visible.contains(id)
    }

    /// Add or remove a card. Chart visibility follows the card.
    pub fn toggle_selection(&mut self, id: &str) {
        let mut selected = self.selected.clone();
        let mut visible = self.chart_visible.clone();
        if let Some(idx) = selected.iter().position(|s| s == id) {
            selected.remove(idx);
            visible.remove(id);
        } else {
            selected.push(id.to_string());
            visible.insert(id.to_string());
        }
        self.commit(selected, visible);
    }

    /// Show or hide a selected metric on the chart. Unselected ids are ignored.
    pub fn toggle_chart_visibility(&mut self, id: &str) {
        if !self.is_selected(id) {
            debug!(id, "chart toggle ignored for unselected metric");
            return;
        }
        let mut visible = self.chart_visible.clone();
        if !visible.remove(id) {
            visible.insert(id.to_string());
        }
        self.commit(self.selected.clone(), visible);
    }

    pub fn remove(&mut self, id: &str) {
        let selected = self.selected.iter().filter(|s| *s != id).cloned().collect();
        self.commit(selected, self.chart_visible.clone());
    }

    pub fn clear_all(&mut self) {
        self.commit(Vec::new(), BTreeSet::new());
    }

    /// Keep what the new registry knows; fall back to the mode defaults when
    /// nothing survives.
    pub fn set_mode(&mut self, mode: AccountMode) {
        self.mode = mode;
        let surviving: Vec<String> = self
            .selected
            .iter()
            .filter(|id| in_registry(mode, id))
            .cloned()
            .collect();

        if surviving.is_empty() {
            let defaults = owned(default_metric_ids(mode));
            let visible = defaults.iter().cloned().collect();
            debug!(%mode, "metric selection reset to defaults");
            self.commit(defaults, visible);
        } else {
            self.commit(surviving, self.chart_visible.clone());
        }
    }

    /// Definitions of the selected cards in selection order
    pub fn selected_metrics(&self) -> Vec<&'static MetricDefinition> {
        let defs = metric_definitions(self.mode);
        self.selected
            .iter()
            .filter_map(|id| defs.iter().find(|m| m.id == id))
            .collect()
    }

    /// Registry grouped by category in registry order, narrowed by label
    pub fn search_grouped(&self, query: &str) -> Vec<MetricGroup> {
        let needle = query.trim().to_lowercase();
        let mut groups: Vec<MetricGroup> = Vec::new();
        for def in metric_definitions(self.mode) {
            if !needle.is_empty() && !def.label.to_lowercase().contains(&needle) {
                continue;
            }
            match groups.iter_mut().find(|g| g.category == def.category) {
                Some(group) => group.metrics.push(def),
                None => groups.push(MetricGroup {
                    category: def.category,
                    metrics: vec![def],
                }),
            }
        }
        groups
    }

    /// Series to draw: bars first, then lines, each in selection order.
    /// Only chart-visible metrics with a chart binding are included.
    pub fn chart_series(&self) -> Vec<ChartSeries> {
        let plotted: Vec<ChartSeries> = self
            .selected_metrics()
            .into_iter()
            .filter(|m| self.is_chart_visible(m.id))
            .filter_map(|m| {
                m.chart.map(|chart| ChartSeries {
                    metric_id: m.id,
                    label: m.label,
                    data_key: chart.data_key,
                    color: m.accent_color,
                    render_as: chart.render_as,
                })
            })
            .collect();

        let (mut bars, lines): (Vec<_>, Vec<_>) = plotted
            .into_iter()
            .partition(|s| s.render_as == RenderAs::Bar);
        bars.extend(lines);
        bars
    }

    /// The one place selection state changes
    fn commit(&mut self, selected: Vec<String>, visible: BTreeSet<String>) {
        let mode = self.mode;
        let mut seen = BTreeSet::new();
        self.selected = selected
            .into_iter()
            .filter(|id| in_registry(mode, id) && seen.insert(id.clone()))
            .collect();
        self.chart_visible = visible
            .into_iter()
            .filter(|id| self.selected.contains(id))
            .collect();
    }
}

fn in_registry(mode: AccountMode, id: &str) -> bool {
    metric_definitions(mode).iter().any(|m| m.id == id)
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
