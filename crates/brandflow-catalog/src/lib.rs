//! Static registries for the brandflow dashboard.
//!
//! Everything here is immutable data built once per process: filter
//! definitions, metric definitions, product table columns and presets, the
//! demo product catalog, seed tags and the trend series.

pub mod columns;
pub mod filters;
pub mod metrics;
pub mod products;
pub mod registry;
pub mod tags;
pub mod trend;

pub use columns::{LOCKED_COLUMNS, all_columns, column, columns_for, is_locked, preset, presets};
pub use filters::{
    all_filter_definitions, default_applied_filters, filter_definition, filter_definitions,
    sections,
};
pub use metrics::{default_metric_ids, metric_definition, metric_definitions};
pub use products::sample_products;
pub use registry::ModeRegistry;
pub use tags::{COLOR_PALETTE, DEFAULT_TAG_COLOR, initial_tags};
pub use trend::{TrendPoint, trend_points};
