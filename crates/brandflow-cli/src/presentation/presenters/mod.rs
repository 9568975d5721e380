pub mod columns;
pub mod config;
pub mod dashboard;
pub mod filters;
pub mod metrics;
pub mod period;
pub mod products;
pub mod tags;

pub use columns::present_column_list;
pub use config::{present_config, present_config_init, present_guidance};
pub use dashboard::present_screen;
pub use filters::{
    chip_budget, present_filter_catalog, present_filter_chips, present_filter_preview,
};
pub use metrics::{present_metric_catalog, present_metric_chart};
pub use period::present_period;
pub use products::{build_product_table, present_export_result, present_product_table};
pub use tags::{present_tag_create, present_tag_list};
