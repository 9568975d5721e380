// Views lay out ViewModels for the console (fmt::Display) and the dashboard (ratatui)

pub mod columns;
pub mod config;
pub mod filters;
pub mod metrics;
pub mod period;
pub mod products;
pub mod tags;
pub mod tui;
