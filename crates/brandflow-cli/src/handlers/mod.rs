pub mod columns;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod filters;
pub mod metrics;
pub mod period;
pub mod products;
pub mod tags;
