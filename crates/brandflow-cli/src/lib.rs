// NOTE: brandflow CLI layout
//
// The engine owns all view state; this crate only builds an `AnalyticsState`
// from flags and config, drives it through the same transitions the dashboard
// uses, and renders the result.
//
// - args/          clap definitions
// - commands.rs    dispatch
// - handlers/      one module per subcommand (controller)
// - presentation/  view models, presenters, console/json renderer, TUI

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Cli, ColumnsCommand, Commands, ConfigCommand, FiltersCommand, LogLevel, MetricsCommand,
    OutputFormat, TagsCommand,
};
pub use commands::run;
