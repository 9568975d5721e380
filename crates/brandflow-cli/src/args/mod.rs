// NOTE: Command Organization Rationale
//
// Namespaced subcommands follow the page regions of the dashboard
// (metrics, columns, filters, tags) so `--help` reads like the UI.

mod commands;
mod common;
mod enums;
mod filter_spec;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;
pub use filter_spec::{FilterSpec, SpecValue, format_filter_spec};

use brandflow_types::AccountMode;
use clap::Parser;

#[derive(Parser)]
#[command(name = "brandflow")]
#[command(about = "Seller and vendor analytics from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Account mode: seller, vendor, both or none (defaults to config)"
    )]
    pub mode: Option<AccountMode>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Path of the data directory holding config.toml")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
