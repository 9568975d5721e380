use super::common::{FilterArgs, ViewModeArgs};
use super::enums::MatchArg;
use brandflow_types::StoreScope;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Metric cards and the trend chart")]
    Metrics {
        #[command(subcommand)]
        command: MetricsCommand,
    },

    #[command(about = "Product table columns and presets")]
    Columns {
        #[command(subcommand)]
        command: ColumnsCommand,
    },

    #[command(about = "Show the product table")]
    Products {
        #[arg(long, help = "Column preset (Revenue, Advertising, Orders, ...)")]
        preset: Option<String>,

        #[arg(long, help = "Store used for the performance score: amazon, shopify or both")]
        store: Option<StoreScope>,

        #[arg(long, help = "Sort by column id")]
        sort: Option<String>,

        #[arg(long, requires = "sort")]
        desc: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Export the product table as CSV")]
    Export {
        #[arg(long, help = "Column preset (Revenue, Advertising, Orders, ...)")]
        preset: Option<String>,

        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Advanced filter bar")]
    Filters {
        #[command(subcommand)]
        command: FiltersCommand,
    },

    #[command(about = "Product tags")]
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },

    #[command(about = "Resolve the reporting period")]
    Period {
        #[arg(long, help = "Preset label, e.g. \"last 7 days\" or year-to-date")]
        preset: Option<String>,

        #[arg(long, requires = "to", help = "Custom range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, requires = "from", help = "Custom range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Reference date instead of the local date (YYYY-MM-DD)")]
        today: Option<String>,
    },

    #[command(about = "Interactive terminal dashboard (JSON format prints a snapshot)")]
    Dashboard {
        #[arg(long, help = "Reference date instead of the local date (YYYY-MM-DD)")]
        today: Option<String>,
    },

    #[command(about = "Show or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum MetricsCommand {
    #[command(about = "List the metric registry grouped by category")]
    List {
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show chart series for the selected metrics")]
    Chart {
        #[arg(long = "select", value_name = "ID", help = "Toggle a metric card")]
        select: Vec<String>,

        #[arg(long = "hide", value_name = "ID", help = "Toggle chart visibility")]
        hide: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ColumnsCommand {
    #[command(about = "List table columns and their visibility")]
    List {
        #[arg(long)]
        preset: Option<String>,

        #[arg(long = "toggle", value_name = "ID")]
        toggle: Vec<String>,

        #[arg(long, help = "Hide every column except the locked ones")]
        clear: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum FiltersCommand {
    #[command(about = "List the filter catalog by section")]
    Catalog {
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Render applied filters as chips")]
    Chips {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Row width in columns (defaults to the terminal width)")]
        width: Option<u16>,

        #[arg(long, help = "Hide chips that wrap past the first row")]
        collapsed: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Preview a draft before applying it")]
    Preview {
        key: String,

        #[arg(long = "option", value_name = "VALUE")]
        options: Vec<String>,

        #[arg(long, value_name = "OPERATOR")]
        operator: Option<String>,

        #[arg(long)]
        value1: Option<String>,

        #[arg(long)]
        value2: Option<String>,

        #[arg(long = "match", default_value = "any")]
        match_mode: MatchArg,
    },
}

#[derive(Subcommand)]
pub enum TagsCommand {
    #[command(about = "List tags with product counts")]
    List {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "Create a tag (existing names are reused)")]
    Create {
        name: String,

        #[arg(long)]
        color: Option<String>,
    },

    #[command(about = "Rename or recolour a tag")]
    Rename {
        old: String,

        new: String,

        #[arg(long, help = "New colour (#rrggbb); keeps the current one when omitted")]
        color: Option<String>,
    },

    #[command(about = "Delete a tag and remove it from every product")]
    Delete { name: String },

    #[command(about = "Add or remove a tag on a product")]
    Toggle { product_id: u32, tag: String },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
