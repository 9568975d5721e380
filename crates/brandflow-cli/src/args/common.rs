use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (ids only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all fields)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Filters applied on top of (or instead of) the default filter set.
///
/// Spec syntax: `key=a,b` for multi-select, `key=text` for text filters and
/// `key:operator:value1[:value2]` for number and date filters.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,

    #[arg(long, help = "Start from an empty filter bar instead of the defaults")]
    pub no_defaults: bool,
}
