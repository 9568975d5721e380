//! # Presentation Layer
//!
//! MVVM, as in the rest of the CLI:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> Output
//!  (Controller)     (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> Output
//! ```
//!
//! The interactive dashboard keeps the engine's `AnalyticsState` as its model
//! and rebuilds the screen view model after every key press:
//!
//! ```text
//! key --> [ DashboardApp ] --> AnalyticsState transition --> present_screen() --> [ tui views ]
//! ```
//!
//! ## Rules
//!
//! 1. **View models are data.** They implement `Serialize`; the JSON output is
//!    the full view model regardless of `ViewMode`.
//! 2. **Presenters do the thinking.** Grouping, deltas and guidance live in
//!    `presenters/`, never in views.
//! 3. **Views do the layout.** `views/` implement `fmt::Display` (console) or
//!    ratatui widgets (TUI) and decide what each `ViewMode` hides.
//! 4. **Renderers only route.** `renderers/` choose JSON vs text and run the
//!    TUI loop; the dashboard's UI state (focus, cursor) lives there, domain
//!    state stays in the engine.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode,
};
