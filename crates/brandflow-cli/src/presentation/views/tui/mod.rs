//! Dashboard widgets.
//!
//! Each view borrows its slice of `TuiScreenViewModel` and maps it onto
//! ratatui widgets. Views hold no state; the cursor positions they highlight
//! are passed in by the renderer.

pub mod chart;
pub mod chip_bar;
pub mod header;
pub mod metric_cards;
pub mod product_table;
pub mod status_bar;

pub use chart::ChartView;
pub use chip_bar::ChipBarView;
pub use header::HeaderView;
pub use metric_cards::MetricCardsView;
pub use product_table::ProductTableView;
pub use status_bar::StatusBarView;

use crate::presentation::formatters::color::parse_hex;
use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}

/// `#rrggbb` to an RGB colour; anything else falls back to the default
pub(crate) fn hex_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

pub(crate) fn change_color(is_positive: bool) -> Color {
    if is_positive { Color::Green } else { Color::Red }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#059669"), Color::Rgb(5, 150, 105));
        assert_eq!(hex_color("green"), Color::Reset);
    }
}
