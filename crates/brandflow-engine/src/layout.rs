//! Chip row overflow.
//!
//! Chips flow after the fixed left controls (search box, Add Filter button).
//! A chip that does not fit on the first row wraps, and every chip after it
//! wraps too. When the row is collapsed the wrapped chips are hidden and a
//! "Show all" / "Show less" toggle is offered; the toggle only exists while
//! something actually wraps.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowBudget {
    /// Full width of the filter bar
    pub row_width: u16,
    /// Width already taken on the first row by the left controls
    pub leading_width: u16,
    /// Spacing between items
    pub gap: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipLayout {
    /// Number of chips rendered, always a prefix of the chip list
    pub visible: usize,
    pub hidden: usize,
    pub show_toggle: bool,
    pub toggle_label: Option<&'static str>,
}

/// Index of the first chip pushed off the first row, if any
pub fn wrap_index(widths: &[u16], budget: RowBudget) -> Option<usize> {
    let mut used = u32::from(budget.leading_width);
    let row = u32::from(budget.row_width);
    for (idx, width) in widths.iter().enumerate() {
        let next = used + u32::from(budget.gap) + u32::from(*width);
        if next > row {
            return Some(idx);
        }
        used = next;
    }
    None
}

/// Collapse state of the chip row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipOverflow {
    pub expanded: bool,
}

impl Default for ChipOverflow {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl ChipOverflow {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn layout(&self, widths: &[u16], budget: RowBudget) -> ChipLayout {
        let total = widths.len();
        match wrap_index(widths, budget) {
            None => ChipLayout {
                visible: total,
                hidden: 0,
                show_toggle: false,
                toggle_label: None,
            },
            Some(_) if self.expanded => ChipLayout {
                visible: total,
                hidden: 0,
                show_toggle: true,
                toggle_label: Some("Show less"),
            },
            Some(idx) => ChipLayout {
                visible: idx,
                hidden: total - idx,
                show_toggle: true,
                toggle_label: Some("Show all"),
            },
        }
    }
}
