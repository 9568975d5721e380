//! Reporting period picker.
//!
//! Presets resolve against an explicit `today` so that callers (and tests)
//! decide what the current date is.

use brandflow_types::{Error, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const RANGE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// "Jan 5, 2025 - Feb 1, 2025"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.from.format(RANGE_FORMAT),
            self.to.format(RANGE_FORMAT)
        )
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodPreset {
    Today,
    Yesterday,
    #[serde(rename = "last-7-days")]
    Last7Days,
    #[serde(rename = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-90-days")]
    Last90Days,
    ThisMonth,
    LastMonth,
    YearToDate,
}

impl PeriodPreset {
    pub const ALL: [PeriodPreset; 8] = [
        PeriodPreset::Today,
        PeriodPreset::Yesterday,
        PeriodPreset::Last7Days,
        PeriodPreset::Last30Days,
        PeriodPreset::Last90Days,
        PeriodPreset::ThisMonth,
        PeriodPreset::LastMonth,
        PeriodPreset::YearToDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PeriodPreset::Today => "Today",
            PeriodPreset::Yesterday => "Yesterday",
            PeriodPreset::Last7Days => "Last 7 days",
            PeriodPreset::Last30Days => "Last 30 days",
            PeriodPreset::Last90Days => "Last 90 days",
            PeriodPreset::ThisMonth => "This month",
            PeriodPreset::LastMonth => "Last month",
            PeriodPreset::YearToDate => "Year to date",
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let range = |from, to| DateRange { from, to };
        match self {
            PeriodPreset::Today => range(today, today),
            PeriodPreset::Yesterday => {
                let day = days_before(today, 1);
                range(day, day)
            }
            PeriodPreset::Last7Days => range(days_before(today, 6), today),
            PeriodPreset::Last30Days => range(days_before(today, 29), today),
            PeriodPreset::Last90Days => range(days_before(today, 89), today),
            PeriodPreset::ThisMonth => range(start_of_month(today), end_of_month(today)),
            PeriodPreset::LastMonth => {
                let last = today.checked_sub_months(Months::new(1)).unwrap_or(today);
                range(start_of_month(last), end_of_month(last))
            }
            PeriodPreset::YearToDate => range(
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                today,
            ),
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PeriodPreset {
    type Err = Error;

    /// Accepts the label ("Last 7 days") or its kebab form ("last-7-days")
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', " ");
        PeriodPreset::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::unknown("period", s))
    }
}

fn days_before(day: NaiveDate, n: u64) -> NaiveDate {
    day.checked_sub_days(Days::new(n)).unwrap_or(day)
}

fn start_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn end_of_month(day: NaiveDate) -> NaiveDate {
    start_of_month(day)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day)
}

/// Chosen period: a preset or an applied custom range, plus the custom
/// range being picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSelection {
    preset: PeriodPreset,
    custom: Option<DateRange>,
    pending_from: Option<NaiveDate>,
    pending_to: Option<NaiveDate>,
}

impl Default for PeriodSelection {
    fn default() -> Self {
        Self {
            preset: PeriodPreset::Last30Days,
            custom: None,
            pending_from: None,
            pending_to: None,
        }
    }
}

impl PeriodSelection {
    pub fn preset(&self) -> Option<PeriodPreset> {
        self.custom.is_none().then_some(self.preset)
    }

    pub fn custom(&self) -> Option<DateRange> {
        self.custom
    }

    pub fn select(&mut self, preset: PeriodPreset) {
        self.preset = preset;
        self.custom = None;
        debug!(%preset, "period preset selected");
    }

    pub fn set_custom_from(&mut self, day: NaiveDate) {
        self.pending_from = Some(day);
    }

    pub fn set_custom_to(&mut self, day: NaiveDate) {
        self.pending_to = Some(day);
    }

    /// Commit the pending custom range. Both ends must be set; reversed ends
    /// are swapped.
    pub fn apply_custom(&mut self) -> bool {
        let (Some(a), Some(b)) = (self.pending_from, self.pending_to) else {
            return false;
        };
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        self.custom = Some(DateRange { from, to });
        debug!(%from, %to, "custom period applied");
        true
    }

    pub fn label(&self) -> String {
        match self.custom {
            Some(range) => range.label(),
            None => self.preset.label().to_string(),
        }
    }

    pub fn range(&self, today: NaiveDate) -> DateRange {
        self.custom.unwrap_or_else(|| self.preset.resolve(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn presets_resolve_against_today() {
        let today = day(2025, 3, 15);
        assert_eq!(PeriodPreset::Yesterday.resolve(today).from, day(2025, 3, 14));
        assert_eq!(PeriodPreset::Last7Days.resolve(today).from, day(2025, 3, 9));
        assert_eq!(PeriodPreset::Last30Days.resolve(today).days(), 30);
        assert_eq!(
            PeriodPreset::ThisMonth.resolve(today),
            DateRange {
                from: day(2025, 3, 1),
                to: day(2025, 3, 31)
            }
        );
        assert_eq!(
            PeriodPreset::LastMonth.resolve(today),
            DateRange {
                from: day(2025, 2, 1),
                to: day(2025, 2, 28)
            }
        );
        assert_eq!(PeriodPreset::YearToDate.resolve(today).from, day(2025, 1, 1));
    }

    #[test]
    fn last_month_across_year_boundary() {
        let range = PeriodPreset::LastMonth.resolve(day(2025, 1, 31));
        assert_eq!(range.from, day(2024, 12, 1));
        assert_eq!(range.to, day(2024, 12, 31));
    }

    #[test]
    fn parses_labels_and_kebab_names() {
        assert_eq!("Last 90 days".parse::<PeriodPreset>(), Ok(PeriodPreset::Last90Days));
        assert_eq!("year-to-date".parse::<PeriodPreset>(), Ok(PeriodPreset::YearToDate));
        assert!("fortnight".parse::<PeriodPreset>().is_err());
    }

    #[test]
    fn default_is_last_30_days() {
        let sel = PeriodSelection::default();
        assert_eq!(sel.label(), "Last 30 days");
        assert_eq!(sel.preset(), Some(PeriodPreset::Last30Days));
    }

    #[test]
    fn custom_range_needs_both_ends() {
        let mut sel = PeriodSelection::default();
        sel.set_custom_from(day(2025, 1, 5));
        assert!(!sel.apply_custom());
        assert_eq!(sel.label(), "Last 30 days");

        sel.set_custom_to(day(2025, 2, 1));
        assert!(sel.apply_custom());
        assert_eq!(sel.label(), "Jan 5, 2025 - Feb 1, 2025");
        assert_eq!(sel.preset(), None);

        sel.select(PeriodPreset::Today);
        assert_eq!(sel.label(), "Today");
    }
}
