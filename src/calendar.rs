//! Month grid construction and navigation.
//!
//! All arithmetic runs on `NaiveDate`, which carries no time of day and no
//! offset, so a day can never shift across a time zone boundary.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::holidays;
use crate::types::{CELLS_PER_MONTH, CalContext, ColumnsMode, DayCell, MONTH_WIDTH, MonthRef};

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        MonthRef { year, month }
    }

    /// Build a month from an unchecked month number, clamping it into 1-12.
    pub fn clamped(year: i32, month: i64) -> Self {
        MonthRef {
            year,
            month: month.clamp(1, 12) as u32,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthRef {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month, rolling December over into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthRef::new(self.year + 1, 1)
        } else {
            MonthRef::new(self.year, self.month + 1)
        }
    }

    /// The preceding month, rolling January back into December.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthRef::new(self.year - 1, 12)
        } else {
            MonthRef::new(self.year, self.month - 1)
        }
    }

    /// Shift by any number of months in either direction.
    pub fn shifted(self, months: i32) -> Self {
        let total = self.year * 12 + (self.month - 1) as i32 + months;
        MonthRef {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// First calendar day of the month.
    ///
    /// # Panics
    /// If the year is outside the range `chrono` can represent.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("year within chrono range, month 1-12")
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Build the 42-cell Monday-first grid for a month.
///
/// The grid always has six rows, so months spanning four or five weeks get
/// trailing days from the next month (possibly a whole extra row).
pub fn build_month_grid(year: i32, month: u32) -> Vec<DayCell> {
    let target = MonthRef::new(year, month);
    let first = target.first_day();
    // number_from_monday: Mon = 1 ... Sun = 7
    let lead = first.weekday().number_from_monday() - 1;
    let start = first - Duration::days(lead as i64);
    let trailing = CELLS_PER_MONTH as u32 - lead - days_in_month(target);

    debug!(year, month, %start, lead, trailing, "building month grid");

    start
        .iter_days()
        .take(CELLS_PER_MONTH)
        .map(|date| DayCell::new(date, month))
        .collect()
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Length of a month; `MonthRef` always holds a month in 1-12.
pub fn days_in_month(month: MonthRef) -> u32 {
    match month.month {
        2 if is_leap_year(month.year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Whether a cell gets "red day" styling: in the displayed month and either
/// a weekend or a public holiday.
pub fn is_red_day(cell: &DayCell) -> bool {
    cell.in_current_month
        && (is_weekend(cell.date.weekday()) || holidays::holiday(cell.date).is_some())
}

/// Pick the day selected when a month is first shown: today if it lies in
/// the displayed month, else the first day of that month.
pub fn initial_selection(cells: &[DayCell], today: NaiveDate) -> NaiveDate {
    cells
        .iter()
        .find(|c| c.in_current_month && c.date == today)
        .or_else(|| cells.iter().find(|c| c.in_current_month))
        .map(|c| c.date)
        .unwrap_or(today)
}

impl CalContext {
    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                // month + gutter per column, clamp to 1-3 for readability
                let month_width = MONTH_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
