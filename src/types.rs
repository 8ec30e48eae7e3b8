//! Type definitions and constants for the month view.

use chrono::{Datelike, NaiveDate};

/// Column display mode for the three-month layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// A (year, month) pair identifying one displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    pub year: i32,
    /// Month number, always 1-12.
    pub month: u32,
}

/// One day in the fixed 42-cell month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Canonical `YYYY-MM-DD` form of `date`.
    pub iso: String,
    /// False for leading/trailing days borrowed from the adjacent months.
    pub in_current_month: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate, month: u32) -> Self {
        DayCell {
            date,
            iso: format_iso_date(date),
            in_current_month: date.month() == month,
        }
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Formatting context shared by everything that renders a month.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting and default selection.
    pub today: NaiveDate,
    /// Whether to show year in month headers.
    pub show_year_in_header: bool,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
}

// 6 weeks × 7 days, Monday first
pub const CELLS_PER_MONTH: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH_REGULAR: usize = 2;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// Limits mirrored from the activity forms
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_UNDERLINE: &str = "\x1b[4m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
