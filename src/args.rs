//! Command-line argument parsing using clap.
//!
//! Arguments follow the cal convention: `[month] [year]`

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, ValueHint};
use tracing::warn;

use crate::activity::parse_date;
use crate::calendar::initial_selection;
use crate::error::{KalenderError, Result};
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, CalContext, ColumnsMode, DayCell, GUTTER_WIDTH_REGULAR, MonthRef,
};

#[derive(Parser, Debug)]
#[command(name = "kalender")]
#[command(about = "Displays a month calendar with Swedish public holidays", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Go back one month (repeatable).
    #[arg(short = 'p', long = "prev", action = ArgAction::Count, help_heading = "Navigation")]
    pub prev: u8,

    /// Go forward one month (repeatable).
    #[arg(short = 'n', long = "next", action = ArgAction::Count, help_heading = "Navigation")]
    pub next: u8,

    /// Select a day (YYYY-MM-DD); its month is shown unless a month is given.
    #[arg(short = 'd', long = "day", help_heading = "Navigation", value_name = "date")]
    pub day: Option<String>,

    /// Display three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// List the public holidays of the displayed year.
    #[arg(short = 'H', long = "holidays", help_heading = "Display options")]
    pub holidays: bool,

    /// JSON export of activities to show on the calendar.
    #[arg(
        short = 'a',
        long = "activities",
        help_heading = "Display options",
        value_name = "file",
        value_hint = ValueHint::FilePath
    )]
    pub activities: Option<PathBuf>,

    /// Month (1-12 or name) - optional, or a year when given alone as 4 digits.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Number of columns for the three-month view (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output options"
    )]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month calendar with Swedish public holidays.

Without any arguments, display the current month.

Examples:
  kalender                     Display current month
  kalender -3                  Display three months (prev, current, next)
  kalender 6 2024              Display June 2024
  kalender juni                Display June this year
  kalender -n                  Display next month
  kalender -H 2025             List the holidays of 2025
  kalender -a acts.json -d 2024-06-22
                               Show activities for a day
  kalender --color             Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new(args: &Args) -> Result<Self> {
        let today = get_today_date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s.parse::<u32>().map_err(|_| {
                    KalenderError::InvalidArgument(format!("invalid columns value: {}", s))
                })?;
                if n == 0 {
                    return Err(KalenderError::InvalidArgument(
                        "columns must be positive".to_string(),
                    ));
                }
                ColumnsMode::Fixed(n)
            }
        };

        if let Some(year_str) = &args.year_arg {
            parse_year(year_str)?;
        }

        Ok(CalContext {
            color,
            today,
            show_year_in_header: true,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
        })
    }
}

/// Get today's date, respecting KALENDER_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("KALENDER_TEST_TIME")
        && let Some(date) = parse_date(&test_time)
    {
        return date;
    }
    chrono::Utc::now().date_naive()
}

fn parse_year(s: &str) -> Result<i32> {
    let year: i32 = s
        .parse()
        .map_err(|_| KalenderError::InvalidYear(s.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(KalenderError::InvalidYear(year.to_string()));
    }
    Ok(year)
}

/// Resolve a month argument: numbers are clamped into 1-12, names are
/// looked up in Swedish and English.
fn parse_month_arg(s: &str, year: i32) -> Result<MonthRef> {
    if let Ok(n) = s.parse::<i64>() {
        let month = MonthRef::clamped(year, n);
        if i64::from(month.month) != n {
            warn!(requested = n, shown = month.month, "month out of range, clamped");
        }
        return Ok(month);
    }
    crate::formatter::parse_month(s)
        .map(|m| MonthRef::new(year, m))
        .ok_or_else(|| KalenderError::InvalidMonth(s.to_string()))
}

/// Parse the `--day` option, if given.
pub fn get_selected_day(args: &Args) -> Result<Option<NaiveDate>> {
    args.day
        .as_deref()
        .map(|s| parse_date(s).ok_or_else(|| KalenderError::InvalidDate(s.to_string())))
        .transpose()
}

/// Calculate the displayed month from positional arguments, `--day`, and the
/// navigation flags.
///
/// Argument patterns:
/// - no args: month of `--day`, else the current month
/// - 1 arg: year (4 digits) or month (number or name)
/// - 2 args: month year
pub fn get_display_month(args: &Args) -> Result<MonthRef> {
    let today = get_today_date();

    let base = match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => match get_selected_day(args)? {
            Some(day) => MonthRef::containing(day),
            None => MonthRef::containing(today),
        },
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                MonthRef::new(num, today.month())
            } else {
                parse_month_arg(val, today.year())?
            }
        }
        (Some(month), Some(year)) => parse_month_arg(month, parse_year(year)?)?,
        (None, Some(_)) => {
            return Err(KalenderError::InvalidArgument(
                "invalid argument combination".to_string(),
            ));
        }
    };

    let shown = base.shifted(i32::from(args.next) - i32::from(args.prev));
    if !(1..=9999).contains(&shown.year) {
        return Err(KalenderError::InvalidYear(shown.year.to_string()));
    }
    Ok(shown)
}

/// Pick the selected day: `--day` when it lies in the displayed month,
/// otherwise today or the first day of the month.
pub fn resolve_selection(args: &Args, cells: &[DayCell], today: NaiveDate) -> Result<NaiveDate> {
    if let Some(day) = get_selected_day(args)? {
        if cells.iter().any(|c| c.in_current_month && c.date == day) {
            return Ok(day);
        }
        warn!(%day, "selected day is outside the displayed month");
    }
    Ok(initial_selection(cells, today))
}
