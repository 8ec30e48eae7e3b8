//! Month view rendering with Swedish names and color support.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::activity::Activity;
use crate::calendar::{build_month_grid, is_red_day};
use crate::holidays::{holiday_name, holidays_in_year};
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    COLOR_UNDERLINE, CalContext, DAYS_PER_WEEK, DayCell, MONTH_WIDTH, MonthRef, format_iso_date,
};

/// Activities keyed by day, as produced by [`crate::activity::group_by_date`].
pub type ActivitiesByDate = BTreeMap<NaiveDate, Vec<Activity>>;

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Mars",
    "April",
    "Maj",
    "Juni",
    "Juli",
    "Augusti",
    "September",
    "Oktober",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag", "Söndag",
];

const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Må", "Ti", "On", "To", "Fr", "Lö", "Sö"];

const NO_ACTIVITIES: &str = "Inga aktiviteter denna dag ännu.";

/// Swedish month name, capitalized.
pub fn get_month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Swedish weekday name, capitalized.
pub fn get_weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Two-letter Swedish weekday abbreviation.
pub fn get_weekday_short_name(weekday: Weekday) -> &'static str {
    WEEKDAY_SHORT_NAMES[weekday.num_days_from_monday() as usize]
}

/// Parse month from string (numeric 1-12 or name in Swedish/English).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    const MONTH_ALIASES: &[(&str, u32)] = &[
        // Swedish full names
        ("januari", 1),
        ("februari", 2),
        ("mars", 3),
        ("april", 4),
        ("maj", 5),
        ("juni", 6),
        ("juli", 7),
        ("augusti", 8),
        ("september", 9),
        ("oktober", 10),
        ("november", 11),
        ("december", 12),
        // English full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("october", 10),
        // Short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("okt", 10),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    MONTH_ALIASES
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Format month header with optional year and color.
pub fn format_month_header(
    year: i32,
    month: u32,
    width: usize,
    show_year: bool,
    color: bool,
) -> String {
    let month_name = get_month_name(month);
    let header = if show_year {
        format!("{} {}", month_name, year)
    } else {
        month_name.to_string()
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width of a line, ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (false, c) => plain.push(c),
            (true, 'm') => in_escape = false,
            (true, _) => {}
        }
    }
    plain.width()
}

/// Format the Monday-first weekday header row.
pub fn format_weekday_headers(ctx: &CalContext) -> String {
    let names: Vec<&str> = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .iter()
    .map(|&w| get_weekday_short_name(w))
    .collect();
    let row = names.join(" ");

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format day cell with color highlighting.
///
/// Color priority: overflow day > today > red day. Days with activities are
/// additionally underlined. Without color, overflow days are left blank.
fn format_day(ctx: &CalContext, cell: &DayCell, has_activities: bool, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.date.day());

    let formatted = if !ctx.color {
        if cell.in_current_month {
            day_str
        } else {
            "  ".to_string()
        }
    } else {
        let mut codes = String::new();
        if !cell.in_current_month {
            codes.push_str(COLOR_DIM);
        } else if cell.date == ctx.today {
            codes.push_str(COLOR_REVERSE);
        } else if is_red_day(cell) {
            codes.push_str(COLOR_RED);
        }
        if has_activities && cell.in_current_month {
            codes.push_str(COLOR_UNDERLINE);
        }
        if codes.is_empty() {
            day_str
        } else {
            format!("{}{}{}", codes, day_str, COLOR_RESET)
        }
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format month as grid of lines: header, weekday row and six week rows.
pub fn format_month_grid(
    ctx: &CalContext,
    month: MonthRef,
    cells: &[DayCell],
    activities: &ActivitiesByDate,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + cells.len() / DAYS_PER_WEEK);

    lines.push(format_month_header(
        month.year,
        month.month,
        MONTH_WIDTH,
        ctx.show_year_in_header,
        ctx.color,
    ));
    lines.push(format_weekday_headers(ctx));

    for week in cells.chunks(DAYS_PER_WEEK) {
        let mut line = String::new();
        for (i, cell) in week.iter().enumerate() {
            let has_activities = activities.get(&cell.date).is_some_and(|l| !l.is_empty());
            line.push_str(&format_day(
                ctx,
                cell,
                has_activities,
                i + 1 == DAYS_PER_WEEK,
            ));
        }
        lines.push(line);
    }

    lines
}

/// Print single month.
pub fn print_month(ctx: &CalContext, month: MonthRef, activities: &ActivitiesByDate) {
    let cells = build_month_grid(month.year, month.month);
    for line in format_month_grid(ctx, month, &cells, activities) {
        println!("{}", line);
    }
}

/// Lay out month grids side by side, `per_row` months per row.
pub fn format_months_side_by_side(
    ctx: &CalContext,
    grids: &[Vec<String>],
    per_row: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    for (chunk_idx, chunk) in grids.chunks(per_row.max(1)).enumerate() {
        if chunk_idx > 0 {
            out.push(String::new());
        }
        let max_height = chunk.iter().map(|g| g.len()).max().unwrap_or(0);
        for row in 0..max_height {
            let mut line = String::new();
            for (i, grid) in chunk.iter().enumerate() {
                let text = grid.get(row).map(String::as_str).unwrap_or("");
                line.push_str(text);
                if i < chunk.len() - 1 {
                    let padding = MONTH_WIDTH.saturating_sub(visible_width(text));
                    line.push_str(&" ".repeat(padding + ctx.gutter_width));
                }
            }
            out.push(line);
        }
    }
    out
}

/// Print three months side by side (prev, current, next).
pub fn print_three_months(ctx: &CalContext, month: MonthRef, activities: &ActivitiesByDate) {
    let grids: Vec<Vec<String>> = [month.prev(), month, month.next()]
        .iter()
        .map(|&m| {
            let cells = build_month_grid(m.year, m.month);
            format_month_grid(ctx, m, &cells, activities)
        })
        .collect();

    for line in format_months_side_by_side(ctx, &grids, ctx.months_per_row() as usize) {
        println!("{}", line);
    }
}

/// Format the selected-day panel: weekday and date, holiday name, then the
/// day's activities in the order given.
pub fn format_day_details(
    ctx: &CalContext,
    date: NaiveDate,
    activities: &[Activity],
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        get_weekday_name(date.weekday()),
        format_iso_date(date)
    ));

    if let Some(name) = holiday_name(date) {
        if ctx.color {
            lines.push(format!("{}{}{}", COLOR_RED, name, COLOR_RESET));
        } else {
            lines.push(name.to_string());
        }
    }

    if activities.is_empty() {
        lines.push(NO_ACTIVITIES.to_string());
        return lines;
    }

    let time_width = activities
        .iter()
        .map(|a| a.time_label().width())
        .max()
        .unwrap_or(0);
    for activity in activities {
        let label = activity.time_label();
        let padding = time_width - label.width();
        lines.push(format!(
            "  {}{}  {}",
            label,
            " ".repeat(padding),
            activity.title
        ));
        if let Some(desc) = &activity.description {
            lines.push(format!("  {}  {}", " ".repeat(time_width), desc));
        }
    }
    lines
}

/// Print the selected-day panel.
pub fn print_day_details(ctx: &CalContext, date: NaiveDate, activities: &ActivitiesByDate) {
    let day = activities.get(&date).map(Vec::as_slice).unwrap_or(&[]);
    for line in format_day_details(ctx, date, day) {
        println!("{}", line);
    }
}

/// Format every public holiday of a year, one per line.
pub fn format_holiday_list(year: i32) -> Vec<String> {
    holidays_in_year(year)
        .into_iter()
        .map(|(date, h)| {
            format!(
                "{}  {}  {}",
                format_iso_date(date),
                get_weekday_short_name(date.weekday()),
                h.name()
            )
        })
        .collect()
}

pub fn print_holiday_list(year: i32) {
    for line in format_holiday_list(year) {
        println!("{}", line);
    }
}
