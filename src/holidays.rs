//! Swedish public holidays ("röda dagar").
//!
//! Fixed-date holidays are matched on month and day. Movable holidays are
//! anchored either to Easter Sunday (Meeus/Jones/Butcher Gregorian
//! algorithm) or to the first Saturday of a seven-day window.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A Swedish public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    NewYearsDay,
    Epiphany,
    GoodFriday,
    EasterSunday,
    EasterMonday,
    MayDay,
    AscensionDay,
    Pentecost,
    NationalDay,
    MidsummerDay,
    AllSaintsDay,
    ChristmasDay,
    BoxingDay,
}

/// Holidays that fall on the same month and day every year.
const FIXED_HOLIDAYS: [(u32, u32, Holiday); 6] = [
    (1, 1, Holiday::NewYearsDay),
    (1, 6, Holiday::Epiphany),
    (5, 1, Holiday::MayDay),
    (6, 6, Holiday::NationalDay),
    (12, 25, Holiday::ChristmasDay),
    (12, 26, Holiday::BoxingDay),
];

/// Holidays defined as a day offset from Easter Sunday.
const EASTER_OFFSETS: [(i64, Holiday); 5] = [
    (-2, Holiday::GoodFriday),
    (0, Holiday::EasterSunday),
    (1, Holiday::EasterMonday),
    (39, Holiday::AscensionDay),
    (49, Holiday::Pentecost),
];

pub const ALL_HOLIDAYS: [Holiday; 13] = [
    Holiday::NewYearsDay,
    Holiday::Epiphany,
    Holiday::GoodFriday,
    Holiday::EasterSunday,
    Holiday::EasterMonday,
    Holiday::MayDay,
    Holiday::AscensionDay,
    Holiday::Pentecost,
    Holiday::NationalDay,
    Holiday::MidsummerDay,
    Holiday::AllSaintsDay,
    Holiday::ChristmasDay,
    Holiday::BoxingDay,
];

impl Holiday {
    /// Swedish display name.
    pub fn name(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Nyårsdagen",
            Holiday::Epiphany => "Trettondagen",
            Holiday::GoodFriday => "Långfredagen",
            Holiday::EasterSunday => "Påskdagen",
            Holiday::EasterMonday => "Annandag påsk",
            Holiday::MayDay => "Första maj",
            Holiday::AscensionDay => "Kristi himmelsfärdsdag",
            Holiday::Pentecost => "Pingstdagen",
            Holiday::NationalDay => "Sveriges nationaldag",
            Holiday::MidsummerDay => "Midsommardagen",
            Holiday::AllSaintsDay => "Alla helgons dag",
            Holiday::ChristmasDay => "Juldagen",
            Holiday::BoxingDay => "Annandag jul",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::Epiphany => "Epiphany",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::MayDay => "May Day",
            Holiday::AscensionDay => "Ascension Day",
            Holiday::Pentecost => "Pentecost",
            Holiday::NationalDay => "National Day of Sweden",
            Holiday::MidsummerDay => "Midsummer Day",
            Holiday::AllSaintsDay => "All Saints' Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::BoxingDay => "Boxing Day",
        }
    }

    /// The date this holiday falls on in `year`.
    pub fn date_in(self, year: i32) -> NaiveDate {
        if let Some(&(month, day, _)) = FIXED_HOLIDAYS.iter().find(|(_, _, h)| *h == self) {
            return ymd(year, month, day);
        }
        if let Some(&(offset, _)) = EASTER_OFFSETS.iter().find(|(_, h)| *h == self) {
            return easter_sunday(year) + Duration::days(offset);
        }
        match self {
            Holiday::MidsummerDay => midsummer_day(year),
            _ => all_saints_day(year),
        }
    }
}

/// Classify a date as a public holiday.
///
/// Fixed dates are checked first, so when Ascension Day lands on 1 May the
/// day is reported as May Day.
pub fn holiday(date: NaiveDate) -> Option<Holiday> {
    let (month, day) = (date.month(), date.day());
    if let Some(&(_, _, h)) = FIXED_HOLIDAYS
        .iter()
        .find(|(m, d, _)| *m == month && *d == day)
    {
        return Some(h);
    }

    let year = date.year();
    let from_easter = date.signed_duration_since(easter_sunday(year)).num_days();
    if let Some(&(_, h)) = EASTER_OFFSETS.iter().find(|(o, _)| *o == from_easter) {
        return Some(h);
    }

    if date == midsummer_day(year) {
        return Some(Holiday::MidsummerDay);
    }
    if date == all_saints_day(year) {
        return Some(Holiday::AllSaintsDay);
    }
    None
}

/// Swedish name of the holiday on `date`, if any.
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    holiday(date).map(Holiday::name)
}

/// Every holiday of a year, in date order.
///
/// A movable holiday that lands on a fixed one (Ascension Day on 1 May,
/// Pentecost on 6 June) is left out, so each listed date names the same
/// holiday [`holiday`] reports for it.
pub fn holidays_in_year(year: i32) -> Vec<(NaiveDate, Holiday)> {
    let mut all: Vec<_> = ALL_HOLIDAYS
        .iter()
        .map(|&h| (h.date_in(year), h))
        .filter(|&(date, h)| holiday(date) == Some(h))
        .collect();
    all.sort_by_key(|(date, _)| *date);
    all
}

/// Easter Sunday in the proleptic Gregorian calendar (Meeus/Jones/Butcher).
///
/// Every division and remainder floors, so years before 1 CE work too.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month = n / 31; // 3 = March, 4 = April
    let day = n % 31 + 1;
    ymd(year, month as u32, day as u32)
}

/// Midsummer Day: the Saturday between 20 and 26 June.
pub fn midsummer_day(year: i32) -> NaiveDate {
    first_saturday_from(ymd(year, 6, 20))
}

/// All Saints' Day: the Saturday between 31 October and 6 November.
pub fn all_saints_day(year: i32) -> NaiveDate {
    first_saturday_from(ymd(year, 10, 31))
}

fn first_saturday_from(start: NaiveDate) -> NaiveDate {
    let sat = Weekday::Sat.num_days_from_monday();
    let offset = (sat + 7 - start.weekday().num_days_from_monday()) % 7;
    start + Duration::days(offset as i64)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("holiday rules only build valid dates")
}
