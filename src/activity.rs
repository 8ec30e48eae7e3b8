//! Activity records attached to calendar days.
//!
//! Activities come from a JSON export of the organizer's activity table.
//! Malformed records are dropped with a warning instead of failing the whole
//! load, so one bad row never hides a month.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::collate::compare_sv;
use crate::error::{KalenderError, Result};
use crate::types::{ISO_DATE_FORMAT, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, MonthRef, TIME_FORMAT};

/// An activity record as exported, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

/// A validated activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub all_day: bool,
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = KalenderError;

    fn try_from(record: ActivityRecord) -> Result<Self> {
        let reject = |reason: String| KalenderError::InvalidActivity {
            id: record.id.clone(),
            reason,
        };

        let title = record.title.trim();
        if title.is_empty() {
            return Err(reject("title is empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(reject(format!("title longer than {MAX_TITLE_LEN}")));
        }
        if let Some(desc) = &record.description
            && desc.chars().count() > MAX_DESCRIPTION_LEN
        {
            return Err(reject(format!("description longer than {MAX_DESCRIPTION_LEN}")));
        }

        let date = parse_date(&record.date)
            .ok_or_else(|| reject(format!("date {:?} is not YYYY-MM-DD", record.date)))?;
        let start_time = parse_optional_time(record.start_time.as_deref())
            .map_err(|t| reject(format!("start time {t:?} is not HH:MM")))?;
        let end_time = parse_optional_time(record.end_time.as_deref())
            .map_err(|t| reject(format!("end time {t:?} is not HH:MM")))?;

        Ok(Activity {
            id: record.id.clone(),
            title: title.to_string(),
            description: record.description.clone().filter(|d| !d.is_empty()),
            date,
            start_time,
            end_time,
            all_day: record.all_day,
        })
    }
}

impl Activity {
    /// Time used for same-day ordering. All-day and untimed activities have
    /// none and sort before every timed activity.
    pub fn sort_time(&self) -> Option<NaiveTime> {
        if self.all_day { None } else { self.start_time }
    }

    /// Time column text: `Hela dagen`, `HH:MM–HH:MM`, or `—` with no start.
    pub fn time_label(&self) -> String {
        if self.all_day {
            return "Hela dagen".to_string();
        }
        let start = self
            .start_time
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_else(|| "—".to_string());
        match self.end_time {
            Some(end) => format!("{}–{}", start, end.format(TIME_FORMAT)),
            None => start,
        }
    }
}

/// Same-day order: by time of day, untimed first, then by title in Swedish
/// collation.
pub fn compare_same_day(a: &Activity, b: &Activity) -> Ordering {
    a.sort_time()
        .cmp(&b.sort_time())
        .then_with(|| compare_sv(&a.title, &b.title))
}

pub fn sort_same_day(activities: &mut [Activity]) {
    activities.sort_by(compare_same_day);
}

/// Group activities by date, each day's list in same-day order.
pub fn group_by_date<I>(activities: I) -> BTreeMap<NaiveDate, Vec<Activity>>
where
    I: IntoIterator<Item = Activity>,
{
    let mut map: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();
    for activity in activities {
        map.entry(activity.date).or_default().push(activity);
    }
    for list in map.values_mut() {
        sort_same_day(list);
    }
    map
}

/// Activities in `[first of month, first of next month)`.
pub fn activities_for_month(activities: &[Activity], month: MonthRef) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| month.contains(a.date))
        .cloned()
        .collect()
}

/// Parse a JSON array of activity records, dropping invalid ones.
pub fn parse_activities(json: &str) -> serde_json::Result<Vec<Activity>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = raw.len();

    let activities: Vec<Activity> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let record = match serde_json::from_value::<ActivityRecord>(value) {
                Ok(r) => r,
                Err(e) => {
                    warn!(index = idx, error = %e, "skipping unreadable activity record");
                    return None;
                }
            };
            match Activity::try_from(record) {
                Ok(a) => Some(a),
                Err(e) => {
                    warn!(index = idx, error = %e, "skipping invalid activity");
                    None
                }
            }
        })
        .collect();

    debug!(total, kept = activities.len(), "parsed activities");
    Ok(activities)
}

/// Load activities from a JSON export file.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>> {
    let text = std::fs::read_to_string(path).map_err(|source| KalenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_activities(&text).map_err(|source| KalenderError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok()
}

/// Parse an optional strict `HH:MM` time; empty strings count as absent.
/// On failure the offending text is returned.
fn parse_optional_time(s: Option<&str>) -> std::result::Result<Option<NaiveTime>, String> {
    match s {
        None | Some("") => Ok(None),
        Some(t) if t.len() == 5 => NaiveTime::parse_from_str(t, TIME_FORMAT)
            .map(Some)
            .map_err(|_| t.to_string()),
        Some(t) => Err(t.to_string()),
    }
}
