//! Family month calendar with Swedish public holidays.
//!
//! Features:
//! - Fixed 42-cell Monday-first month grid
//! - Swedish public holidays, including Easter-based and Saturday-anchored ones
//! - Activities from a JSON export, sorted per day in Swedish order
//! - Month navigation and a selected-day panel

pub mod activity;
pub mod args;
pub mod calendar;
pub mod collate;
pub mod error;
pub mod formatter;
pub mod holidays;
pub mod logging;
pub mod types;
