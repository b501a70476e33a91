//! "Open now" evaluation over a provider's weekly hours.
//!
//! Every provider shares one reference timezone (see
//! [`crate::config::DEFAULT_BUSINESS_TIMEZONE`]); the evaluator receives it and
//! the current instant explicitly so it stays pure.
//!
//! Overnight ranges (close before open, e.g. 22:00-02:00) are not supported:
//! such a day only ever reports "Opens at" or "Closed".

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use super::models::business_hours::{BusinessHoursEntry, CLOSED_LABEL, DAYS_OF_WEEK};
use super::models::{format_time_range, time_of_day};

/// Result of the evaluator: a flag plus the badge text shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenStatus {
    pub is_open: bool,
    pub label: String,
}

impl OpenStatus {
    fn closed() -> Self {
        Self {
            is_open: false,
            label: CLOSED_LABEL.to_string(),
        }
    }
}

/// Evaluate `hours` at the instant `now`, read in `timezone`.
pub fn evaluate_open_status<Z: TimeZone>(
    hours: &[BusinessHoursEntry],
    now: &DateTime<Z>,
    timezone: Tz,
) -> OpenStatus {
    if hours.is_empty() {
        return OpenStatus {
            is_open: false,
            label: String::new(),
        };
    }

    let local = now.with_timezone(&timezone);
    let today = local.weekday().num_days_from_sunday() as u8;
    // Minute precision, matching the HH:MM labels.
    let current = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0).unwrap_or_default();

    let Some((open, close)) = hours
        .iter()
        .find(|h| h.day_of_week == today)
        .and_then(BusinessHoursEntry::window)
    else {
        return OpenStatus::closed();
    };

    if open <= current && current < close {
        return OpenStatus {
            is_open: true,
            label: format!("Open until {}", time_of_day::format(close)),
        };
    }

    if current < open {
        return OpenStatus {
            is_open: false,
            label: format!("Opens at {}", time_of_day::format(open)),
        };
    }

    OpenStatus::closed()
}

/// One line of the weekly hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub day_of_week: u8,
    pub label: &'static str,
    pub short: &'static str,
    pub hours: String,
    pub is_today: bool,
}

/// Seven rows, Sunday first. Days without an entry show as closed.
pub fn weekly_schedule<Z: TimeZone>(
    hours: &[BusinessHoursEntry],
    now: &DateTime<Z>,
    timezone: Tz,
) -> Vec<ScheduleRow> {
    let today = now.with_timezone(&timezone).weekday().num_days_from_sunday() as u8;

    DAYS_OF_WEEK
        .iter()
        .map(|day| {
            let text = match hours.iter().find(|h| h.day_of_week == day.value) {
                Some(entry) => format_time_range(entry.open_time, entry.close_time, entry.is_closed),
                None => CLOSED_LABEL.to_string(),
            };
            ScheduleRow {
                day_of_week: day.value,
                label: day.label,
                short: day.short,
                hours: text,
                is_today: day.value == today,
            }
        })
        .collect()
}
