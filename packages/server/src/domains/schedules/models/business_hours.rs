use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::time_of_day;

/// Opening hours of a provider for one day of the week.
///
/// `day_of_week` follows the JavaScript/Postgres convention: 0 = Sunday ... 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursEntry {
    pub day_of_week: u8,
    #[serde(default, with = "time_of_day")]
    pub open_time: Option<NaiveTime>,
    #[serde(default, with = "time_of_day")]
    pub close_time: Option<NaiveTime>,
    #[serde(default)]
    pub is_closed: bool,
}

impl BusinessHoursEntry {
    pub fn open(day_of_week: u8, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            day_of_week,
            open_time: Some(open_time),
            close_time: Some(close_time),
            is_closed: false,
        }
    }

    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            open_time: None,
            close_time: None,
            is_closed: true,
        }
    }

    /// Opening window, when the day is open and both times are set.
    pub fn window(&self) -> Option<(NaiveTime, NaiveTime)> {
        if self.is_closed {
            return None;
        }
        Some((self.open_time?, self.close_time?))
    }
}

/// Display metadata for a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOfWeek {
    pub value: u8,
    pub label: &'static str,
    pub short: &'static str,
}

pub const DAYS_OF_WEEK: [DayOfWeek; 7] = [
    DayOfWeek { value: 0, label: "Sunday", short: "Sun" },
    DayOfWeek { value: 1, label: "Monday", short: "Mon" },
    DayOfWeek { value: 2, label: "Tuesday", short: "Tue" },
    DayOfWeek { value: 3, label: "Wednesday", short: "Wed" },
    DayOfWeek { value: 4, label: "Thursday", short: "Thu" },
    DayOfWeek { value: 5, label: "Friday", short: "Fri" },
    DayOfWeek { value: 6, label: "Saturday", short: "Sat" },
];

pub const CLOSED_LABEL: &str = "Closed";

/// `"08:00 - 18:00"`, or `"Closed"` when the day is closed or incomplete.
pub fn format_time_range(
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
    is_closed: bool,
) -> String {
    match (is_closed, open_time, close_time) {
        (false, Some(open), Some(close)) => {
            format!("{} - {}", time_of_day::format(open), time_of_day::format(close))
        }
        _ => CLOSED_LABEL.to_string(),
    }
}

/// Hours given to a new provider: weekdays 08:00-18:00, weekends closed.
pub fn default_business_hours() -> Vec<BusinessHoursEntry> {
    let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default();
    let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();

    DAYS_OF_WEEK
        .iter()
        .map(|day| match day.value {
            1..=5 => BusinessHoursEntry::open(day.value, open, close),
            _ => BusinessHoursEntry::closed(day.value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn formats_ranges() {
        assert_eq!(format_time_range(Some(t(8, 0)), Some(t(18, 30)), false), "08:00 - 18:30");
        assert_eq!(format_time_range(Some(t(8, 0)), Some(t(18, 0)), true), "Closed");
        assert_eq!(format_time_range(None, Some(t(18, 0)), false), "Closed");
    }

    #[test]
    fn default_hours_cover_the_week() {
        let hours = default_business_hours();
        assert_eq!(hours.len(), 7);
        assert!(hours[0].is_closed);
        assert!(hours[6].is_closed);
        assert_eq!(hours[3].window(), Some((t(8, 0), t(18, 0))));
    }

    #[test]
    fn deserializes_backend_and_form_times() {
        let from_db: BusinessHoursEntry = serde_json::from_str(
            r#"{"day_of_week":1,"open_time":"08:00:00","close_time":"17:30:00","is_closed":false}"#,
        )
        .unwrap();
        let from_form: BusinessHoursEntry = serde_json::from_str(
            r#"{"day_of_week":1,"open_time":"08:00","close_time":"17:30"}"#,
        )
        .unwrap();
        assert_eq!(from_db, from_form);

        let closed: BusinessHoursEntry =
            serde_json::from_str(r#"{"day_of_week":0,"open_time":null,"close_time":null,"is_closed":true}"#)
                .unwrap();
        assert_eq!(closed.window(), None);
    }

    #[test]
    fn serializes_minutes_only() {
        let json = serde_json::to_value(BusinessHoursEntry::open(2, t(9, 0), t(17, 0))).unwrap();
        assert_eq!(json["open_time"], "09:00");
        assert_eq!(json["close_time"], "17:00");
    }

    #[test]
    fn rejects_malformed_times() {
        let result: Result<BusinessHoursEntry, _> =
            serde_json::from_str(r#"{"day_of_week":1,"open_time":"8 o'clock"}"#);
        assert!(result.is_err());
    }
}
