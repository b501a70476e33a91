//! Schedules domain - weekly business hours and the "open now" evaluator

pub mod models;
pub mod open_status;

pub use models::{
    default_business_hours, format_time_range, BusinessHoursEntry, DayOfWeek, DAYS_OF_WEEK,
};
pub use open_status::{evaluate_open_status, weekly_schedule, OpenStatus, ScheduleRow};
