pub mod business_hours;
pub mod time_of_day;

pub use business_hours::{
    default_business_hours, format_time_range, BusinessHoursEntry, DayOfWeek, DAYS_OF_WEEK,
};
