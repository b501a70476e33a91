// Business domains
pub mod categories;
pub mod locations;
pub mod providers;
pub mod reviews;
pub mod schedules;
