//! Reviews domain - client ratings and the per-provider summary

pub mod models;

pub use models::{validate_rating, RatingSummary, ReviewError, MAX_RATING, MIN_RATING};
