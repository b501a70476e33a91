pub mod rating;

pub use rating::{validate_rating, RatingSummary, ReviewError, MAX_RATING, MIN_RATING};
