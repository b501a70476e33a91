use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

/// Accept a star rating from a review form.
pub fn validate_rating(rating: i64) -> Result<u8, ReviewError> {
    u8::try_from(rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(ReviewError::RatingOutOfRange(rating))
}

/// Aggregate rating of a provider.
///
/// `average_rating` is `None` exactly when `review_count` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingSummary {
    average_rating: Option<f64>,
    review_count: u32,
}

impl RatingSummary {
    /// Summarise individual star ratings; the average keeps one decimal.
    pub fn from_ratings(ratings: &[u8]) -> Self {
        if ratings.is_empty() {
            return Self::default();
        }
        let sum: u64 = ratings.iter().map(|r| u64::from(*r)).sum();
        let average = sum as f64 / ratings.len() as f64;
        Self {
            average_rating: Some((average * 10.0).round() / 10.0),
            review_count: u32::try_from(ratings.len()).unwrap_or(u32::MAX),
        }
    }

    /// Normalise a stored `(average, count)` pair.
    ///
    /// A missing or non-finite average with a positive count is treated as
    /// unreviewed; an average without reviews is dropped.
    pub fn from_stored(average_rating: Option<f64>, review_count: i64) -> Self {
        let review_count = u32::try_from(review_count.max(0)).unwrap_or(u32::MAX);
        match average_rating.filter(|avg| avg.is_finite()) {
            Some(avg) if review_count > 0 => Self {
                average_rating: Some(avg),
                review_count,
            },
            _ => Self::default(),
        }
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    pub fn review_count(&self) -> u32 {
        self.review_count
    }
}
