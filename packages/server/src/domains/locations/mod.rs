//! Locations domain - the visitor's saved search location

pub mod models;

pub use models::{
    parse_location_cookie, serialize_location_cookie, LocationData, LOCATION_COOKIE_MAX_AGE_SECS,
    LOCATION_COOKIE_NAME,
};
