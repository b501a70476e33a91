pub mod location_preference;

pub use location_preference::{
    parse_location_cookie, serialize_location_cookie, LocationData, LOCATION_COOKIE_MAX_AGE_SECS,
    LOCATION_COOKIE_NAME,
};
