use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::utils::GeoPoint;

pub const LOCATION_COOKIE_NAME: &str = "user-location";

/// One year.
pub const LOCATION_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Where the visitor wants to search: a device position or a chosen city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LocationData {
    Geo {
        lat: f64,
        lng: f64,
        #[serde(default)]
        label: String,
    },
    City {
        city: String,
    },
}

impl LocationData {
    /// Text for the "searching near ..." chip.
    pub fn label(&self) -> &str {
        match self {
            LocationData::Geo { label, .. } => label,
            LocationData::City { city } => city,
        }
    }

    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            LocationData::Geo { lat, lng, .. } => GeoPoint::new(*lat, *lng),
            LocationData::City { .. } => None,
        }
    }
}

/// Parse the cookie value.
///
/// Current cookies hold base64-encoded JSON; older ones hold percent-encoded
/// JSON. Anything else, including JSON that fails validation, yields `None`.
pub fn parse_location_cookie(value: Option<&str>) -> Option<LocationData> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let from_base64 = STANDARD
        .decode(value)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .and_then(|json| decode_location(&json));
    if from_base64.is_some() {
        return from_base64;
    }

    let legacy = urlencoding::decode(value)
        .ok()
        .and_then(|json| decode_location(&json));
    if legacy.is_none() {
        debug!(len = value.len(), "Ignoring unreadable location cookie");
    }
    legacy
}

/// Serialize for cookie storage (base64 keeps UTF-8 city names cookie-safe).
pub fn serialize_location_cookie(data: &LocationData) -> serde_json::Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(STANDARD.encode(json))
}

fn decode_location(json: &str) -> Option<LocationData> {
    let data: LocationData = serde_json::from_str(json).ok()?;
    match &data {
        LocationData::Geo { lat, lng, .. } if !(lat.is_finite() && lng.is_finite()) => None,
        _ => Some(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_roundtrip_keeps_accents() {
        let data = LocationData::City {
            city: "São José dos Campos".to_string(),
        };
        let cookie = serialize_location_cookie(&data).unwrap();
        assert!(cookie.is_ascii());
        assert_eq!(parse_location_cookie(Some(&cookie)), Some(data));
    }

    #[test]
    fn reads_legacy_percent_encoded_cookie() {
        let legacy = urlencoding::encode(r#"{"type":"geo","lat":-23.55,"lng":-46.63,"label":"Sé"}"#)
            .into_owned();
        let parsed = parse_location_cookie(Some(&legacy)).unwrap();
        assert_eq!(parsed.label(), "Sé");
        assert!(parsed.point().is_some());
    }

    #[test]
    fn geo_label_is_optional() {
        let cookie = STANDARD.encode(r#"{"type":"geo","lat":1.5,"lng":2.5}"#);
        assert_eq!(
            parse_location_cookie(Some(&cookie)),
            Some(LocationData::Geo { lat: 1.5, lng: 2.5, label: String::new() })
        );
    }

    #[test]
    fn rejects_invalid_shapes() {
        assert_eq!(parse_location_cookie(None), None);
        assert_eq!(parse_location_cookie(Some("")), None);
        assert_eq!(parse_location_cookie(Some("garbage")), None);

        let wrong_type = STANDARD.encode(r#"{"type":"geo","lat":"x","lng":2}"#);
        assert_eq!(parse_location_cookie(Some(&wrong_type)), None);

        let missing_city = STANDARD.encode(r#"{"type":"city"}"#);
        assert_eq!(parse_location_cookie(Some(&missing_city)), None);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn unreadable_cookie_is_not_logged_verbatim() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let parsed = tracing::subscriber::with_default(subscriber, || {
            parse_location_cookie(Some(r#"{"type":"geo","lat":-23.5512,"lng":"west"}"#))
        });

        assert_eq!(parsed, None);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Ignoring unreadable location cookie"));
        assert!(!output.contains("-23.5512"));
    }
}
