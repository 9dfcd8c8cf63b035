// src/location.rs
use serde_json::Value;

use crate::errors::{ContextError, Result};
use crate::point::GeoPoint;

/// Parse a location fragment into a [`GeoPoint`].
///
/// Accepted shapes:
///   - object: `{"lat": <num>, "lon": <num>}` (both required, nothing else)
///   - string: `"lat,lon"` or a bare geohash
pub fn parse(fragment: &Value) -> Result<GeoPoint> {
    match fragment {
        Value::Object(fields) => {
            let mut lat = None;
            let mut lon = None;
            for (name, value) in fields {
                let slot = match name.as_str() {
                    "lat" => &mut lat,
                    "lon" => &mut lon,
                    _ => {
                        return Err(ContextError::Parse(format!(
                            "unknown field [{name}] in geo point object"
                        )))
                    }
                };
                *slot = Some(value.as_f64().ok_or_else(|| {
                    ContextError::Parse(format!("[{name}] must be a number"))
                })?);
            }
            match (lat, lon) {
                (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
                _ => Err(ContextError::Parse(
                    "geo point object requires both [lat] and [lon]".into(),
                )),
            }
        }
        Value::String(text) => from_string(text),
        _ => Err(ContextError::Parse(
            "geo point must be an object or string".into(),
        )),
    }
}

/// "lat,lon" if a comma is present, geohash otherwise.
fn from_string(text: &str) -> Result<GeoPoint> {
    match text.split_once(',') {
        Some((lat, lon)) => {
            let lat: f64 = lat.trim().parse().map_err(|_| {
                ContextError::Parse(format!("invalid latitude [{}]", lat.trim()))
            })?;
            let lon: f64 = lon.trim().parse().map_err(|_| {
                ContextError::Parse(format!("invalid longitude [{}]", lon.trim()))
            })?;
            GeoPoint::new(lat, lon)
        }
        None => GeoPoint::from_geohash(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_object_form() {
        let p = parse(&json!({"lat": 40.0, "lon": -70.0})).unwrap();
        assert_eq!(p, GeoPoint::new(40.0, -70.0).unwrap());
    }

    #[test]
    fn parses_comma_string_form() {
        let p = parse(&json!("40.0, -70.0")).unwrap();
        assert_eq!(p, GeoPoint::new(40.0, -70.0).unwrap());
    }

    #[test]
    fn parses_geohash_string_form() {
        let p = parse(&json!("u4pruydqqvj")).unwrap();
        assert!((p.lat - 57.64911).abs() < 1e-4);
    }

    #[test]
    fn rejects_unknown_object_field() {
        assert!(parse(&json!({"lat": 1.0, "lon": 2.0, "alt": 3.0})).is_err());
    }

    #[test]
    fn rejects_partial_object() {
        assert!(parse(&json!({"lat": 1.0})).is_err());
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse(&json!([40.0, -70.0])).is_err());
        assert!(parse(&json!(12)).is_err());
    }
}
