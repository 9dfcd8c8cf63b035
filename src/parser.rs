// src/parser.rs
use serde_json::Value;
use tracing::trace;

use crate::context::{Builder, GeoQueryContext};
use crate::errors::{ContextError, Result};
use crate::location;
use crate::point::GeoPoint;

type FieldHandler = fn(Builder, &Value) -> Result<Builder>;

/// Recognized object fields, each mapped to exactly one builder setter.
/// Names are matched exactly; anything else is an error.
const FIELDS: &[(&str, FieldHandler)] = &[
    ("context", set_context),
    ("boost", set_boost),
    ("precision", set_precision),
    ("neighbours", set_neighbours),
    ("lat", set_lat),
    ("lon", set_lon),
];

/// Parse a context fragment: an object of recognized fields, or a plain
/// geohash string. Shape routing only; all validation happens in
/// [`Builder::build`].
pub fn parse(fragment: &Value) -> Result<GeoQueryContext> {
    let builder = match fragment {
        Value::Object(fields) => {
            let mut builder = Builder::new();
            for (name, value) in fields {
                let handler = FIELDS
                    .iter()
                    .find(|(field, _)| *field == name.as_str())
                    .map(|(_, handler)| handler)
                    .ok_or_else(|| {
                        ContextError::Parse(format!("unknown field [{name}] in geo context"))
                    })?;
                trace!(field = %name, "dispatching geo context field");
                builder = handler(builder, value)?;
            }
            builder
        }
        Value::String(hash) => Builder::new().location(GeoPoint::from_geohash(hash)?),
        _ => {
            return Err(ContextError::Parse(
                "geo context must be an object or string".into(),
            ))
        }
    };
    builder.build()
}

fn set_context(builder: Builder, value: &Value) -> Result<Builder> {
    Ok(builder.location(location::parse(value)?))
}

fn set_boost(builder: Builder, value: &Value) -> Result<Builder> {
    Ok(builder.boost(int_field(value, "boost")?))
}

fn set_precision(builder: Builder, value: &Value) -> Result<Builder> {
    Ok(builder.precision(int_field(value, "precision")?))
}

fn set_neighbours(builder: Builder, value: &Value) -> Result<Builder> {
    let items = value.as_array().ok_or_else(|| {
        ContextError::Parse("[neighbours] must be an array of integers".into())
    })?;
    let levels = items
        .iter()
        .map(|item| int_field(item, "neighbours"))
        .collect::<Result<Vec<_>>>()?;
    Ok(builder.neighbours(levels))
}

fn set_lat(builder: Builder, value: &Value) -> Result<Builder> {
    Ok(builder.lat(float_field(value, "lat")?))
}

fn set_lon(builder: Builder, value: &Value) -> Result<Builder> {
    Ok(builder.lon(float_field(value, "lon")?))
}

fn int_field(value: &Value, name: &str) -> Result<i32> {
    value
        .as_i64()
        .and_then(|i| i32::try_from(i).ok())
        .ok_or_else(|| ContextError::Parse(format!("[{name}] must be an integer")))
}

fn float_field(value: &Value, name: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| ContextError::Parse(format!("[{name}] must be a number")))
}
