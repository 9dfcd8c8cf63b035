pub mod errors;
pub mod context;
pub mod location;  // geo point parsing collaborator
pub mod point;
pub mod serialize;
mod parser;

use serde_json::Value;

use errors::{ContextError, Result};

/// Parse a geo context fragment (object or plain geohash string) into a
/// validated [`GeoQueryContext`].
pub fn parse(fragment: &Value) -> Result<GeoQueryContext> {
    parser::parse(fragment)
}

/// Convenience: parse the fragment from JSON text.
pub fn parse_str(input: &str) -> Result<GeoQueryContext> {
    let fragment: Value = serde_json::from_str(input)
        .map_err(|e| ContextError::Parse(format!("invalid document: {e}")))?;
    parse(&fragment)
}

/// Serialize a built context back to its document form (fixed field order).
pub fn to_value(context: &GeoQueryContext) -> Value {
    serialize::to_value(context)
}

/// Re-export the most-used types for callers assembling suggester queries.
pub use context::{Builder, GeoQueryContext, DEFAULT_BOOST, DEFAULT_PRECISION};
pub use point::GeoPoint;
