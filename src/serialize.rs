// src/serialize.rs
use serde_json::{json, Map, Value};

use crate::context::GeoQueryContext;

/// Serialize a built context back to its document form.
///
/// The location always comes out as the two-field `{"lat","lon"}` object, no
/// matter which input shape produced it. Field order is fixed — context,
/// boost, neighbours, precision — and consumers diff the textual form, so
/// order is part of the contract.
pub fn to_value(context: &GeoQueryContext) -> Value {
    let point = context.location();
    let mut out = Map::new();
    out.insert(
        "context".into(),
        json!({ "lat": point.lat, "lon": point.lon }),
    );
    out.insert("boost".into(), json!(context.boost()));
    out.insert("neighbours".into(), json!(context.neighbours()));
    out.insert("precision".into(), json!(context.precision()));
    Value::Object(out)
}
