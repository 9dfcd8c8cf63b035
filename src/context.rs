// src/context.rs
use crate::errors::{ContextError, Result};
use crate::point::GeoPoint;

/// Query-time boost applied when the context matches.
pub const DEFAULT_BOOST: i32 = 1;

/// Sentinel meaning "use the index-time precision"; resolved by the
/// suggester-side matcher, never inside this crate.
pub const DEFAULT_PRECISION: i32 = -1;

/// The immutable geo query context handed to suggestion matching.
///
/// Built exclusively through [`Builder`], so the location is always present
/// and within coordinate bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoQueryContext {
    location: GeoPoint,
    boost: i32,
    precision: i32,
    neighbours: Vec<i32>,
}

impl GeoQueryContext {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The geo point of the context.
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// The query-time boost of the context.
    pub fn boost(&self) -> i32 {
        self.boost
    }

    /// The precision (geohash length) for matching, or the
    /// [`DEFAULT_PRECISION`] sentinel.
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// The precision levels at which neighbouring cells are also considered,
    /// in the order they were supplied.
    pub fn neighbours(&self) -> &[i32] {
        &self.neighbours
    }
}

/// Mutable accumulator for context fields, consumed once by [`Builder::build`].
#[derive(Debug)]
pub struct Builder {
    location: Option<GeoPoint>,
    // Raw components start at NaN, never a plausible coordinate.
    lat: f64,
    lon: f64,
    boost: i32,
    precision: i32,
    neighbours: Vec<i32>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            location: None,
            lat: f64::NAN,
            lon: f64::NAN,
            boost: DEFAULT_BOOST,
            precision: DEFAULT_PRECISION,
            neighbours: Vec::new(),
        }
    }

    /// Sets the geo point of the context. Required unless both raw
    /// components are supplied.
    pub fn location(mut self, point: GeoPoint) -> Self {
        self.location = Some(point);
        self
    }

    /// Sets the raw latitude component, combined with [`Builder::lon`] at
    /// build time when no location was set directly.
    pub fn lat(mut self, lat: f64) -> Self {
        self.lat = lat;
        self
    }

    /// Sets the raw longitude component.
    pub fn lon(mut self, lon: f64) -> Self {
        self.lon = lon;
        self
    }

    /// Sets the query-time boost. Defaults to 1. No bounds check here;
    /// downstream ranking may reject nonsensical values.
    pub fn boost(mut self, boost: i32) -> Self {
        self.boost = boost;
        self
    }

    /// Sets the precision level for computing the geohash from the context
    /// geo point. Defaults to the index-time precision level.
    pub fn precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the precision levels at which cell neighbours are considered.
    /// Order and duplicates are preserved as given.
    pub fn neighbours(mut self, neighbours: Vec<i32>) -> Self {
        self.neighbours = neighbours;
        self
    }

    /// Terminal operation: the single validation choke point regardless of
    /// which input shape drove the builder.
    pub fn build(self) -> Result<GeoQueryContext> {
        let location = match self.location {
            Some(point) => point,
            None if !self.lat.is_nan() && !self.lon.is_nan() => {
                GeoPoint::new(self.lat, self.lon)?
            }
            None => {
                return Err(ContextError::Validation(
                    "no geohash or geo point provided".into(),
                ))
            }
        };
        Ok(GeoQueryContext {
            location,
            boost: self.boost,
            precision: self.precision,
            neighbours: self.neighbours,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
