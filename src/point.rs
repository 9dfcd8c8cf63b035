// src/point.rs
use geohash::Coord;
use serde::{Deserialize, Serialize};

use crate::errors::{ContextError, Result};

/// A validated latitude/longitude pair.
///
/// Construction goes through [`GeoPoint::new`] or [`GeoPoint::from_geohash`],
/// so a `GeoPoint` in hand is always inside coordinate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ContextError::Validation(format!(
                "illegal latitude value [{lat}], must be between -90 and 90"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ContextError::Validation(format!(
                "illegal longitude value [{lon}], must be between -180 and 180"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Decode a geohash string into the centroid of its cell.
    pub fn from_geohash(hash: &str) -> Result<Self> {
        let (Coord { x: lon, y: lat }, _, _) = geohash::decode(hash)
            .map_err(|e| ContextError::Parse(format!("invalid geohash [{hash}]: {e}")))?;
        GeoPoint::new(lat, lon)
    }

    /// The geohash cell containing this point at the given precision
    /// (string length).
    pub fn geohash(&self, precision: usize) -> Result<String> {
        geohash::encode(Coord { x: self.lon, y: self.lat }, precision)
            .map_err(|e| ContextError::Validation(format!("cannot encode geohash: {e}")))
    }

    /// The eight cells adjacent to this point's cell at the given precision,
    /// in order n, ne, e, se, s, sw, w, nw.
    pub fn neighbour_cells(&self, precision: usize) -> Result<Vec<String>> {
        let hash = self.geohash(precision)?;
        let cells = geohash::neighbors(&hash)
            .map_err(|e| ContextError::Validation(format!("cannot enumerate neighbours: {e}")))?;
        Ok(vec![
            cells.n, cells.ne, cells.e, cells.se, cells.s, cells.sw, cells.w, cells.nw,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_out_of_bounds_coordinates() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn encodes_known_cell() {
        let p = GeoPoint::new(57.64911, 10.40744).unwrap();
        assert_eq!(p.geohash(11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn decodes_to_cell_centroid() {
        let p = GeoPoint::from_geohash("u4pruydqqvj").unwrap();
        assert!((p.lat - 57.64911).abs() < 1e-4);
        assert!((p.lon - 10.40744).abs() < 1e-4);
        // The centroid re-encodes to the same cell.
        assert_eq!(p.geohash(11).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn rejects_bad_geohash() {
        assert!(GeoPoint::from_geohash("a!!").is_err());
    }

    #[test]
    fn lists_eight_neighbours() {
        let p = GeoPoint::new(57.64911, 10.40744).unwrap();
        let cells = p.neighbour_cells(5).unwrap();
        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|c| c.len() == 5));
    }
}
