//! Shortest distance from a place to a fire perimeter
//!
//! The perimeter is treated as a set of vertices, not as continuous edges: the reported
//! distance is to the closest vertex. Where vertices are sparse relative to how close the
//! place is, the true distance to the boundary edge can be smaller than the value returned.

use geo::{Distance, Geodesic};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::projection::{convert_ring_to_epsg4326, GeographicCoordinate, ProjectedCoordinate};

/// Metres to miles. Kept at this precision so results match the published figures.
pub const MILES_PER_METER: f64 = 0.00062137;

/// The closest perimeter vertex to a place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireProximity {
    /// Geodesic distance to the nearest vertex, in miles
    pub distance_miles: f64,
    /// The nearest vertex
    pub nearest: GeographicCoordinate,
}

impl FireProximity {
    /// Returns `(distance_miles, (latitude, longitude))`
    pub fn into_tuple(self) -> (f64, (f64, f64)) {
        (self.distance_miles, self.nearest.to_lat_lon())
    }
}

/// WGS84 geodesic distance between two geographic coordinates, in metres
pub fn geodesic_distance_meters(from: GeographicCoordinate, to: GeographicCoordinate) -> f64 {
    Geodesic.distance(from.to_point(), to.to_point())
}

/// Finds the vertex of an EPSG:4326 ring closest to `place`
///
/// Returns `None` for an empty ring, and also when `place` is NaN since no distance then
/// compares below infinity. On exact ties the earliest vertex wins.
pub fn nearest_vertex(place: GeographicCoordinate, ring: &[GeographicCoordinate]) -> Option<FireProximity> {
    let mut closest = None;
    let mut closest_distance = f64::INFINITY;

    for &vertex in ring {
        let distance_miles = geodesic_distance_meters(place, vertex) * MILES_PER_METER;

        if distance_miles < closest_distance {
            closest_distance = distance_miles;
            closest = Some(vertex);
        }
    }

    closest.map(|nearest| FireProximity {
        distance_miles: closest_distance,
        nearest,
    })
}

/// Shortest distance from `place` to a fire perimeter delivered in ESRI:102008
///
/// The ring is reprojected to EPSG:4326 first. `Ok(None)` means the ring had no vertices;
/// an `Err` means reprojection failed and no distance was computed.
pub fn shortest_distance_from_place_to_fire_perimeter(
    place: GeographicCoordinate,
    ring: &[ProjectedCoordinate],
) -> Result<Option<FireProximity>> {
    let ring = convert_ring_to_epsg4326(ring)?;
    let closest = nearest_vertex(place, &ring);

    if let Some(found) = &closest {
        debug!(
            vertices = ring.len(),
            distance_miles = found.distance_miles,
            "nearest perimeter vertex at ({}, {})",
            found.nearest.latitude,
            found.nearest.longitude
        );
    }

    Ok(closest)
}
