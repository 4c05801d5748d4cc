use geo::Point;
use serde::{Deserialize, Serialize};

/// A coordinate in the ESRI:102008 projected reference system (metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ProjectedCoordinate {
    /// Creates a new projected coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ProjectedCoordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for ProjectedCoordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A coordinate in the EPSG:4326 geographic reference system (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicCoordinate {
    /// Creates a new geographic coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate from a `(latitude, longitude)` pair
    pub fn from_lat_lon((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }

    /// Returns the coordinate as a `(latitude, longitude)` pair
    pub fn to_lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Returns a `geo::Point`, which is x = longitude, y = latitude
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
