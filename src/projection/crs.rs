//! Coordinate reference system identifiers.
//!
//! Only one pair is supported: fire perimeters arrive in North America Albers Equal Area
//! and are reprojected to WGS84 latitude/longitude.

/// North America Albers Equal Area Conic, the CRS fire perimeters are delivered in
pub const SOURCE_CRS: &str = "ESRI:102008";

/// WGS84 geographic latitude/longitude
pub const TARGET_CRS: &str = "EPSG:4326";
