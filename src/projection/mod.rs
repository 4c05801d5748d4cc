//! Reprojection of fire perimeters from ESRI:102008 to EPSG:4326

pub mod coordinate;
pub mod crs;
pub mod transformer;

pub use coordinate::{GeographicCoordinate, ProjectedCoordinate};
pub use transformer::{convert_ring_to_epsg4326, Transformer};
