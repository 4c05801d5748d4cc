//! fire-proximity - distance from a place to a wildfire perimeter
//!
//! Fire perimeters are delivered as rings in the North America Albers Equal Area projection
//! (ESRI:102008). This crate reprojects them to WGS84 latitude/longitude (EPSG:4326) and finds
//! the perimeter vertex with the shortest geodesic distance to a place.
//!
//! # Examples
//!
//! ```no_run
//! use fire_proximity::{shortest_distance_from_place_to_fire_perimeter, GeographicCoordinate};
//! use fire_proximity::formats::read_ring;
//!
//! let ring = read_ring("perimeter.csv")?;
//! let seattle = GeographicCoordinate::new(47.6062, -122.3321);
//!
//! match shortest_distance_from_place_to_fire_perimeter(seattle, &ring)? {
//!     Some(found) => println!(
//!         "{:.2} miles to ({}, {})",
//!         found.distance_miles, found.nearest.latitude, found.nearest.longitude
//!     ),
//!     None => println!("Perimeter has no vertices"),
//! }
//! # Ok::<(), fire_proximity::Error>(())
//! ```

pub mod error;
pub mod projection;
pub mod proximity;
pub mod formats;
pub mod logging;
pub mod api;

pub use error::{Error, Result};
pub use projection::{convert_ring_to_epsg4326, GeographicCoordinate, ProjectedCoordinate, Transformer};
pub use proximity::{
    geodesic_distance_meters, nearest_vertex, shortest_distance_from_place_to_fire_perimeter,
    FireProximity, MILES_PER_METER,
};
