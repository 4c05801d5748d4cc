use crate::error::{Error, Result};
use crate::projection::coordinate::{GeographicCoordinate, ProjectedCoordinate};
use crate::projection::crs::{SOURCE_CRS, TARGET_CRS};
use proj::Proj;
use tracing::debug;

/// Transforms perimeter coordinates from ESRI:102008 to EPSG:4326
///
/// PROJ normalises axis order for known CRS pairs, so converted tuples are always
/// `(longitude, latitude)`. The transformer unpacks them into named fields so callers
/// never deal with raw tuple order.
pub struct Transformer {
    proj: Proj,
    inverse: Proj,
}

impl Transformer {
    /// Creates a transformer for the supported `SOURCE_CRS -> TARGET_CRS` pair
    pub fn new() -> Result<Self> {
        let proj = Proj::new_known_crs(SOURCE_CRS, TARGET_CRS, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection: {}", e)))?;
        let inverse = Proj::new_known_crs(TARGET_CRS, SOURCE_CRS, None)
            .map_err(|e| Error::Projection(format!("Failed to create inverse projection: {}", e)))?;

        Ok(Self { proj, inverse })
    }

    /// Transforms a projected coordinate into latitude/longitude
    pub fn to_geographic(&self, coord: ProjectedCoordinate) -> Result<GeographicCoordinate> {
        let (longitude, latitude) = self.proj.convert((coord.x, coord.y))
            .map_err(|e| Error::Projection(format!("Transformation failed: {}", e)))?;

        Ok(GeographicCoordinate::new(latitude, longitude))
    }

    /// Transforms multiple coordinates, stopping at the first failure
    pub fn to_geographic_many(&self, coords: &[ProjectedCoordinate]) -> Result<Vec<GeographicCoordinate>> {
        coords.iter()
            .map(|&coord| self.to_geographic(coord))
            .collect()
    }

    /// Transforms a geographic coordinate back into the projected CRS
    pub fn to_projected(&self, coord: GeographicCoordinate) -> Result<ProjectedCoordinate> {
        let (x, y) = self.inverse.convert((coord.longitude, coord.latitude))
            .map_err(|e| Error::Projection(format!("Inverse transformation failed: {}", e)))?;

        Ok(ProjectedCoordinate::new(x, y))
    }
}

/// Converts a perimeter ring from ESRI:102008 to EPSG:4326
///
/// Length and order are preserved. A new transform is built on every call; nothing is
/// cached between calls.
pub fn convert_ring_to_epsg4326(ring: &[ProjectedCoordinate]) -> Result<Vec<GeographicCoordinate>> {
    if ring.is_empty() {
        return Ok(Vec::new());
    }

    let transformer = Transformer::new()?;
    let converted = transformer.to_geographic_many(ring)?;
    debug!(vertices = converted.len(), "reprojected ring {} -> {}", SOURCE_CRS, TARGET_CRS);

    Ok(converted)
}
