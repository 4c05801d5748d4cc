use std::io::Read;

use crate::error::Result;
use crate::projection::ProjectedCoordinate;

/// Reads a ring from a JSON array of `[x, y]` pairs
pub fn read_ring<R: Read>(reader: R) -> Result<Vec<ProjectedCoordinate>> {
    let pairs: Vec<[f64; 2]> = serde_json::from_reader(reader)?;
    Ok(pairs.into_iter().map(ProjectedCoordinate::from).collect())
}
