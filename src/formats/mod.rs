//! Perimeter ring file readers

pub mod csv;
pub mod json;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::projection::ProjectedCoordinate;

/// Reads an ESRI:102008 ring from a `.csv` or `.json` file
pub fn read_ring<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectedCoordinate>> {
    let path = path.as_ref();
    let extension = path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let reader = || -> Result<BufReader<File>> { Ok(BufReader::new(File::open(path)?)) };

    let ring = match extension.as_deref() {
        Some("csv") => csv::read_ring(reader()?)?,
        Some("json") => json::read_ring(reader()?)?,
        _ => {
            return Err(Error::InvalidFormat(format!(
                "Unsupported ring file (expected .csv or .json): {}",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), vertices = ring.len(), "read perimeter ring");
    Ok(ring)
}
