use std::io::Read;

use crate::error::Result;
use crate::projection::ProjectedCoordinate;

/// Reads a ring from CSV with `x` and `y` header columns
pub fn read_ring<R: Read>(reader: R) -> Result<Vec<ProjectedCoordinate>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<ProjectedCoordinate>()
        .map(|record| record.map_err(Into::into))
        .collect()
}
