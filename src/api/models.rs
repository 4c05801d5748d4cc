use serde::{Deserialize, Serialize};

use crate::projection::GeographicCoordinate;

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// ESRI:102008 `[x, y]` pairs
    #[serde(default)]
    pub ring: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub distance_miles: Option<f64>,
    pub nearest: Option<GeographicCoordinate>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReprojectRequest {
    /// ESRI:102008 `[x, y]` pairs
    pub ring: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReprojectResponse {
    /// EPSG:4326 `[latitude, longitude]` pairs
    pub ring: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
