use axum::{http::StatusCode, Json};
use std::time::Instant;
use tracing::{info, warn};

use crate::projection::{convert_ring_to_epsg4326, GeographicCoordinate, ProjectedCoordinate};
use crate::proximity::shortest_distance_from_place_to_fire_perimeter;
use crate::Error;
use super::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn post_distance(
    Json(req): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let start = Instant::now();

    let place = GeographicCoordinate::new(req.latitude, req.longitude);
    let ring = to_projected(&req.ring);

    let proximity = shortest_distance_from_place_to_fire_perimeter(place, &ring)
        .map_err(|e| error_response("Failed to compute distance", e))?;

    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(vertices = ring.len(), execution_time_ms, "distance request");

    Ok(Json(DistanceResponse {
        latitude: req.latitude,
        longitude: req.longitude,
        distance_miles: proximity.map(|p| p.distance_miles),
        nearest: proximity.map(|p| p.nearest),
        execution_time_ms,
    }))
}

pub async fn post_reproject(
    Json(req): Json<ReprojectRequest>,
) -> Result<Json<ReprojectResponse>, ApiError> {
    let ring = to_projected(&req.ring);

    let converted = convert_ring_to_epsg4326(&ring)
        .map_err(|e| error_response("Failed to reproject ring", e))?;

    Ok(Json(ReprojectResponse {
        ring: converted.iter()
            .map(|coord| [coord.latitude, coord.longitude])
            .collect(),
    }))
}

fn to_projected(pairs: &[[f64; 2]]) -> Vec<ProjectedCoordinate> {
    pairs.iter().copied().map(ProjectedCoordinate::from).collect()
}

fn error_response(context: &str, error: Error) -> ApiError {
    warn!("{}: {}", context, error);

    let status = match error {
        Error::Projection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: format!("{}: {}", context, error),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_distance_empty_ring() {
        let req = DistanceRequest {
            latitude: 47.6062,
            longitude: -122.3321,
            ring: Vec::new(),
        };

        let Json(response) = post_distance(Json(req)).await.unwrap();
        assert!(response.distance_miles.is_none());
        assert!(response.nearest.is_none());
        assert_eq!(response.latitude, 47.6062);
    }

    #[tokio::test]
    async fn test_distance_origin_vertex() {
        // Projected origin is lat 40, lon -96
        let req = DistanceRequest {
            latitude: 40.0,
            longitude: -96.0,
            ring: vec![[500_000.0, 500_000.0], [0.0, 0.0]],
        };

        let Json(response) = post_distance(Json(req)).await.unwrap();
        let nearest = response.nearest.unwrap();
        assert!((nearest.latitude - 40.0).abs() < 1e-4);
        assert!((nearest.longitude + 96.0).abs() < 1e-4);
        assert!(response.distance_miles.unwrap() < 0.01);
    }

    #[tokio::test]
    async fn test_reproject_preserves_length() {
        let req = ReprojectRequest {
            ring: vec![[0.0, 0.0], [-1_000_000.0, 500_000.0], [0.0, 0.0]],
        };

        let Json(response) = post_reproject(Json(req)).await.unwrap();
        assert_eq!(response.ring.len(), 3);
        assert!((response.ring[0][0] - 40.0).abs() < 1e-4);
        assert!((response.ring[0][1] + 96.0).abs() < 1e-4);
        assert_eq!(response.ring[0], response.ring[2]);
    }

    #[tokio::test]
    async fn test_distance_out_of_domain_vertex() {
        let req = DistanceRequest {
            latitude: 40.0,
            longitude: -96.0,
            ring: vec![[0.0, 0.0], [0.0, 1.0e8]],
        };

        let (status, Json(body)) = post_distance(Json(req)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.error.starts_with("Failed to compute distance"));
    }

    #[test]
    fn test_projection_error_status() {
        let (status, Json(body)) = error_response("ctx", Error::Projection("boom".to_string()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "ctx: Projection error: boom");
    }
}
