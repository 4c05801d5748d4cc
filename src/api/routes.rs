use axum::{
    routing::post,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::*;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/distance", post(post_distance))
        .route("/api/reproject", post(post_reproject))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
        )
}
