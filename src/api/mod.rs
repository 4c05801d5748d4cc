//! HTTP surface for distance and reprojection requests

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
