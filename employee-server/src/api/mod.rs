//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`employees`] - employee CRUD and search

pub mod employees;
pub mod health;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::AppState;
use crate::utils::AppError;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Requests to undefined routes still pass the log middleware
async fn fallback(uri: http::Uri) -> AppError {
    AppError::not_found(format!("no route for {uri}"))
}

/// Build the Axum application with all routes and middleware
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .fallback(fallback)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
