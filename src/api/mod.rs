//! HTTP API Module
//!
//! The request dispatch layer of the lookup service.
//!
//! ## Overview
//! Bridges the axum web server with the query engine: each route parses
//! its query parameters, runs them through the declarative parameter
//! contract, invokes one query operation against the injected record
//! store, and serializes either the result or a JSON error envelope.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`params`**: The per-operation query-parameter contract.
//! - **`error`**: The error taxonomy and the `{"error": ...}` envelope.

pub mod error;
pub mod handlers;
pub mod params;

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;
use error::ErrorBody;

/// Builds the service router with the record store injected.
///
/// The store is the only shared state; it is read-only, so handlers scan
/// it concurrently without coordination.
pub fn router(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/search/original", get(handlers::handle_search_original))
        .route("/search/spn-fmi", get(handlers::handle_search_spn_fmi))
        .route("/search/codice-sdf", get(handlers::handle_search_codice_sdf))
        .route("/centraline", get(handlers::handle_centraline))
        .fallback(handlers::handle_not_found)
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

// Keeps the all-responses-are-JSON contract even when a handler panics.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
