//! netops-api - HTTP API layer for the netops gateway
//!
//! Thin façade over the inventory and the executor: handlers validate
//! required fields, delegate, and map domain errors to response codes.
//! No component below this layer encodes HTTP semantics.
//!
//! # Usage
//!
//! ```ignore
//! use netops_api::{create_router, AppState};
//!
//! let state = AppState::new(inventory, executor);
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the gateway router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Device routes
        .route(
            "/devices",
            get(handlers::devices::list_devices).put(handlers::devices::add_device),
        )
        // Command execution
        .route(
            "/command",
            axum::routing::put(handlers::command::run_command),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
