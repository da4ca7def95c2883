//! HTTP service exposing CRUD over the in-memory todo store.
//!
//! # Routes
//! ```text
//! GET    /todo/read/all      → every record, insertion order
//! GET    /todo/read/{id}     → one record or 404
//! POST   /todo/create        → insert the body verbatim, echo it
//! PUT    /todo/update/{id}   → 400 unless path id == body id, then update
//! DELETE /todo/delete/{id}   → remove, always confirms
//! GET    /health             → liveness and record count
//! ```
//!
//! Every request gets an `x-request-id` (generated when absent) that is
//! echoed on the response and attached to the request's trace span.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod state;

use std::future::Future;

use axum::{
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/todo/read/all", get(handlers::read_all))
        .route("/todo/read/{id}", get(handlers::read_by_id))
        .route("/todo/create", post(handlers::create))
        .route("/todo/update/{id}", put(handlers::update))
        .route("/todo/delete/{id}", delete(handlers::delete))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    serve_until(listener, state, observability::shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_until<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP server starting");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}
