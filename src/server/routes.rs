//! HTTP API routes
//!
//! Defines the single query endpoint, the error-to-response mapping, and
//! the request logging middleware.

use crate::error::Error;
use crate::query::parse_coordinates;
use crate::server::state::AppState;

use axum::{
    body::Body,
    extract::{ConnectInfo, RawQuery, State},
    http::{header, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::timeout::TimeoutLayer;
use tracing::info;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    // Timed-out requests get the same status every other failure does.
    Router::new()
        .route("/query", get(query_handler))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            timeout,
        ))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// API error response
///
/// Every failure is written the same way: HTTP 500 with the error's display
/// text plus a trailing newline as a plain-text body. No 4xx statuses are
/// used, even for malformed input; clients of the original service match on
/// the body text.
pub struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", self.0)).into_response()
    }
}

/// Reverse geocode endpoint
///
/// GET /query?<lon>&<lat>
///
/// The coordinates are two positional tokens split on `&`, not `key=value`
/// pairs; see [`parse_coordinates`].
async fn query_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let raw = query.unwrap_or_default();
    let (lon, lat) = parse_coordinates(&raw)?;

    let location = state.geocoder.reverse_geocode(lon, lat)?;
    let body = serde_json::to_string(&location).map_err(Error::from)?;

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Request logging middleware
///
/// Wraps the inner handler in a timing measurement and emits one line per
/// request with path, remote address, and elapsed time.
async fn log_request(
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(%path, %remote, elapsed = ?start.elapsed(), "request");

    response
}
