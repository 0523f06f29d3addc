use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness check.
///
/// Readiness depends on the service's own backends, so each service provides
/// its own `readyz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
