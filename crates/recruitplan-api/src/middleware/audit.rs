use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// One `api_request` event per planner call, with its latency.
///
/// Plan and gap bodies carry trial enrollment figures, so only the method
/// and path are recorded. Rejected inputs log at warn, failures at error.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_us, "api_request");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_us, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_us, "api_request");
    }

    response
}
