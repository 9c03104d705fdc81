use axum::{extract::Request, middleware::Next, response::Response};

/// Failure logging middleware
/// Any 4xx/5xx leaving the router gets one structured log line with the
/// request ID attached, whichever handler produced it
pub async fn error_handling_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<uuid::Uuid>()
        .map(|id| id.to_string());

    let response = next.run(request).await;

    if response.status().is_client_error() || response.status().is_server_error() {
        tracing::error!(
            status = %response.status(),
            request_id = ?request_id,
            "Request failed"
        );
    }

    response
}
