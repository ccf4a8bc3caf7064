use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id attached to every request.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Echo the caller's `x-request-id` (or generate one), expose it as a request
/// extension, stamp it on the response, and open a per-request span so every
/// log line emitted while handling the request carries the id.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let span = tracing::info_span!("request", request_id = %id);
    let mut res = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(X_REQUEST_ID.clone(), value);
    }

    res
}

/// Emit one structured log line per handled request.
pub async fn request_log(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().unwrap_or_default().to_owned();

    let start = std::time::Instant::now();
    let res = next.run(req).await;

    tracing::info!(
        %method,
        path,
        query,
        status = res.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "http request"
    );

    res
}
