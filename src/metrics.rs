use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => ([(header::CONTENT_TYPE, encoder.format_type())], buffer).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

/// Counter for total login attempts (every POST /token)
static LOGIN_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("login_requests_total", "Total number of login requests")
        .and_then(|c| {
            prometheus::default_registry().register(Box::new(c.clone()))?;
            Ok(c)
        })
        .unwrap_or_else(|e| {
            tracing::error!("failed to create login_requests counter: {}", e);
            IntCounter::new("dummy_login_requests", "dummy").expect("dummy counter")
        })
});

/// Counter for rejected login attempts (bad credentials or disabled account)
static LOGIN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "login_failures_total",
        "Total number of rejected login attempts",
    )
    .and_then(|c| {
        prometheus::default_registry().register(Box::new(c.clone()))?;
        Ok(c)
    })
    .unwrap_or_else(|e| {
        tracing::error!("failed to create login_failures counter: {}", e);
        IntCounter::new("dummy_login_failures", "dummy").expect("dummy counter")
    })
});

/// Counter for bearer tokens rejected at verification
static TOKEN_REJECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "token_rejections_total",
        "Total number of bearer tokens rejected at verification",
    )
    .and_then(|c| {
        prometheus::default_registry().register(Box::new(c.clone()))?;
        Ok(c)
    })
    .unwrap_or_else(|e| {
        tracing::error!("failed to create token_rejections counter: {}", e);
        IntCounter::new("dummy_token_rejections", "dummy").expect("dummy counter")
    })
});

/// Increment login requests counter
#[inline]
pub fn inc_login_requests() {
    LOGIN_REQUESTS_TOTAL.inc();
}

/// Increment login failures counter
#[inline]
pub fn inc_login_failures() {
    LOGIN_FAILURES_TOTAL.inc();
}

/// Increment token rejections counter
#[inline]
pub fn inc_token_rejections() {
    TOKEN_REJECTIONS_TOTAL.inc();
}
