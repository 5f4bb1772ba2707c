//! Prometheus metrics for community-service.
//!
//! Exposes safety-pipeline collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

/// Safety verdicts by action (allow / warn / block).
pub static SAFETY_VERDICTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "safety_verdicts_total",
        "Content-safety verdicts by action",
        &["action"]
    )
    .expect("safety_verdicts_total registration")
});

/// Auto-flag reports created for warn verdicts.
pub static AUTO_FLAGS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "auto_flag_reports_total",
        "Moderation reports created by the auto-flagger"
    )
    .expect("auto_flag_reports_total registration")
});

/// Auto-flag insert failures (best-effort; never surfaced to the user).
pub static AUTO_FLAG_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "auto_flag_failures_total",
        "Auto-flag report creations that failed"
    )
    .expect("auto_flag_failures_total registration")
});

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
