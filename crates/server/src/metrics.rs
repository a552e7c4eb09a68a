use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "quiz_store_operations_total",
        "Quiz store operations by name and outcome",
        &["operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static QUIZ_QUESTIONS_SERVED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "quiz_store_questions_served_total",
        "Questions handed out through random quizzes",
        &["scope"]
    )
    .expect("register questions_served_total")
});

/// Count one operation; `ok` selects the `ok`/`error` outcome label.
pub fn observe(operation: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
