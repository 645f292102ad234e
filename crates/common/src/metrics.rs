use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static COMPANIES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "companies_created_total",
        "Total company records created"
    )
    .expect("register companies_created_total")
});

pub static COMPANIES_VALIDATION_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "companies_validation_failures_total",
        "Total company create requests rejected by validation"
    )
    .expect("register companies_validation_failures_total")
});

/// Force registration so the counters show up before their first increment.
pub fn init() {
    Lazy::force(&COMPANIES_CREATED_TOTAL);
    Lazy::force(&COMPANIES_VALIDATION_FAILURES_TOTAL);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_lists_company_counters() {
        init();
        COMPANIES_CREATED_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("companies_created_total"));
        assert!(body.contains("companies_validation_failures_total"));
    }
}
