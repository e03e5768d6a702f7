//! Request metrics reported through the `metrics` facade
//!
//! Nothing is recorded unless the application installs a recorder.

use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "pxshot_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "pxshot_request_duration_seconds";
pub const VALIDATION_FAILURES_TOTAL: &str = "pxshot_validation_failures_total";

pub(crate) fn record_request(operation: &'static str, status: u16, elapsed: Duration) {
    metrics::increment_counter!(
        REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status_class(status)
    );
    metrics::histogram!(
        REQUEST_DURATION_SECONDS,
        elapsed.as_secs_f64(),
        "operation" => operation
    );
}

pub(crate) fn record_transport_failure(operation: &'static str) {
    metrics::increment_counter!(
        REQUESTS_TOTAL,
        "operation" => operation,
        "status" => "transport_error"
    );
}

pub(crate) fn record_validation_failure(operation: &'static str) {
    metrics::increment_counter!(VALIDATION_FAILURES_TOTAL, "operation" => operation);
}

fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}
