//! Metrics collection.
//!
//! # Metrics
//! - `land_registry_transactions_total` (counter): submitted writes by operation, outcome
//! - `land_registry_transaction_duration_seconds` (histogram): submit-to-receipt latency
//! - `land_registry_queries_total` (counter): read calls by operation, outcome
//! - `land_registry_fee_transfers_total` (counter): fee transfers by outcome
//!
//! No exporter is installed here; the host application decides where metrics go.

use std::time::Duration;

pub fn record_transaction(operation: &'static str, outcome: &'static str, elapsed: Duration) {
    metrics::counter!(
        "land_registry_transactions_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "land_registry_transaction_duration_seconds",
        "operation" => operation
    )
    .record(elapsed.as_secs_f64());
}

pub fn record_query(operation: &'static str, ok: bool) {
    metrics::counter!(
        "land_registry_queries_total",
        "operation" => operation,
        "outcome" => outcome(ok)
    )
    .increment(1);
}

pub fn record_fee_transfer(ok: bool) {
    metrics::counter!("land_registry_fee_transfers_total", "outcome" => outcome(ok)).increment(1);
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "success"
    } else {
        "error"
    }
}
