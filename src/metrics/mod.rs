//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines HTTP, submission and callback metrics.

pub mod metrics_middleware;
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};

lazy_static! {
    // Global Prometheus registry.
    pub static ref REGISTRY: Registry = Registry::new();

    // Counter: Total HTTP requests.
    pub static ref REQUEST_COUNTER: CounterVec = {
        let opts = Opts::new("requests_total", "Total number of HTTP requests");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Histogram for request latency in seconds.
    pub static ref REQUEST_LATENCY: HistogramVec = {
      let histogram_opts = HistogramOpts::new("request_latency_seconds", "Request latency in seconds")
          .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 25.0]);
      let histogram_vec = HistogramVec::new(histogram_opts, &["endpoint", "method", "status"]).unwrap();
      REGISTRY.register(Box::new(histogram_vec.clone())).unwrap();
      histogram_vec
    };

    // Counter for error responses.
    pub static ref ERROR_COUNTER: CounterVec = {
        let opts = Opts::new("error_requests_total", "Total number of error responses");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Counter for requests cut off by the timeout middleware.
    pub static ref TIMEOUT_COUNTER: CounterVec = {
        let opts = Opts::new("request_timeouts_total", "Total number of requests that timed out");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Counter: batch submissions by outcome (accepted, duplicate, failed, validation_error).
    pub static ref SUBMISSIONS_TOTAL: CounterVec = {
        let opts = Opts::new("batch_submissions_total", "Total number of batch submissions by outcome");
        let counter_vec = CounterVec::new(opts, &["outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Histogram for the outbound submission call in seconds.
    pub static ref SUBMISSION_LATENCY: Histogram = {
        let histogram_opts = HistogramOpts::new(
            "batch_submission_latency_seconds",
            "Latency of the counterparty submission call in seconds",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 15.0, 30.0]);
        let histogram = Histogram::with_opts(histogram_opts).unwrap();
        REGISTRY.register(Box::new(histogram.clone())).unwrap();
        histogram
    };

    // Counter: authenticated callbacks by event type and dispatch outcome.
    pub static ref CALLBACKS_TOTAL: CounterVec = {
        let opts = Opts::new("webhook_callbacks_total", "Total number of dispatched webhook callbacks");
        let counter_vec = CounterVec::new(opts, &["event_type", "outcome"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Counter: webhook deliveries rejected by signature verification.
    pub static ref SIGNATURE_FAILURES: Counter = {
        let counter = Counter::new(
            "webhook_signature_failures_total",
            "Total number of webhook deliveries with a missing or invalid signature",
        )
        .unwrap();
        REGISTRY.register(Box::new(counter.clone())).unwrap();
        counter
    };
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}
