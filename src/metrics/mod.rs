//! Basic metrics instrumentation for the directory core.
//!
//! Provides counters for mutations, served pages, and area code lookups.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the use cases.
///
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    contacts_registered_total: Arc<AtomicU64>,
    contacts_updated_total: Arc<AtomicU64>,
    contacts_deleted_total: Arc<AtomicU64>,
    area_codes_registered_total: Arc<AtomicU64>,
    validation_failures_total: Arc<AtomicU64>,
    pages_served_total: Arc<AtomicU64>,
    lookups_total: Arc<AtomicU64>,
    lookup_failures_total: Arc<AtomicU64>,
    aggregation_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_registered_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            area_codes_registered_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            pages_served_total: Arc::new(AtomicU64::new(0)),
            lookups_total: Arc::new(AtomicU64::new(0)),
            lookup_failures_total: Arc::new(AtomicU64::new(0)),
            aggregation_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_contact_registered(&self) {
        self.contacts_registered_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_updated(&self) {
        self.contacts_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.contacts_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_area_code_registered(&self) {
        self.area_codes_registered_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected by validation.
    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record one aggregated page and how long the aggregation took.
    pub fn record_page_served(&self, duration: Duration) {
        self.pages_served_total.fetch_add(1, Ordering::Relaxed);
        self.aggregation_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an area code lookup and whether it succeeded.
    pub fn record_lookup(&self, success: bool) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.lookup_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn contacts_registered_total(&self) -> u64 {
        self.contacts_registered_total.load(Ordering::Relaxed)
    }

    pub fn contacts_updated_total(&self) -> u64 {
        self.contacts_updated_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn area_codes_registered_total(&self) -> u64 {
        self.area_codes_registered_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn pages_served_total(&self) -> u64 {
        self.pages_served_total.load(Ordering::Relaxed)
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    pub fn lookup_failures_total(&self) -> u64 {
        self.lookup_failures_total.load(Ordering::Relaxed)
    }

    /// Get average page aggregation duration in milliseconds.
    pub fn aggregation_duration_avg_ms(&self) -> f64 {
        let total = self.aggregation_duration_total_ms.load(Ordering::Relaxed);
        let count = self.pages_served_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_registered_total: self.contacts_registered_total(),
            contacts_updated_total: self.contacts_updated_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
            area_codes_registered_total: self.area_codes_registered_total(),
            validation_failures_total: self.validation_failures_total(),
            pages_served_total: self.pages_served_total(),
            lookups_total: self.lookups_total(),
            lookup_failures_total: self.lookup_failures_total(),
            aggregation_duration_avg_ms: self.aggregation_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub contacts_registered_total: u64,
    pub contacts_updated_total: u64,
    pub contacts_deleted_total: u64,
    pub area_codes_registered_total: u64,
    pub validation_failures_total: u64,
    pub pages_served_total: u64,
    pub lookups_total: u64,
    pub lookup_failures_total: u64,
    pub aggregation_duration_avg_ms: f64,
}

/// Helper for timing page aggregation.
pub struct PageTimer {
    start: Instant,
    metrics: Metrics,
}

impl PageTimer {
    /// Start timing a page aggregation.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the page.
    pub fn complete(self) {
        self.metrics.record_page_served(self.start.elapsed());
    }
}
