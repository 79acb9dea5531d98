//! Lookup outcome counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Error;

#[derive(Default)]
pub struct Metrics {
    pub records_served: AtomicU64,
    pub auth_rejections: AtomicU64,
    pub records_missing: AtomicU64,
    pub store_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_served(&self) {
        self.records_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, error: &Error) {
        let counter = match error {
            Error::AuthenticationRejected => &self.auth_rejections,
            Error::RecordNotFound(_) => &self.records_missing,
            Error::StoreQuery(_) | Error::StoreConnection(_) | Error::Config(_) => {
                &self.store_failures
            }
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_served: self.records_served.load(Ordering::Relaxed),
            auth_rejections: self.auth_rejections.load(Ordering::Relaxed),
            records_missing: self.records_missing.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub records_served: u64,
    pub auth_rejections: u64,
    pub records_missing: u64,
    pub store_failures: u64,
}
