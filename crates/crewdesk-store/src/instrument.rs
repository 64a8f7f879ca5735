// SPDX-License-Identifier: Apache-2.0

use crate::error::SheetErrorCode;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

pub trait StoreInstrumentation: Send + Sync + 'static {
    fn observe_fetch(&self, _sheet: &str, _rows: usize, _latency: Duration) {}
    fn observe_write(&self, _action: &str, _latency: Duration) {}
    fn observe_error(&self, _code: SheetErrorCode) {}
}

#[derive(Default)]
pub struct NoopInstrumentation;

impl StoreInstrumentation for NoopInstrumentation {}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct StoreMetrics {
    pub fetch_count: u64,
    pub rows_fetched: u64,
    pub write_count: u64,
    pub latency_ms_total: u128,
    pub failures_by_class: BTreeMap<String, u64>,
}

#[derive(Default)]
pub struct StoreMetricsCollector {
    inner: Mutex<StoreMetrics>,
}

impl StoreMetricsCollector {
    #[must_use]
    pub fn snapshot(&self) -> StoreMetrics {
        self.inner.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl StoreInstrumentation for StoreMetricsCollector {
    fn observe_fetch(&self, _sheet: &str, rows: usize, latency: Duration) {
        if let Ok(mut m) = self.inner.lock() {
            m.fetch_count = m.fetch_count.saturating_add(1);
            m.rows_fetched = m.rows_fetched.saturating_add(rows as u64);
            m.latency_ms_total = m.latency_ms_total.saturating_add(latency.as_millis());
        }
    }

    fn observe_write(&self, _action: &str, latency: Duration) {
        if let Ok(mut m) = self.inner.lock() {
            m.write_count = m.write_count.saturating_add(1);
            m.latency_ms_total = m.latency_ms_total.saturating_add(latency.as_millis());
        }
    }

    fn observe_error(&self, code: SheetErrorCode) {
        if let Ok(mut m) = self.inner.lock() {
            *m.failures_by_class
                .entry(code.as_str().to_string())
                .or_insert(0) += 1;
        }
    }
}
