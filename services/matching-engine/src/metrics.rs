//! Engine metrics
//!
//! The engine reports timings and counters to a narrow [`MetricsSink`]
//! hook; aggregation (percentiles, averages, summaries) lives entirely in
//! the sink. [`EngineMetrics`] is the bundled implementation: atomic
//! counters plus windowed latency trackers, shareable as an `Arc` so the
//! caller keeps a handle for reading after giving one to the engine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Narrow hook the engine reports into
///
/// `record_add` fires once per submission (limit or market), `record_cancel`
/// once per successful cancellation, and `record_match` once per operation
/// that emitted at least one trade, with the matching-phase duration, the
/// number of trades, and the total traded volume.
pub trait MetricsSink: Send + Sync {
    fn record_add(&self, latency_ns: u64);
    fn record_cancel(&self, latency_ns: u64);
    fn record_match(&self, latency_ns: u64, trades: u64, volume: u64);
}

/// Default number of latency samples retained per operation kind
const DEFAULT_SAMPLE_WINDOW: usize = 100_000;

/// Counter and latency aggregation for one order book
pub struct EngineMetrics {
    total_adds: AtomicU64,
    total_cancels: AtomicU64,
    total_matches: AtomicU64,
    total_trades: AtomicU64,
    total_volume_traded: AtomicU64,

    add_latency_ns: Mutex<LatencyTracker>,
    cancel_latency_ns: Mutex<LatencyTracker>,
    match_latency_ns: Mutex<LatencyTracker>,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self {
            total_adds: AtomicU64::new(0),
            total_cancels: AtomicU64::new(0),
            total_matches: AtomicU64::new(0),
            total_trades: AtomicU64::new(0),
            total_volume_traded: AtomicU64::new(0),
            add_latency_ns: Mutex::new(LatencyTracker::new(DEFAULT_SAMPLE_WINDOW)),
            cancel_latency_ns: Mutex::new(LatencyTracker::new(DEFAULT_SAMPLE_WINDOW)),
            match_latency_ns: Mutex::new(LatencyTracker::new(DEFAULT_SAMPLE_WINDOW)),
        }
    }

    /// Orders submitted (limit and market)
    pub fn total_adds(&self) -> u64 {
        self.total_adds.load(Ordering::Relaxed)
    }

    /// Successful cancellations
    pub fn total_cancels(&self) -> u64 {
        self.total_cancels.load(Ordering::Relaxed)
    }

    /// Operations that emitted at least one trade
    pub fn total_matches(&self) -> u64 {
        self.total_matches.load(Ordering::Relaxed)
    }

    /// Trades emitted
    pub fn total_trades(&self) -> u64 {
        self.total_trades.load(Ordering::Relaxed)
    }

    /// Total quantity traded
    pub fn total_volume_traded(&self) -> u64 {
        self.total_volume_traded.load(Ordering::Relaxed)
    }

    /// Add-operation latency percentile (0-100)
    pub fn add_percentile(&self, p: usize) -> Option<u64> {
        self.add_latency_ns.lock().ok()?.percentile(p)
    }

    /// Cancel-operation latency percentile (0-100)
    pub fn cancel_percentile(&self, p: usize) -> Option<u64> {
        self.cancel_latency_ns.lock().ok()?.percentile(p)
    }

    /// Matching-phase latency percentile (0-100)
    pub fn match_percentile(&self, p: usize) -> Option<u64> {
        self.match_latency_ns.lock().ok()?.percentile(p)
    }

    /// Average add-operation latency
    pub fn avg_add_latency(&self) -> Option<u64> {
        self.add_latency_ns.lock().ok()?.average()
    }

    /// Average cancel-operation latency
    pub fn avg_cancel_latency(&self) -> Option<u64> {
        self.cancel_latency_ns.lock().ok()?.average()
    }

    /// Average matching-phase latency
    pub fn avg_match_latency(&self) -> Option<u64> {
        self.match_latency_ns.lock().ok()?.average()
    }

    /// Reset all counters and samples
    pub fn reset(&self) {
        self.total_adds.store(0, Ordering::Relaxed);
        self.total_cancels.store(0, Ordering::Relaxed);
        self.total_matches.store(0, Ordering::Relaxed);
        self.total_trades.store(0, Ordering::Relaxed);
        self.total_volume_traded.store(0, Ordering::Relaxed);
        for tracker in [
            &self.add_latency_ns,
            &self.cancel_latency_ns,
            &self.match_latency_ns,
        ] {
            if let Ok(mut t) = tracker.lock() {
                t.clear();
            }
        }
    }

    /// Human-readable summary of counters and latency distributions
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str("\n=== Order Book Metrics ===\n\n");
        out.push_str("Operations:\n");
        out.push_str(&format!("  Orders Added: {}\n", self.total_adds()));
        out.push_str(&format!("  Cancellations: {}\n", self.total_cancels()));
        out.push_str(&format!("  Matching Operations: {}\n", self.total_matches()));
        out.push_str(&format!("  Trades: {}\n", self.total_trades()));
        out.push_str(&format!(
            "  Volume Traded: {}\n\n",
            self.total_volume_traded()
        ));

        Self::latency_section(&mut out, "Add Order", &self.add_latency_ns);
        Self::latency_section(&mut out, "Cancel Order", &self.cancel_latency_ns);
        Self::latency_section(&mut out, "Match", &self.match_latency_ns);

        out.push_str("==========================\n");
        out
    }

    fn latency_section(out: &mut String, label: &str, tracker: &Mutex<LatencyTracker>) {
        let Ok(tracker) = tracker.lock() else { return };
        if tracker.count() == 0 {
            return;
        }

        out.push_str(&format!("{} Latency (nanoseconds):\n", label));
        if let Some(avg) = tracker.average() {
            out.push_str(&format!("  Average: {} ns\n", avg));
        }
        for (name, p) in [("P50", 50), ("P95", 95), ("P99", 99), ("Max", 100)] {
            if let Some(v) = tracker.percentile(p) {
                out.push_str(&format!("  {}: {} ns\n", name, v));
            }
        }
        out.push('\n');
    }
}

impl MetricsSink for EngineMetrics {
    fn record_add(&self, latency_ns: u64) {
        self.total_adds.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut tracker) = self.add_latency_ns.lock() {
            tracker.record(latency_ns);
        }
    }

    fn record_cancel(&self, latency_ns: u64) {
        self.total_cancels.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut tracker) = self.cancel_latency_ns.lock() {
            tracker.record(latency_ns);
        }
    }

    fn record_match(&self, latency_ns: u64, trades: u64, volume: u64) {
        self.total_matches.fetch_add(1, Ordering::Relaxed);
        self.total_trades.fetch_add(trades, Ordering::Relaxed);
        self.total_volume_traded.fetch_add(volume, Ordering::Relaxed);
        if let Ok(mut tracker) = self.match_latency_ns.lock() {
            tracker.record(latency_ns);
        }
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks latency samples for percentile calculation
pub struct LatencyTracker {
    samples: Vec<u64>,
    max_samples: usize,
}

impl LatencyTracker {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(max_samples),
            max_samples,
        }
    }

    /// Record a latency sample
    pub fn record(&mut self, value: u64) {
        if self.samples.len() >= self.max_samples {
            self.samples.remove(0);
        }
        self.samples.push(value);
    }

    /// Get a percentile value (0-100)
    pub fn percentile(&self, p: usize) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let idx = (p as f64 / 100.0 * (sorted.len() - 1) as f64) as usize;
        Some(sorted[idx.min(sorted.len() - 1)])
    }

    /// Average latency
    pub fn average(&self) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: u64 = self.samples.iter().sum();
        Some(sum / self.samples.len() as u64)
    }

    /// Number of samples recorded
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
