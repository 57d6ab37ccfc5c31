//! Matching Engine
//!
//! Single-symbol limit order book with price-time priority matching.
//!
//! **Performance Targets:**
//! - Sub-microsecond add/cancel on the hot path
//! - At most one allocation per new resting order, one per new price level
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (best price, then FIFO)
//! - No crossing resting state: best bid < best ask whenever both exist
//! - Cached level volume always equals the sum of remaining quantities
//! - The order arena owns every live order; ladders hold handles only

pub mod book;
pub mod engine;
pub mod matching;
pub mod metrics;

pub use engine::{Accepted, MatchingEngine};
pub use metrics::{EngineMetrics, MetricsSink};
