//! Unique identifier types for book entities
//!
//! Order ids are supplied by the client and must be unique among live
//! orders; the engine rejects duplicates. An id becomes reusable once the
//! order it named leaves the book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Client-supplied. Unique while the order is live; the same value may be
/// reused after the previous holder is filled or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Create from a raw u64
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
