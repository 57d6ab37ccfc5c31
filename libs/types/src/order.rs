//! Order representation
//!
//! An order is one instruction to buy or sell. The engine mutates only
//! `remaining_quantity` after construction; everything else is fixed at
//! submission.

use crate::ids::OrderId;
use crate::numeric::{Nanos, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    /// Execute only at the limit price or better; remainder rests
    Limit,
    /// Execute immediately at best available prices; remainder is discarded
    Market,
}

/// A single order
///
/// Market orders carry `Price::ZERO`; the price field of a market order
/// never participates in matching decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub kind: OrderKind,
    pub price: Price,
    pub quantity: Quantity,
    pub remaining_quantity: Quantity,
    /// Monotonic nanoseconds, assigned by the engine at submission
    pub timestamp: Nanos,
}

impl Order {
    /// Create a new limit order
    pub fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity, timestamp: Nanos) -> Self {
        Self {
            id,
            side,
            kind: OrderKind::Limit,
            price,
            quantity,
            remaining_quantity: quantity,
            timestamp,
        }
    }

    /// Create a new market order
    pub fn market(id: OrderId, side: Side, quantity: Quantity, timestamp: Nanos) -> Self {
        Self {
            id,
            side,
            kind: OrderKind::Market,
            price: Price::ZERO,
            quantity,
            remaining_quantity: quantity,
            timestamp,
        }
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    /// Quantity executed so far
    pub fn filled_quantity(&self) -> Quantity {
        self.quantity - self.remaining_quantity
    }

    /// Reduce the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics in debug builds if the fill exceeds the remaining quantity.
    pub fn fill(&mut self, quantity: Quantity) {
        self.remaining_quantity -= quantity;
    }
}
