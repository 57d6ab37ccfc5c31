//! Trade execution record
//!
//! A trade is produced synchronously during matching and handed to the
//! trade callback; the engine does not retain it.

use crate::ids::OrderId;
use crate::numeric::{Nanos, Price, Quantity};
use serde::{Deserialize, Serialize};

/// An executed trade between a buy order and a sell order
///
/// The price is always the resting (maker) order's price; price improvement
/// accrues to the taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    /// Monotonic nanoseconds at execution
    pub timestamp: Nanos,
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        timestamp: Nanos,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            timestamp,
        }
    }

    /// Trade value (price × quantity) in minor units
    pub fn notional(&self) -> i64 {
        self.price.as_i64() * self.quantity.as_u64() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_creation() {
        let trade = Trade::new(
            OrderId::new(2),
            OrderId::new(1),
            Price::new(10000),
            Quantity::new(50),
            42,
        );

        assert_eq!(trade.buy_order_id, OrderId::new(2));
        assert_eq!(trade.sell_order_id, OrderId::new(1));
        assert_eq!(trade.quantity, Quantity::new(50));
    }

    #[test]
    fn test_trade_notional() {
        let trade = Trade::new(
            OrderId::new(2),
            OrderId::new(1),
            Price::new(10000),
            Quantity::new(50),
            42,
        );

        assert_eq!(trade.notional(), 500_000);
    }

    #[test]
    fn test_trade_serialization() {
        let trade = Trade::new(
            OrderId::new(7),
            OrderId::new(8),
            Price::new(9950),
            Quantity::new(10),
            1_000,
        );

        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deserialized);
    }
}
