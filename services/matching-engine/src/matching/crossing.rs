//! Crossing detection logic
//!
//! Determines when an incoming order can trade against a resting price
//! level.

use types::numeric::Price;
use types::order::{OrderKind, Side};

/// Check whether a taker crosses a resting level
///
/// Market orders cross at any price. A limit buy crosses when its price is
/// at or above the level; a limit sell when at or below.
pub fn crosses(kind: OrderKind, side: Side, taker_price: Price, level_price: Price) -> bool {
    match kind {
        OrderKind::Market => true,
        OrderKind::Limit => match side {
            Side::Buy => taker_price >= level_price,
            Side::Sell => taker_price <= level_price,
        },
    }
}
