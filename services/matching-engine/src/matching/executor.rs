//! Trade record construction
//!
//! Resolves the taker/maker pair into the buyer/seller-keyed trade record.
//! The execution price is always the maker's price, so price improvement
//! accrues to the taker.

use types::ids::OrderId;
use types::numeric::{Nanos, Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Build the trade record for one fill
///
/// `taker_side` decides which of the two orders is the buyer.
pub fn make_trade(
    taker_side: Side,
    taker_id: OrderId,
    maker_id: OrderId,
    price: Price,
    quantity: Quantity,
    timestamp: Nanos,
) -> Trade {
    match taker_side {
        Side::Buy => Trade::new(taker_id, maker_id, price, quantity, timestamp),
        Side::Sell => Trade::new(maker_id, taker_id, price, quantity, timestamp),
    }
}
