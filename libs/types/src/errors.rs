//! Error types for the matching engine
//!
//! Every rejection is synchronous and commits no state: either a public
//! operation is fully applied or nothing changed. Cancelling an unknown
//! order is a benign `false` return, not an error.

use crate::ids::OrderId;
use thiserror::Error;

/// Order submission errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("Duplicate order id: {id} is already live")]
    DuplicateOrderId { id: OrderId },

    #[error("Invalid quantity: must be positive")]
    InvalidQuantity,

    #[error("Invalid price: {price} (limit orders require a positive price)")]
    InvalidPrice { price: i64 },
}
