//! Matching logic module
//!
//! Implements the price-time priority matching algorithm

pub mod crossing;
pub mod executor;

pub use crossing::crosses;
pub use executor::make_trade;
