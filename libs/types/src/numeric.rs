//! Fixed-point integer types for prices and quantities
//!
//! Prices are integers in the venue's minor unit (e.g. cents); quantities
//! are whole shares/contracts. The engine interprets prices only by
//! ordering and equality, so plain integers keep arithmetic deterministic
//! with no floating point anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Monotonic timestamp in nanoseconds.
pub type Nanos = u64;

/// Price in the venue's minor unit
///
/// Limit prices must be positive; market orders carry a price of zero as a
/// placeholder that never participates in ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    /// Placeholder price carried by market orders
    pub const ZERO: Price = Price(0);

    /// Create from a raw minor-unit value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// True for prices a limit order may carry
    pub fn is_valid_limit(&self) -> bool {
        self.0 > 0
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Self) -> Self::Output {
        Price(self.0 - rhs.0)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity in whole shares/contracts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Quantity(pub u64);

impl Quantity {
    /// Zero quantity
    pub const ZERO: Quantity = Quantity(0);

    /// Create from a raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check if quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(self.0 >= rhs.0, "Quantity subtraction would underflow");
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert!(self.0 >= rhs.0, "Quantity subtraction would underflow");
        self.0 -= rhs.0;
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
