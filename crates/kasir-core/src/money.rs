//! # Money Module
//!
//! Provides the `Money` type used for subtotals and totals.
//!
//! ## Integer Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE (decimal, as stored on the product)                              │
//! │    90000.75                                                             │
//! │        │                                                                │
//! │        ▼  Money::from_price  (truncate toward zero)                     │
//! │  UNIT PRICE (integer)                                                   │
//! │    90000                                                                │
//! │        │                                                                │
//! │        ▼  checked_mul(quantity)                                         │
//! │  SUBTOTAL (integer)  ──► summed into Transaction.total_amount           │
//! │                                                                         │
//! │  The fractional part of a price never reaches a subtotal.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals and subtotals are stored as BIGINT, so every arithmetic step is
//! checked instead of wrapping.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Converts a product price into an integer unit price.
    ///
    /// The price is truncated to whole units before any multiplication,
    /// which is the pricing rule for every transaction line.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// assert_eq!(Money::from_price(1500.99).unwrap().units(), 1500);
    /// assert_eq!(Money::from_price(0.0).unwrap().units(), 0);
    /// assert!(Money::from_price(-1.0).is_err());
    /// ```
    pub fn from_price(price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "must be a finite number".to_string(),
            });
        }

        if price < 0.0 {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
            });
        }

        let truncated = price.trunc();
        // i64::MAX is not exactly representable as f64; anything at or above
        // 2^63 would saturate on the cast.
        if truncated >= i64::MAX as f64 {
            return Err(ValidationError::Overflow {
                field: "price".to_string(),
            });
        }

        Ok(Money(truncated as i64))
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    #[inline]
    pub fn checked_mul(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Adds another amount, returning `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}
