//! # Transaction Pricing
//!
//! Turns requested line items into a priced, not yet persisted transaction.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [{product_id, quantity}, ...]   (input order is kept)           │
//! │      │                                                                  │
//! │      ▼  for each item (product looked up by the caller)                 │
//! │  NewTransaction::add_line(&product, quantity)                           │
//! │      ├── quantity <= 0        → ValidationError                         │
//! │      ├── floor(price) × qty   → subtotal (checked)                      │
//! │      └── total += subtotal    → (checked)                               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  NewTransaction { total_amount, details }  ──► TransactionStore::create │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `total_amount == sum(details.subtotal)` holds by construction since both
//! are only changed together inside `add_line`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

/// A detail row waiting to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransactionDetail {
    pub product_id: i64,
    pub quantity: i64,
    pub subtotal: i64,
}

/// A priced transaction waiting to be persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    total: Money,
    details: Vec<NewTransactionDetail>,
}

impl NewTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a transaction from lines that were priced elsewhere.
    ///
    /// Only the total is checked here; quantity and subtotal bounds are left
    /// to the store's own constraints.
    pub fn from_details(details: Vec<NewTransactionDetail>) -> CoreResult<Self> {
        let mut total = Money::zero();
        for detail in &details {
            total = total
                .checked_add(Money::from_units(detail.subtotal))
                .ok_or_else(|| ValidationError::Overflow {
                    field: "total_amount".to_string(),
                })?;
        }

        Ok(Self { total, details })
    }

    /// Prices one line against the product's current price and appends it.
    ///
    /// On error nothing is appended and the running total is unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::{NewTransaction, Product};
    ///
    /// let kopi = Product {
    ///     id: 1,
    ///     name: "Kopi".into(),
    ///     price: 90_000.0,
    ///     stock: 10,
    ///     category_id: 1,
    /// };
    ///
    /// let mut tx = NewTransaction::new();
    /// tx.add_line(&kopi, 2).unwrap();
    /// assert_eq!(tx.total_amount(), 180_000);
    /// ```
    pub fn add_line(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let unit = Money::from_price(product.price)?;
        let subtotal = unit
            .checked_mul(quantity)
            .ok_or_else(|| ValidationError::Overflow {
                field: "subtotal".to_string(),
            })?;
        let total = self
            .total
            .checked_add(subtotal)
            .ok_or_else(|| ValidationError::Overflow {
                field: "total_amount".to_string(),
            })?;

        self.total = total;
        self.details.push(NewTransactionDetail {
            product_id: product.id,
            quantity,
            subtotal: subtotal.units(),
        });

        Ok(())
    }

    pub fn total_amount(&self) -> i64 {
        self.total.units()
    }

    pub fn details(&self) -> &[NewTransactionDetail] {
        &self.details
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }
}
