//! # Domain Types
//!
//! Core domain types used throughout Kasir.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Category     │   │    Product      │   │    Transaction      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │◄ ─│  category_id    │   │  id                 │   │
//! │  │  name           │   │  id             │   │  total_amount       │   │
//! │  │  description?   │   │  name, price    │   │  created_at         │   │
//! │  └─────────────────┘   │  stock          │   │  details ───────┐   │   │
//! │        (soft ref)      └─────────────────┘   └─────────────────┼───┘   │
//! │                                 ▲                              │       │
//! │                                 │ product_id    ┌──────────────▼────┐  │
//! │                                 └───────────────│ TransactionDetail │  │
//! │                                                 │ quantity,subtotal │  │
//! │                                                 └───────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are store-assigned positive integers. Input types (`ProductInput`,
//! `CategoryInput`, `CreateTransactionRequest`) carry no id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryInput {
    /// Builds the stored entity once the store has assigned an id.
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price; may carry decimals, truncated when a line is priced.
    pub price: f64,
    /// Informational only. Sales do not decrement it.
    pub stock: i64,
    /// Soft reference to a category; not enforced.
    pub category_id: i64,
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category_id: i64,
}

impl ProductInput {
    /// Builds the stored entity once the store has assigned an id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Optional predicates for listing products. All supplied predicates must match.
///
/// Non-positive category ids and price bounds mean "no filter", and a blank
/// name is the same as no name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    name: Option<String>,
    category_id: Option<i64>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ProductFilter {
    /// A filter that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the name; ignored if empty.
    ///
    /// The substring is used as given, surrounding whitespace included.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Exact category match; ignored if `<= 0`.
    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = (category_id > 0).then_some(category_id);
        self
    }

    /// Inclusive lower price bound; ignored if `<= 0`.
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = (min_price > 0.0).then_some(min_price);
        self
    }

    /// Inclusive upper price bound; ignored if `<= 0`.
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = (max_price > 0.0).then_some(max_price);
        self
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category_filter(&self) -> Option<i64> {
        self.category_id
    }

    pub fn min_price_filter(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price_filter(&self) -> Option<f64> {
        self.max_price
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self == &ProductFilter::default()
    }

    /// Evaluates the filter against a product.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A recorded sale. Immutable after creation except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: i64,
    /// Always the sum of `details[].subtotal`.
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
    /// Empty when listing; populated on single fetch and on create.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub details: Vec<TransactionDetail>,
}

/// A line item owned by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// `quantity × floor(price)` at the time of sale.
    pub subtotal: i64,
}

/// One requested line in a transaction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Request body for creating a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub items: Vec<TransactionItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================
