//! # Validation Module
//!
//! Input validation and parsing utilities for Kasir.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extraction (kasir-api)                                  │
//! │  ├── JSON decoding into input types                                    │
//! │  └── Path ids parsed with parse_id                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: business rule validation                        │
//! │  ├── Names present and bounded                                         │
//! │  └── Prices finite and non-negative, quantities positive               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (PostgreSQL)                                        │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity > 0), CHECK (subtotal >= 0)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{parse_id, validate_quantity};
//!
//! assert_eq!(parse_id("product", "42").unwrap(), 42);
//! assert!(validate_quantity(0).is_err());
//! ```

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;
use crate::types::{CategoryInput, ProductInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Date literal format accepted by the report endpoint.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str, max: usize) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required(field));
    }

    if name.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kopi Susu").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a category name (required, at most 100 characters).
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name, MAX_CATEGORY_NAME_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed)
pub fn validate_price(price: f64) -> ValidationResult<()> {
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

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a product create/update body.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_price(input.price)?;
    Ok(())
}

/// Validates a category create/update body.
pub fn validate_category_input(input: &CategoryInput) -> ValidationResult<()> {
    validate_category_name(&input.name)
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a path segment as an entity id.
///
/// Any non-integer yields `Invalid <entity> ID`.
pub fn parse_id(entity: &str, raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_id(entity))
}

/// Parses a `YYYY-MM-DD` literal as midnight UTC of that day.
///
/// Only the exact ten-character form is accepted: a four-digit year, no
/// sign, and zero-padded month and day.
///
/// ## Example
/// ```rust
/// use kasir_core::validation::parse_date;
///
/// let start = parse_date("start_date", "2024-01-01").unwrap();
/// assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
/// assert!(parse_date("start_date", "01/01/2024").is_err());
/// ```
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<DateTime<Utc>> {
    let invalid = |reason: String| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason,
    };

    let raw = raw.trim();
    if !is_date_shape(raw) {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| invalid(format!("expected YYYY-MM-DD ({e})")))?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// `dddd-dd-dd` in ASCII digits.
fn is_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
