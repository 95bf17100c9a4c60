//! # Validation Module
//!
//! Input validation rules for cart construction and mutation.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Cart::new(customer_id)                                                │
//! │  └── validate_customer_id            → CoreError::InvalidCustomerId    │
//! │                                                                         │
//! │  Cart::add_item(name, qty)                                             │
//! │  ├── validate_item_name              → CoreError::InvalidItem          │
//! │  ├── validate_add_quantity           → CoreError::InvalidQuantity      │
//! │  └── Catalog::contains               → CoreError::UnknownItem          │
//! │                                                                         │
//! │  Cart::update_item(name, qty)                                          │
//! │  ├── validate_item_name              → CoreError::InvalidItem          │
//! │  └── validate_update_quantity        → CoreError::InvalidQuantity      │
//! │                                                                         │
//! │  All checks run before the cart is touched.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartkit_core::validation::{validate_customer_id, validate_add_quantity};
//!
//! assert!(validate_customer_id("ABC12345DE-Q").is_ok());
//! assert!(validate_add_quantity(5, 100).is_ok());
//! assert!(validate_add_quantity(0, 100).is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Three letters, five digits, two letters, a hyphen, then `A` or `Q`.
///
/// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII
/// decimal digits.
static CUSTOMER_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3}[0-9]{5}[A-Za-z]{2}-[AQ]$").expect("Valid regex pattern")
});

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer identifier.
///
/// ## Rules
/// - 3 ASCII letters, 5 ASCII digits, 2 ASCII letters
/// - a literal hyphen
/// - a final uppercase `A` or `Q`
///
/// ## Example
/// ```rust
/// use cartkit_core::validation::validate_customer_id;
///
/// assert!(validate_customer_id("ABC12345DE-Q").is_ok());
/// assert!(validate_customer_id("abc12345de-A").is_ok());
/// assert!(validate_customer_id("AB12345DE-1").is_err());
/// ```
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<()> {
    if customer_id.is_empty() {
        return Err(ValidationError::Required {
            field: "customer ID".to_string(),
        });
    }

    if !CUSTOMER_ID_REGEX.is_match(customer_id) {
        return Err(ValidationError::InvalidFormat {
            field: "customer ID".to_string(),
            reason: "expected 3 letters, 5 digits, 2 letters, '-', then A or Q".to_string(),
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - At most `max_len` characters (counted as `char`s, not bytes)
/// - No trimming: `" apple"` is a different, uncatalogued name
pub fn validate_item_name(name: &str, max_len: usize) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: max_len,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity passed to `add_item`.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed `max` (100 by default)
///
/// ## User Workflow
/// ```text
/// add_item("apple", qty)
///      │
///      ▼
/// validate_add_quantity(qty) ← THIS FUNCTION
///      │
///      ├── qty < 1?   → InvalidQuantity
///      ├── qty > max? → InvalidQuantity
///      └── OK → catalog lookup, then accumulate
/// ```
pub fn validate_add_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if !(1..=max).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a quantity passed to `update_item`.
///
/// Zero is allowed here (it removes the item); there is no upper bound.
pub fn validate_update_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
