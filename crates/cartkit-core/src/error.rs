//! # Error Types
//!
//! Domain-specific error types for cartkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - field-level rule failures (validation module)      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CoreError        - what a cart operation reports to its caller        │
//! │  ├── InvalidCustomerId   (construction)                                │
//! │  ├── InvalidItem         (bad item name)                               │
//! │  ├── InvalidQuantity     (out-of-range quantity)                       │
//! │  ├── UnknownItem         (name not in catalog)                         │
//! │  └── InvalidLimits       (unusable CartLimits)                         │
//! │                                                                         │
//! │  ConfigError      - CartLimits parsing / range checks                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, offending value)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never leaves a partially applied change behind

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by cart construction and mutation.
///
/// Every variant is raised before the cart is touched, so a caller that
/// receives one of these can keep using the cart as if the call never
/// happened.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer identifier does not have the `AAA99999AA-[AQ]` shape.
    #[error("Invalid customer ID '{value}': {source}")]
    InvalidCustomerId {
        value: String,
        #[source]
        source: ValidationError,
    },

    /// Item name is empty or too long.
    #[error("Invalid item '{name}': {source}")]
    InvalidItem {
        name: String,
        #[source]
        source: ValidationError,
    },

    /// Quantity is outside the range allowed by the operation.
    ///
    /// ## When This Occurs
    /// - `add_item` with a quantity outside `1..=max_add_quantity`
    /// - `update_item` with a negative quantity
    /// - `add_item` or `update_item` whose resulting quantity, total
    ///   quantity or total cost would overflow i64
    #[error("Invalid quantity {quantity}: {source}")]
    InvalidQuantity {
        quantity: i64,
        #[source]
        source: ValidationError,
    },

    /// Item name is well formed but has no catalog entry.
    ///
    /// Raised by `add_item`, and by `update_item` with a non-zero quantity.
    #[error("Item not in catalog: {0}")]
    UnknownItem(String),

    /// Limits passed to `Cart::with_limits` would reject every item.
    #[error("Invalid cart limits: {0}")]
    InvalidLimits(#[source] ValidationError),
}

impl CoreError {
    /// Returns true for [`CoreError::InvalidCustomerId`].
    pub fn is_invalid_customer_id(&self) -> bool {
        matches!(self, CoreError::InvalidCustomerId { .. })
    }

    /// Returns true for [`CoreError::InvalidItem`].
    pub fn is_invalid_item(&self) -> bool {
        matches!(self, CoreError::InvalidItem { .. })
    }

    /// Returns true for [`CoreError::InvalidQuantity`].
    pub fn is_invalid_quantity(&self) -> bool {
        matches!(self, CoreError::InvalidQuantity { .. })
    }

    /// Returns true for [`CoreError::UnknownItem`].
    pub fn is_unknown_item(&self) -> bool {
        matches!(self, CoreError::UnknownItem(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Produced by the [`crate::validation`] functions and wrapped into a
/// [`CoreError`] variant by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed customer ID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading [`crate::config::CartLimits`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML text could not be parsed into limits.
    #[error("Failed to parse cart limits: {0}")]
    Parse(#[from] toml::de::Error),

    /// A limit value is outside what the cart can honour.
    #[error("Invalid cart limit: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
