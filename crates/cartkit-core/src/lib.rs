//! # cartkit-core: In-Memory Shopping Cart
//!
//! Validates a customer identifier, accumulates catalog items with
//! quantities, and prices the result against a fixed catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    cartkit-core (THIS CRATE)                            │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │   cart    │  │  catalog  │  │   money   │  │ validation│           │
//! │   │   Cart    │─►│  Catalog  │─►│   Money   │  │   rules   │           │
//! │   │CartSummary│  │ (static)  │  │           │  │           │           │
//! │   └─────┬─────┘  └───────────┘  └───────────┘  └─────▲─────┘           │
//! │         │                                            │                  │
//! │         └───────────────── types / config ───────────┘                  │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • SINGLE-THREADED                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - the `Cart` and its serializable `CartSummary`
//! - [`catalog`] - the static price list
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - `CartId` and `CustomerId`
//! - [`validation`] - customer id, item name and quantity rules
//! - [`config`] - `CartLimits`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cartkit_core::Cart;
//!
//! let mut cart = Cart::new("ABC12345DE-Q")?;
//! cart.add_item("apple", 5)?;
//! cart.add_item("apple", 3)?;
//! cart.update_item("banana", 2)?;
//!
//! assert_eq!(cart.quantity_of("apple"), 8);
//! assert_eq!(cart.total_cost().cents(), 8 * 10 + 2 * 15);
//!
//! assert!(cart.add_item("unknown_item", 1).unwrap_err().is_unknown_item());
//! # Ok::<(), cartkit_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItems, CartSummary};
pub use catalog::Catalog;
pub use config::CartLimits;
pub use error::{ConfigError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartId, CustomerId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 20;

/// Default maximum quantity accepted by a single `add_item` call.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// `update_item` has no upper bound.
pub const MAX_ADD_QUANTITY: i64 = 100;
