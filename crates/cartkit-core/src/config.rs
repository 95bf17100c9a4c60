//! # Cart Configuration
//!
//! Limits a cart validates against.
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml - every key is optional
//! max_item_name_len = 20
//! max_add_quantity = 100
//! ```
//!
//! The crate never reads files itself: the embedding application loads the
//! text and hands it to [`CartLimits::from_toml_str`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ValidationError};
use crate::{MAX_ADD_QUANTITY, MAX_ITEM_NAME_LEN};

// =============================================================================
// Cart Limits
// =============================================================================

/// Bounds applied by `add_item` and `update_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLimits {
    /// Longest accepted item name, in characters.
    #[serde(default = "default_max_item_name_len")]
    pub max_item_name_len: usize,

    /// Largest quantity a single `add_item` call may add.
    #[serde(default = "default_max_add_quantity")]
    pub max_add_quantity: i64,
}

fn default_max_item_name_len() -> usize {
    MAX_ITEM_NAME_LEN
}

fn default_max_add_quantity() -> i64 {
    MAX_ADD_QUANTITY
}

impl Default for CartLimits {
    fn default() -> Self {
        Self {
            max_item_name_len: default_max_item_name_len(),
            max_add_quantity: default_max_add_quantity(),
        }
    }
}

impl CartLimits {
    /// Parses limits from TOML text, filling missing keys with defaults.
    ///
    /// ```rust
    /// use cartkit_core::config::CartLimits;
    ///
    /// let limits = CartLimits::from_toml_str("max_add_quantity = 10").unwrap();
    /// assert_eq!(limits.max_add_quantity, 10);
    /// assert_eq!(limits.max_item_name_len, 20);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let limits: CartLimits = toml::from_str(text)?;
        limits.validate()?;

        debug!(
            max_item_name_len = limits.max_item_name_len,
            max_add_quantity = limits.max_add_quantity,
            "Loaded cart limits"
        );
        Ok(limits)
    }

    /// Rejects limits under which no item could ever be added.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_item_name_len == 0 {
            return Err(ValidationError::OutOfRange {
                field: "max_item_name_len".to_string(),
                min: 1,
                max: i64::MAX,
            });
        }

        if self.max_add_quantity < 1 {
            return Err(ValidationError::OutOfRange {
                field: "max_add_quantity".to_string(),
                min: 1,
                max: i64::MAX,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
