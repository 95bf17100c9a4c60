//! # Domain Types
//!
//! Identity types owned by a [`Cart`](crate::cart::Cart).
//!
//! ## Dual-Key Identity Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cart Identity                                  │
//! │                                                                         │
//! │  ┌─────────────────────────┐      ┌─────────────────────────┐          │
//! │  │        CartId           │      │       CustomerId        │          │
//! │  │  ─────────────────────  │      │  ─────────────────────  │          │
//! │  │  UUID v4, generated     │      │  issued externally      │          │
//! │  │  unique per cart        │      │  validated on parse     │          │
//! │  └─────────────────────────┘      └─────────────────────────┘          │
//! │                                                                         │
//! │  Both are set once in Cart::new and exposed through getters only.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_customer_id;

// =============================================================================
// Cart ID
// =============================================================================

/// Opaque unique identifier of a cart.
///
/// ## Why UUID v4?
/// Random, collision-resistant and needs no coordination between carts.
/// Uniqueness is probabilistic, which is enough for in-memory carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        CartId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Customer ID
// =============================================================================

/// A validated customer identifier such as `ABC12345DE-Q`.
///
/// There is no way to build one without going through
/// [`validate_customer_id`], so holding a `CustomerId` proves the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Parses and validates a customer identifier.
    ///
    /// ```rust
    /// use cartkit_core::types::CustomerId;
    ///
    /// let id = CustomerId::parse("ABC12345DE-Q").unwrap();
    /// assert_eq!(id.as_str(), "ABC12345DE-Q");
    ///
    /// assert!(CustomerId::parse("12345ABCDE").is_err());
    /// ```
    pub fn parse(value: &str) -> CoreResult<Self> {
        validate_customer_id(value).map_err(|source| CoreError::InvalidCustomerId {
            value: value.to_string(),
            source,
        })?;

        Ok(CustomerId(value.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CustomerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerId::parse(s)
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CustomerId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_id_is_uuid_v4() {
        let id = CartId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_cart_ids_are_distinct() {
        assert_ne!(CartId::new(), CartId::new());
    }

    #[test]
    fn test_cart_id_display_round_trips_through_uuid() {
        let id = CartId::new();
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(&parsed, id.as_uuid());
    }

    #[test]
    fn test_customer_id_parse() {
        let id: CustomerId = "ABC12345DE-A".parse().unwrap();
        assert_eq!(id.to_string(), "ABC12345DE-A");

        let err = CustomerId::parse("ABCD1234-E").unwrap_err();
        assert!(err.is_invalid_customer_id());
    }

    #[test]
    fn test_customer_id_deserialize_validates() {
        let ok: CustomerId = serde_json::from_str("\"ABC12345DE-Q\"").unwrap();
        assert_eq!(ok.as_str(), "ABC12345DE-Q");

        let bad: Result<CustomerId, _> = serde_json::from_str("\"AB12CDE34\"");
        assert!(bad.is_err());
    }
}
