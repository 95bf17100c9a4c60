//! # Cart
//!
//! A per-customer collection of `item name → quantity` entries.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  Operation                 Validation               State Change        │
//! │  ─────────                 ──────────               ────────────        │
//! │                                                                         │
//! │  add_item(name, n) ──────► name, 1..=100, catalog ► items[name] += n   │
//! │                                                                         │
//! │  update_item(name, n) ───► name, n >= 0 ──────────► items[name] = n    │
//! │                                                     (n == 0: remove)   │
//! │                                                                         │
//! │  remove_item(name) ──────► none ──────────────────► items.remove(name) │
//! │                                                                         │
//! │  items() ────────────────► none ──────────────────► (copy returned)    │
//! │                                                                         │
//! │  NOTE: validation runs first; a rejected call changes nothing.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every stored quantity is >= 1; a quantity of 0 removes the entry
//! - Every stored name has a catalog price
//! - `id` and `customer_id` never change after construction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::config::CartLimits;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartId, CustomerId};
use crate::validation::{validate_add_quantity, validate_item_name, validate_update_quantity};

/// Snapshot of cart contents, keyed by item name.
pub type CartItems = BTreeMap<String, i64>;

/// The shopping cart.
///
/// ## Usage
/// ```rust
/// use cartkit_core::Cart;
///
/// let mut cart = Cart::new("ABC12345DE-Q")?;
/// cart.add_item("apple", 10)?;
/// cart.add_item("banana", 15)?;
///
/// assert_eq!(cart.total_cost().cents(), 325);
/// # Ok::<(), cartkit_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cart {
    id: CartId,
    customer_id: CustomerId,
    items: CartItems,
    limits: CartLimits,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart for `customer_id` with default limits.
    ///
    /// ## Errors
    /// [`CoreError::InvalidCustomerId`] if the id does not match
    /// `^[A-Za-z]{3}[0-9]{5}[A-Za-z]{2}-[AQ]$`. No cart is created.
    pub fn new(customer_id: &str) -> CoreResult<Self> {
        Self::with_limits(customer_id, CartLimits::default())
    }

    /// Creates an empty cart that validates against `limits`.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidCustomerId`] as for [`Cart::new`]
    /// - [`CoreError::InvalidLimits`] if [`CartLimits::validate`] fails
    pub fn with_limits(customer_id: &str, limits: CartLimits) -> CoreResult<Self> {
        let customer_id = CustomerId::parse(customer_id)?;
        limits.validate().map_err(CoreError::InvalidLimits)?;
        let cart = Cart {
            id: CartId::new(),
            customer_id,
            items: CartItems::new(),
            limits,
            created_at: Utc::now(),
        };

        debug!(cart_id = %cart.id, customer_id = %cart.customer_id, "Created cart");
        Ok(cart)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CartId {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn limits(&self) -> &CartLimits {
        &self.limits
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds `quantity` of `name`, accumulating onto any existing entry.
    ///
    /// ## Errors
    /// Checked in this order, all before the cart is touched:
    /// - [`CoreError::InvalidItem`]: empty name or longer than the limit
    /// - [`CoreError::InvalidQuantity`]: quantity outside `1..=max_add_quantity`,
    ///   or a resulting quantity or total that would overflow
    /// - [`CoreError::UnknownItem`]: name not in the catalog
    pub fn add_item(&mut self, name: &str, quantity: i64) -> CoreResult<()> {
        self.check_name(name)?;
        validate_add_quantity(quantity, self.limits.max_add_quantity)
            .map_err(|source| CoreError::InvalidQuantity { quantity, source })?;
        Self::check_catalogued(name)?;

        let new_qty = self
            .quantity_of(name)
            .checked_add(quantity)
            .ok_or_else(|| total_overflow(quantity))?;
        self.check_totals_fit(name, new_qty, quantity)?;
        self.items.insert(name.to_string(), new_qty);

        debug!(cart_id = %self.id, item = %name, added = quantity, quantity = new_qty, "Added item");
        Ok(())
    }

    /// Sets the stored quantity of `name` to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity == 0`: same as [`Cart::remove_item`]
    /// - otherwise: replaces (does not add to) the stored quantity,
    ///   creating the entry if absent
    ///
    /// ## Errors
    /// - [`CoreError::InvalidItem`]: empty name or longer than the limit
    /// - [`CoreError::InvalidQuantity`]: negative quantity, or a total that
    ///   would overflow
    /// - [`CoreError::UnknownItem`]: non-zero quantity for an uncatalogued name
    pub fn update_item(&mut self, name: &str, quantity: i64) -> CoreResult<()> {
        self.check_name(name)?;
        validate_update_quantity(quantity)
            .map_err(|source| CoreError::InvalidQuantity { quantity, source })?;

        if quantity == 0 {
            self.remove_item(name);
            return Ok(());
        }

        Self::check_catalogued(name)?;
        self.check_totals_fit(name, quantity, quantity)?;
        self.items.insert(name.to_string(), quantity);

        debug!(cart_id = %self.id, item = %name, quantity, "Updated item");
        Ok(())
    }

    /// Removes `name` from the cart. Removing an absent item is a no-op.
    pub fn remove_item(&mut self, name: &str) {
        if self.items.remove(name).is_some() {
            debug!(cart_id = %self.id, item = %name, "Removed item");
        }
    }

    /// Removes every item. Identity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!(cart_id = %self.id, "Cleared cart");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns an independent copy of the items.
    ///
    /// ```rust
    /// use cartkit_core::Cart;
    ///
    /// let mut cart = Cart::new("ABC12345DE-A")?;
    /// cart.add_item("apple", 5)?;
    ///
    /// let mut items = cart.items();
    /// items.insert("apple".to_string(), 10);
    ///
    /// assert_eq!(cart.items()["apple"], 5);
    /// # Ok::<(), cartkit_core::CoreError>(())
    /// ```
    pub fn items(&self) -> CartItems {
        self.items.clone()
    }

    /// Stored quantity of `name`, or 0 if absent.
    pub fn quantity_of(&self, name: &str) -> i64 {
        self.items.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().sum()
    }

    /// Sum of `quantity × unit price` over all items.
    ///
    /// Every stored name was catalogued when it was added, so the
    /// missing-price branch of [`Catalog::total_cost`] is not reached here.
    /// Mutations that would push this past `i64::MAX` are rejected, so the
    /// sum is exact.
    pub fn total_cost(&self) -> Money {
        Catalog::standard().total_cost(self.items.iter().map(|(name, qty)| (name.as_str(), *qty)))
    }

    /// Serializable snapshot of the cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn check_name(&self, name: &str) -> CoreResult<()> {
        validate_item_name(name, self.limits.max_item_name_len).map_err(|source| {
            CoreError::InvalidItem {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Rejects setting `name` to `new_qty` if the cart's total quantity or
    /// total cost would then overflow.
    fn check_totals_fit(&self, name: &str, new_qty: i64, requested: i64) -> CoreResult<()> {
        let catalog = Catalog::standard();
        let mut lines = self
            .items
            .iter()
            .filter(|(item, _)| item.as_str() != name)
            .map(|(item, qty)| (item.as_str(), *qty))
            .chain(std::iter::once((name, new_qty)));

        lines
            .try_fold((0i64, Money::zero()), |(quantity, cost), (item, qty)| {
                let line = catalog
                    .price_of(item)
                    .unwrap_or_default()
                    .checked_multiply_quantity(qty)?;
                Some((quantity.checked_add(qty)?, cost.checked_add(line)?))
            })
            .map(|_| ())
            .ok_or_else(|| total_overflow(requested))
    }

    fn check_catalogued(name: &str) -> CoreResult<()> {
        if Catalog::standard().contains(name) {
            Ok(())
        } else {
            Err(CoreError::UnknownItem(name.to_string()))
        }
    }
}

fn total_overflow(quantity: i64) -> CoreError {
    CoreError::InvalidQuantity {
        quantity,
        source: ValidationError::OutOfRange {
            field: "cart total".to_string(),
            min: 0,
            max: i64::MAX,
        },
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart snapshot for handing to a frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub cart_id: String,
    pub customer_id: String,
    pub items: BTreeMap<String, i64>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cost_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            cart_id: cart.id().to_string(),
            customer_id: cart.customer_id().to_string(),
            items: cart.items(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cost_cents: cart.total_cost().cents(),
            created_at: cart.created_at(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = "ABC12345DE-A";

    fn test_cart() -> Cart {
        Cart::new(CUSTOMER).unwrap()
    }

    fn items_of(pairs: &[(&str, i64)]) -> CartItems {
        pairs
            .iter()
            .map(|(name, qty)| (name.to_string(), *qty))
            .collect()
    }

    #[test]
    fn test_cart_creation_with_valid_customer_id() {
        let cart = Cart::new("ABC12345DE-Q").unwrap();

        assert_eq!(cart.customer_id().as_str(), "ABC12345DE-Q");
        assert_eq!(cart.id().as_uuid().get_version_num(), 4);
        assert!(cart.is_empty());
        assert_eq!(cart.limits(), &CartLimits::default());
    }

    #[test]
    fn test_cart_creation_with_invalid_customer_id() {
        for id in ["12345ABCDE", "AB12CDE34", "ABCD1234-E", "AB12345DE-1", ""] {
            let err = Cart::new(id).unwrap_err();
            assert!(err.is_invalid_customer_id(), "{id:?} gave {err:?}");
        }
    }

    #[test]
    fn test_same_customer_gets_distinct_cart_ids() {
        let a = Cart::new(CUSTOMER).unwrap();
        let b = Cart::new(CUSTOMER).unwrap();

        assert_eq!(a.customer_id(), b.customer_id());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_add_item() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();

        assert_eq!(cart.items(), items_of(&[("apple", 5)]));
    }

    #[test]
    fn test_add_same_item_accumulates() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();
        cart.add_item("apple", 3).unwrap();

        assert_eq!(cart.items(), items_of(&[("apple", 8)]));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_may_accumulate_past_single_call_limit() {
        let mut cart = test_cart();
        cart.add_item("apple", 100).unwrap();
        cart.add_item("apple", 100).unwrap();

        assert_eq!(cart.quantity_of("apple"), 200);
    }

    #[test]
    fn test_add_item_with_invalid_name() {
        let mut cart = test_cart();

        assert!(cart.add_item(&"a".repeat(21), 1).unwrap_err().is_invalid_item());
        assert!(cart.add_item("", 1).unwrap_err().is_invalid_item());
    }

    #[test]
    fn test_add_item_with_invalid_quantity() {
        let mut cart = test_cart();

        for qty in [-1, 0, 101] {
            let err = cart.add_item("apple", qty).unwrap_err();
            assert!(err.is_invalid_quantity(), "{qty} gave {err:?}");
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_not_in_catalog() {
        let mut cart = test_cart();

        let err = cart.add_item("unknown_item", 1).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(ref name) if name == "unknown_item"));
    }

    #[test]
    fn test_add_checks_name_before_quantity_before_catalog() {
        let mut cart = test_cart();

        let long_unknown = "x".repeat(25);
        assert!(cart.add_item(&long_unknown, 0).unwrap_err().is_invalid_item());
        assert!(cart.add_item("kiwi", 0).unwrap_err().is_invalid_quantity());
    }

    #[test]
    fn test_add_overflow_is_rejected_without_change() {
        let mut cart = test_cart();
        cart.update_item("apple", i64::MAX / 10).unwrap();

        let err = cart.add_item("apple", 100).unwrap_err();
        assert!(err.is_invalid_quantity());
        assert_eq!(cart.quantity_of("apple"), i64::MAX / 10);
        assert_eq!(cart.total_cost().cents(), (i64::MAX / 10) * 10);
    }

    #[test]
    fn test_update_item_replaces() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();
        cart.update_item("apple", 10).unwrap();

        assert_eq!(cart.items(), items_of(&[("apple", 10)]));
    }

    #[test]
    fn test_update_item_creates_absent_entry() {
        let mut cart = test_cart();
        cart.update_item("orange", 250).unwrap();

        assert_eq!(cart.items(), items_of(&[("orange", 250)]));
    }

    #[test]
    fn test_update_item_to_zero_removes() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();
        cart.update_item("apple", 0).unwrap();

        assert_eq!(cart.items(), CartItems::new());
        assert!(!cart.contains("apple"));
    }

    #[test]
    fn test_update_item_to_zero_on_absent_is_noop() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();

        cart.update_item("banana", 0).unwrap();
        cart.update_item("not_in_catalog", 0).unwrap();

        assert_eq!(cart.items(), items_of(&[("apple", 5)]));
    }

    #[test]
    fn test_update_item_rejections_leave_cart_unchanged() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();

        assert!(cart.update_item("apple", -1).unwrap_err().is_invalid_quantity());
        assert!(cart.update_item(&"a".repeat(21), 3).unwrap_err().is_invalid_item());
        assert!(cart.update_item("kiwi", 3).unwrap_err().is_unknown_item());

        assert_eq!(cart.items(), items_of(&[("apple", 5)]));
    }

    #[test]
    fn test_update_rejects_line_total_overflow() {
        let mut cart = test_cart();
        cart.add_item("banana", 1).unwrap();

        let err = cart.update_item("apple", 1_000_000_000_000_000_000).unwrap_err();
        assert!(err.is_invalid_quantity());

        let err = cart.update_item("orange", i64::MAX).unwrap_err();
        assert!(err.is_invalid_quantity());

        assert_eq!(cart.items(), items_of(&[("banana", 1)]));
        assert_eq!(cart.total_cost().cents(), 15);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_update_rejects_cart_total_overflow() {
        let mut cart = test_cart();
        cart.update_item("apple", 900_000_000_000_000_000).unwrap();
        assert_eq!(cart.total_cost().cents(), 9_000_000_000_000_000_000);

        // 15 × 2e16 fits on its own but pushes the cart total past i64::MAX
        let err = cart.update_item("banana", 20_000_000_000_000_000).unwrap_err();
        assert!(err.is_invalid_quantity());
        assert!(!cart.contains("banana"));

        cart.update_item("banana", 10_000_000_000_000_000).unwrap();
        assert_eq!(cart.total_cost().cents(), 9_150_000_000_000_000_000);
    }

    #[test]
    fn test_update_replacing_large_quantity_is_checked_against_new_value() {
        let mut cart = test_cart();
        cart.update_item("apple", 900_000_000_000_000_000).unwrap();

        // the old apple line is replaced, not added to
        cart.update_item("apple", 1).unwrap();
        cart.update_item("banana", 20_000_000_000_000_000).unwrap();
        assert_eq!(cart.total_cost().cents(), 10 + 300_000_000_000_000_000);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();
        cart.remove_item("apple");

        assert_eq!(cart.items(), CartItems::new());
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();
        cart.remove_item("banana");
        cart.remove_item("");

        assert_eq!(cart.items(), items_of(&[("apple", 5)]));
    }

    #[test]
    fn test_get_total_cost() {
        let mut cart = test_cart();
        cart.add_item("apple", 10).unwrap();
        cart.add_item("banana", 15).unwrap();

        assert_eq!(cart.total_cost(), Money::from_cents(10 * 10 + 15 * 15));
        assert_eq!(cart.total_cost().cents(), 325);
    }

    #[test]
    fn test_empty_cart_costs_nothing() {
        assert!(test_cart().total_cost().is_zero());
    }

    #[test]
    fn test_defensive_copying_for_items() {
        let mut cart = test_cart();
        cart.add_item("apple", 5).unwrap();

        let mut items = cart.items();
        items.insert("apple".to_string(), 10);
        items.insert("banana".to_string(), 1);

        assert_ne!(cart.items(), items);
        assert_eq!(cart.items(), items_of(&[("apple", 5)]));
    }

    #[test]
    fn test_counts_and_clear() {
        let mut cart = test_cart();
        cart.add_item("apple", 2).unwrap();
        cart.add_item("orange", 3).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 5);

        let id = cart.id();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.id(), id);
        assert_eq!(cart.customer_id().as_str(), CUSTOMER);
    }

    #[test]
    fn test_custom_limits() {
        let limits = CartLimits {
            max_item_name_len: 5,
            max_add_quantity: 3,
        };
        let mut cart = Cart::with_limits(CUSTOMER, limits).unwrap();

        cart.add_item("apple", 3).unwrap();
        assert!(cart.add_item("apple", 4).unwrap_err().is_invalid_quantity());
        assert!(cart.add_item("banana", 1).unwrap_err().is_invalid_item());
        assert_eq!(cart.items(), items_of(&[("apple", 3)]));
    }

    #[test]
    fn test_with_limits_rejects_unusable_limits() {
        for limits in [
            CartLimits {
                max_item_name_len: 0,
                max_add_quantity: 0,
            },
            CartLimits {
                max_item_name_len: 0,
                max_add_quantity: 100,
            },
            CartLimits {
                max_item_name_len: 20,
                max_add_quantity: -5,
            },
        ] {
            let err = Cart::with_limits(CUSTOMER, limits).unwrap_err();
            assert!(matches!(err, CoreError::InvalidLimits(_)), "{limits:?} gave {err:?}");
        }
    }

    #[test]
    fn test_with_limits_checks_customer_id_first() {
        let limits = CartLimits {
            max_item_name_len: 0,
            max_add_quantity: 0,
        };
        let err = Cart::with_limits("bad", limits).unwrap_err();
        assert!(err.is_invalid_customer_id());
    }

    #[test]
    fn test_summary() {
        let mut cart = test_cart();
        cart.add_item("apple", 10).unwrap();
        cart.add_item("banana", 15).unwrap();

        let summary = cart.summary();
        assert_eq!(summary.cart_id, cart.id().to_string());
        assert_eq!(summary.customer_id, CUSTOMER);
        assert_eq!(summary.items, cart.items());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 25);
        assert_eq!(summary.total_cost_cents, 325);
        assert_eq!(summary.created_at, cart.created_at());
    }

    #[test]
    fn test_summary_json_shape() {
        let mut cart = test_cart();
        cart.add_item("orange", 2).unwrap();

        let json = serde_json::to_value(cart.summary()).unwrap();
        assert_eq!(json["customerId"], CUSTOMER);
        assert_eq!(json["items"]["orange"], 2);
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["totalCostCents"], 24);
        assert!(json["cartId"].is_string());
        assert!(json["createdAt"].is_string());
    }
}
