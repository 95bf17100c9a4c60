//! # Catalog
//!
//! The fixed price list every cart prices against.
//!
//! | Item   | Unit price |
//! |--------|-----------:|
//! | apple  | 10         |
//! | banana | 15         |
//! | orange | 12         |
//!
//! Prices are in minor units. The table is built once on first use and is
//! read-only afterwards, so all carts share the same instance.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::warn;

use crate::money::Money;

static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_entries([
        ("apple", Money::from_cents(10)),
        ("banana", Money::from_cents(15)),
        ("orange", Money::from_cents(12)),
    ])
});

/// Read-only mapping from item name to unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    prices: BTreeMap<&'static str, Money>,
}

impl Catalog {
    /// Returns the shared catalog.
    ///
    /// ```rust
    /// use cartkit_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.price_of("banana").map(|p| p.cents()), Some(15));
    /// assert!(catalog.price_of("kiwi").is_none());
    /// ```
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    fn from_entries(entries: impl IntoIterator<Item = (&'static str, Money)>) -> Self {
        Catalog {
            prices: entries.into_iter().collect(),
        }
    }

    /// Unit price of `name`, if catalogued.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.prices.get(name).copied()
    }

    /// Whether `name` has a catalog entry.
    pub fn contains(&self, name: &str) -> bool {
        self.prices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Money)> + '_ {
        self.prices.iter().map(|(name, price)| (*name, *price))
    }

    /// Prices a set of `(name, quantity)` lines.
    ///
    /// ## Missing Prices
    /// A line whose name has no catalog entry contributes zero and is
    /// logged at `warn`. The cart never stores such a line, so this only
    /// matters to callers pricing their own lines.
    pub fn total_cost<'a, I>(&self, lines: I) -> Money
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        lines
            .into_iter()
            .map(|(name, quantity)| match self.price_of(name) {
                Some(price) => price.multiply_quantity(quantity),
                None => {
                    warn!(item = %name, quantity, "No catalog price, counting as zero");
                    Money::zero()
                }
            })
            .sum()
    }
}
