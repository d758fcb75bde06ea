//! Cart lines, cart state, and the transitions between cart states.
//!
//! [`CartState`] is the only meaningful piece of state in the system. The
//! four mutation methods are the only legal transitions, and each of them is
//! total: there is no input for which a transition fails or produces a
//! structurally invalid cart. Persistence and presentation live elsewhere;
//! this module is pure data.
//!
//! Two invariants hold for every reachable state:
//! - every key in the mapping equals the id of its line's product
//! - every line's quantity is at least 1 (a line dropping to zero is removed)

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A (product, quantity) pairing within the cart.
///
/// The serialized field names (`product`, `qty`) are part of the cart
/// snapshot wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,
    /// Units of the product in the cart, always >= 1.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The mapping from product id to cart line.
///
/// Iteration order carries no meaning; a sorted map just keeps the encoded
/// snapshot deterministic. Totals are recomputed from the lines on every
/// read rather than cached, so they cannot drift from the contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    lines: BTreeMap<ProductId, CartLine>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Creates a line with quantity 1 if the product is not in the cart,
    /// otherwise increments the existing line's quantity.
    pub fn add(&mut self, product: Product) {
        match self.lines.entry(product.id.clone()) {
            Entry::Occupied(mut entry) => {
                let line = entry.get_mut();
                line.quantity = line.quantity.saturating_add(1);
            }
            Entry::Vacant(entry) => {
                entry.insert(CartLine {
                    product,
                    quantity: 1,
                });
            }
        }
    }

    /// Set the quantity of the line for `id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line. If no line exists for
    /// `id` this is a no-op, not an error.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.lines.remove(id);
            return;
        }
        if let Some(line) = self.lines.get_mut(id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line for `id`. Absent ids are a silent no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.remove(id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Total price across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Get the line for `id`, if any.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Iterate over the cart lines.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the mapping satisfies the cart invariants.
    ///
    /// The transitions cannot produce an inconsistent state; this exists for
    /// decoded snapshots, where arbitrary JSON may type-check as a cart while
    /// carrying mismatched keys or zero quantities.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.lines
            .iter()
            .all(|(id, line)| *id == line.product.id && line.quantity > 0)
    }
}
