//! The cart store: the single owner of cart state.
//!
//! The store wraps the pure transitions of
//! [`CartState`](paradise_nursery_core::CartState) with the persistence
//! contract: every mutation is followed by a snapshot write to the durable
//! slot, and the snapshot is restored when the store is opened. The
//! in-memory state is authoritative; a failed write is logged and swallowed
//! so cart mutation never fails from the caller's point of view.

use paradise_nursery_core::{CartState, Price, Product, ProductId};

use crate::storage::SlotStore;

/// Slot key the cart snapshot is stored under.
///
/// Part of the wire contract: existing snapshots written under this key must
/// keep decoding across releases.
pub const CART_SLOT_KEY: &str = "pn_cart";

/// Owner of the cart state and its mutation operations.
pub struct CartStore {
    state: CartState,
    storage: Box<dyn SlotStore>,
}

impl CartStore {
    /// Open the cart store, restoring the persisted snapshot.
    ///
    /// A missing, unreadable, corrupt, or inconsistent snapshot yields an
    /// empty cart; opening never fails.
    #[must_use]
    pub fn open(storage: Box<dyn SlotStore>) -> Self {
        let state = restore(storage.as_ref());
        Self { state, storage }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// Creates a line with quantity 1, or increments the existing line. Any
    /// structurally valid product is accepted; callers are expected to pass
    /// catalog products.
    pub fn add_to_cart(&mut self, product: Product) {
        self.state.add(product);
        self.persist();
    }

    /// Set the quantity of an existing line to exactly `quantity`.
    ///
    /// Quantities of zero or less remove the line. Absent ids are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.state.set_quantity(id, quantity);
        self.persist();
    }

    /// Remove the line for `id`. Absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.state.remove(id);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.state.clear();
        self.persist();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    /// Total price across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.state.total_price()
    }

    /// Read access to the current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Encode the full state and write it to the durable slot.
    ///
    /// Failures are logged and swallowed; the in-memory state has already
    /// been committed and stays authoritative.
    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.state) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_SLOT_KEY, &snapshot) {
            tracing::warn!(error = %e, "failed to write cart snapshot, keeping in-memory state");
        }
    }
}

/// Decode the persisted snapshot, degrading to an empty cart on any failure.
fn restore(storage: &dyn SlotStore) -> CartState {
    let raw = match storage.get(CART_SLOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartState::new(),
        Err(e) => {
            tracing::warn!(error = %e, "cart snapshot unreadable, starting with an empty cart");
            return CartState::new();
        }
    };

    match serde_json::from_str::<CartState>(&raw) {
        Ok(state) if state.is_consistent() => {
            tracing::debug!(lines = state.len(), "cart restored from snapshot");
            state
        }
        Ok(_) => {
            tracing::warn!("cart snapshot is inconsistent, starting with an empty cart");
            CartState::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "cart snapshot is corrupt, starting with an empty cart");
            CartState::new()
        }
    }
}
