//! Integration tests for Paradise Nursery.
//!
//! These tests exercise the storefront against the real file-backed slot
//! store: mutate, drop the store, reopen from the same data directory, and
//! check that the restored cart matches. Each test gets its own temporary
//! data directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paradise-nursery-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use paradise_nursery_storefront::storage::FileSlotStore;
use paradise_nursery_storefront::store::{CART_SLOT_KEY, CartStore};

/// A temporary data directory that plays the role of one shopper's durable
/// storage across sessions.
pub struct TestDataDir {
    dir: tempfile::TempDir,
}

impl TestDataDir {
    /// Create a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp data dir"),
        }
    }

    /// A fresh slot store handle rooted at this directory.
    #[must_use]
    pub fn storage(&self) -> FileSlotStore {
        FileSlotStore::new(self.dir.path())
    }

    /// Open a cart store against this directory, as one session would.
    #[must_use]
    pub fn open_store(&self) -> CartStore {
        CartStore::open(Box::new(self.storage()))
    }

    /// Path of the file holding the cart snapshot.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.storage().slot_path(CART_SLOT_KEY)
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
