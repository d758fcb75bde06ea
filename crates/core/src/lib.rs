//! Paradise Nursery Core - Shared types library.
//!
//! This crate provides the domain model used across all Paradise Nursery
//! components:
//! - `storefront` - Catalog, cart store, and persistence
//! - `cli` - Command-line storefront front end
//!
//! # Architecture
//!
//! The core crate contains only types and the cart state machine - no I/O,
//! no storage access. Cart transitions are total functions over [`CartState`],
//! so they can be exercised in tests without a storage backend or a front end.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus products
//! - [`cart`] - Cart lines, cart state, transitions, and derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartLine, CartState};
pub use types::*;
