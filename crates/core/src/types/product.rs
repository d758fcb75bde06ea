//! Product record as supplied by the catalog.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the store.
///
/// Products are immutable and externally supplied; the cart holds copies of
/// them inside its lines so a persisted cart stays renderable on its own.
/// The serialized field names are part of the cart snapshot wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category used to group the catalog (e.g. "Succulents").
    pub category: String,
    /// Unit price.
    pub price: Price,
    /// Reference to the product image.
    #[serde(rename = "imageRef")]
    pub image_ref: String,
}
