//! Cart and wishlist records.
//!
//! These are the records the state managers persist. Serialized field names
//! are camelCase to match the persisted record layout (`productId`,
//! `unitPrice`, ...).

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::quantity::Quantity;
use super::size::Size;

/// Catalog presentation fields, snapshotted when an item is saved.
///
/// Duplicated from the catalog at add-time and never reconciled against
/// later catalog changes. Informational only: none of these fields take
/// part in line identity or pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    /// Product display name.
    pub name: String,
    /// Brand name (e.g., "Nike").
    #[serde(default)]
    pub brand: Option<String>,
    /// Colorway description.
    #[serde(default)]
    pub color: Option<String>,
    /// Primary image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Free-form product description.
    #[serde(default)]
    pub description: Option<String>,
    /// Condition label (e.g., "new", "used - excellent").
    #[serde(default)]
    pub condition: Option<String>,
}

impl ItemDetails {
    /// Create details with just a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One purchasable selection in a cart.
///
/// A line's identity key is the pair (`product_id`, `size`): the same
/// product at two different sizes is two distinct lines, and one cart holds
/// at most one line per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Stable reference to a catalog item.
    pub product_id: ProductId,
    /// Selected size; part of the line's identity key.
    pub size: Size,
    /// Number of units, always at least 1.
    pub quantity: Quantity,
    /// Unit price snapshotted at add-time; not re-fetched.
    pub unit_price: Price,
    /// Presentation fields snapshotted from the catalog.
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl CartLine {
    /// Create a new cart line.
    #[must_use]
    pub const fn new(
        product_id: ProductId,
        size: Size,
        quantity: Quantity,
        unit_price: Price,
        details: ItemDetails,
    ) -> Self {
        Self {
            product_id,
            size,
            quantity,
            unit_price,
            details,
        }
    }

    /// Whether this line is keyed by the given product and size.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, size: &Size) -> bool {
        &self.product_id == product_id && &self.size == size
    }

    /// The line total: unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }
}

/// One saved-for-later product in a wishlist.
///
/// `product_id` is unique within one wishlist; saving an already-present
/// product is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Stable reference to a catalog item; unique key within the wishlist.
    pub product_id: ProductId,
    /// Presentation fields snapshotted from the catalog.
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl WishlistEntry {
    /// Create a new wishlist entry.
    #[must_use]
    pub const fn new(product_id: ProductId, details: ItemDetails) -> Self {
        Self {
            product_id,
            details,
        }
    }
}
