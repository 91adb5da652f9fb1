//! Cart line quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is below the minimum of 1.
    #[error("quantity must be at least 1")]
    BelowMinimum,
}

/// A cart line quantity.
///
/// Quantities are always at least 1. Zero is not representable: removing a
/// line is the only way for an item to leave the cart, so a stored record
/// carrying a zero quantity is malformed and rejects at deserialization.
///
/// ## Examples
///
/// ```
/// use sneakfit_core::Quantity;
///
/// assert!(Quantity::new(1).is_ok());
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Minimum representable quantity.
    pub const MIN: u32 = 1;

    /// A quantity of one.
    pub const ONE: Self = Self(1);

    /// Create a `Quantity` from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::BelowMinimum`] if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, QuantityError> {
        if count < Self::MIN {
            return Err(QuantityError::BelowMinimum);
        }
        Ok(Self(count))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities, saturating at `u32::MAX`.
    ///
    /// Used when merging cart lines; quantities are not capped, so the sum
    /// simply saturates instead of wrapping.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
