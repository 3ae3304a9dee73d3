//! Product-related types for the point-of-sale register
//!
//! This module defines the catalog entry type and the price alias used
//! throughout the system.

/// Price in whole pesos
///
/// All monetary values (unit prices, line totals, tendered cash, change)
/// are whole non-negative peso amounts. Fractional currency is out of
/// scope for this register.
pub type Price = u64;

/// A sellable product in the catalog
///
/// Products are identified by their position in the catalog listing.
/// Renaming a product does not touch transactions already stored; recorded
/// line items keep the name the product had at the time of sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Display name shown on listings and receipts
    pub name: String,

    /// Unit price in whole pesos
    pub price: Price,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}
