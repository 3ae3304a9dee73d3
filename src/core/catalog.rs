//! Product catalog module
//!
//! This module provides the `Catalog` struct which holds the ordered list
//! of sellable products and supports the admin editing operations.
//!
//! The Catalog is responsible for:
//! - Keeping products in a stable listing order
//! - Resolving product selections by position
//! - Renaming and repricing products with validation
//!
//! Catalog edits are in-memory only and last for the lifetime of the
//! process. Stored transactions are never rewritten by an edit.

use crate::types::{PosError, Price, Product};

/// The ordered list of products offered for sale
///
/// Products are addressed by their zero-based position in the listing.
/// The order is stable: edits change a product in place and never reorder
/// the list.
pub struct Catalog {
    /// Products in listing order
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list
    ///
    /// # Arguments
    ///
    /// * `products` - Products in the order they should be listed
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Create the catalog seeded with the default school-supply products
    ///
    /// # Returns
    ///
    /// A catalog with the four stock products, in listing order
    pub fn seed() -> Self {
        Catalog::new(vec![
            Product::new("ID Lace", 75),
            Product::new("Logo", 50),
            Product::new("Cartolina", 20),
            Product::new("Bond Paper", 1),
        ])
    }

    /// All products in listing order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its zero-based position
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position in the listing
    ///
    /// # Errors
    ///
    /// Returns `PosError::ProductNotFound` if the index is out of range.
    pub fn get(&self, index: usize) -> Result<&Product, PosError> {
        let count = self.products.len();
        self.products
            .get(index)
            .ok_or_else(|| PosError::product_not_found(index, count))
    }

    /// Rename a product in place
    ///
    /// The new name is trimmed before validation and storage.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position in the listing
    /// * `new_name` - Replacement name, must not be empty after trimming
    ///
    /// # Errors
    ///
    /// Returns `PosError::ProductNotFound` if the index is out of range,
    /// or `PosError::EmptyName` if the trimmed name is empty. The catalog
    /// is unchanged on error.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), PosError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(PosError::EmptyName);
        }

        let count = self.products.len();
        let product = self
            .products
            .get_mut(index)
            .ok_or_else(|| PosError::product_not_found(index, count))?;

        product.name = trimmed.to_string();
        Ok(())
    }

    /// Change a product's unit price in place
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position in the listing
    /// * `new_price` - Replacement unit price in whole pesos
    ///
    /// # Errors
    ///
    /// Returns `PosError::ProductNotFound` if the index is out of range.
    pub fn reprice(&mut self, index: usize, new_price: Price) -> Result<(), PosError> {
        let count = self.products.len();
        let product = self
            .products
            .get_mut(index)
            .ok_or_else(|| PosError::product_not_found(index, count))?;

        product.price = new_price;
        Ok(())
    }
}
