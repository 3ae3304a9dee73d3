//! Register facade
//!
//! This module provides the `Register` that orchestrates a point-of-sale
//! session by coordinating the Catalog, Cart, SessionGate, and
//! TransactionLog components.
//!
//! The register enforces the business rules such as:
//! - Product lookups validated against the catalog before ringing up
//! - Checkout settling payment before anything is persisted
//! - The cart clearing only after the sale is safely stored

use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::core::session::{CredentialTable, Role, SessionGate};
use crate::io::TransactionLog;
use crate::types::{LineItem, PaymentMethod, PosError, Price, Product, ReceiptId, Transaction};

/// The point-of-sale register
///
/// Orchestrates one operator session over a catalog, a cart, a credential
/// gate, and the persistent transaction store. All terminal workflows go
/// through this facade; it owns every piece of mutable state.
pub struct Register {
    catalog: Catalog,
    cart: Cart,
    gate: SessionGate,
    log: TransactionLog,
}

impl Register {
    /// Create a new register
    ///
    /// # Arguments
    ///
    /// * `catalog` - Products offered for sale
    /// * `credentials` - Accepted operator logins
    /// * `log` - Backing transaction store
    ///
    /// # Returns
    ///
    /// A register with an empty cart, ready for a login
    pub fn new(catalog: Catalog, credentials: CredentialTable, log: TransactionLog) -> Self {
        Register {
            catalog,
            cart: Cart::new(),
            gate: SessionGate::new(credentials),
            log,
        }
    }

    /// Check operator credentials and return the granted role
    ///
    /// # Errors
    ///
    /// Returns `PosError::InvalidCredentials` when no credential matches.
    pub fn login(&self, username: &str, password: &str) -> Result<Role, PosError> {
        self.gate.authenticate(username, password)
    }

    /// All products in listing order
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// The sale currently in progress
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Ring up `qty` units of the product at `product_index`
    ///
    /// The product's current name and price are captured into the line
    /// item, so later catalog edits do not affect this sale.
    ///
    /// # Arguments
    ///
    /// * `product_index` - Zero-based position in the catalog listing
    /// * `qty` - Units to sell, must be at least 1
    ///
    /// # Returns
    ///
    /// A copy of the appended line item
    ///
    /// # Errors
    ///
    /// Returns an error if the product index is out of range, the
    /// quantity is zero, or a total would overflow. The cart is unchanged
    /// on error.
    pub fn add_to_cart(&mut self, product_index: usize, qty: u64) -> Result<LineItem, PosError> {
        let product = self.catalog.get(product_index)?;
        let name = product.name.clone();
        let unit_price = product.price;

        self.cart.add(name, unit_price, qty)
    }

    /// Settle the cart, persist the sale, and clear the cart
    ///
    /// Payment is validated first; only a fully settled sale reaches the
    /// store. The cart is cleared only after the append succeeds, so a
    /// failed write leaves the sale intact for another attempt.
    ///
    /// # Arguments
    ///
    /// * `method` - How the customer is paying
    /// * `cash_tendered` - Cash handed over, required for cash payments
    ///
    /// # Returns
    ///
    /// The stored transaction, including its receipt id and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty, the payment does not cover
    /// the total, or the store cannot be written.
    pub fn checkout(
        &mut self,
        method: PaymentMethod,
        cash_tendered: Option<Price>,
    ) -> Result<Transaction, PosError> {
        let payment = self.cart.settle(method, cash_tendered)?;
        let draft = self.cart.to_draft(payment);

        let transaction = self.log.append(draft)?;
        self.cart.clear();

        Ok(transaction)
    }

    /// Abandon the sale in progress, if any
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Every stored transaction, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds a corrupt
    /// record.
    pub fn transactions(&self) -> Result<Vec<Transaction>, PosError> {
        self.log.load_all()
    }

    /// Look up one stored transaction by receipt id
    ///
    /// # Returns
    ///
    /// `Some(transaction)` if the id is present, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds a corrupt
    /// record.
    pub fn transaction(&self, receipt_id: ReceiptId) -> Result<Option<Transaction>, PosError> {
        let transactions = self.log.load_all()?;
        Ok(transactions
            .into_iter()
            .find(|t| t.receipt_id == receipt_id))
    }

    /// Delete one stored transaction by receipt id
    ///
    /// # Returns
    ///
    /// The deleted transaction
    ///
    /// # Errors
    ///
    /// Returns `PosError::ReceiptNotFound` if the id is not in the store.
    pub fn delete_transaction(&mut self, receipt_id: ReceiptId) -> Result<Transaction, PosError> {
        self.log.delete(receipt_id)
    }

    /// Rename a catalog product
    ///
    /// Stored transactions keep the old name; only future sales see the
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the trimmed name
    /// is empty.
    pub fn rename_product(&mut self, index: usize, new_name: &str) -> Result<(), PosError> {
        self.catalog.rename(index, new_name)
    }

    /// Change a catalog product's unit price
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn reprice_product(&mut self, index: usize, new_price: Price) -> Result<(), PosError> {
        self.catalog.reprice(index, new_price)
    }
}
