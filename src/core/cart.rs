//! Cart and checkout arithmetic module
//!
//! This module provides the `Cart` struct which accumulates line items for
//! the sale in progress, and the settlement logic that turns a cart and a
//! payment into a persistable sale draft.
//!
//! The Cart is responsible for:
//! - Appending line items with checked total arithmetic
//! - Tracking the running total across all lines
//! - Validating payment against the total at settlement
//!
//! Lines are append-only. Adding the same product twice produces two
//! separate lines rather than merging quantities.

use crate::types::{LineItem, PaymentMethod, PosError, Price, SaleDraft};

/// The outcome of settling a cart against a payment
///
/// For cash payments `cash` is the tendered amount and `change` is the
/// surplus over the total. For card payments `cash` equals the total and
/// `change` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    /// How the sale was settled
    pub method: PaymentMethod,

    /// Cash received
    pub cash: Price,

    /// Change returned
    pub change: Price,
}

/// The sale in progress
///
/// Accumulates line items and their running total until checkout settles
/// the sale or the operator abandons it.
pub struct Cart {
    /// Line items in ring-up order
    items: Vec<LineItem>,

    /// Sum of all line totals
    total: Price,
}

impl Cart {
    /// Create a new empty cart
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Line items in ring-up order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Running total of all line items
    pub fn total(&self) -> Price {
        self.total
    }

    /// Whether the cart has no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a line item for `qty` units of a product
    ///
    /// The line total and new cart total are computed with checked
    /// arithmetic before anything is stored, so a failed add leaves the
    /// cart exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `name` - Product name as it should appear on the receipt
    /// * `unit_price` - Unit price in whole pesos
    /// * `qty` - Units to sell, must be at least 1
    ///
    /// # Returns
    ///
    /// A copy of the appended line item
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The quantity is zero
    /// - The line total or the new cart total would overflow
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Price,
        qty: u64,
    ) -> Result<LineItem, PosError> {
        if qty == 0 {
            return Err(PosError::invalid_quantity(qty));
        }

        let line_total = unit_price
            .checked_mul(qty)
            .ok_or_else(|| PosError::arithmetic_overflow("line total"))?;

        let new_total = self
            .total
            .checked_add(line_total)
            .ok_or_else(|| PosError::arithmetic_overflow("cart total"))?;

        let item = LineItem {
            name: name.into(),
            qty,
            price: unit_price,
            total: line_total,
        };

        // Update cart state only after all checks pass
        self.items.push(item.clone());
        self.total = new_total;

        Ok(item)
    }

    /// Validate a payment against the cart total
    ///
    /// Cash must be tendered and must cover the total; change is the
    /// surplus. Card charges the exact total with no change. The cart
    /// itself is not modified; clearing happens once the sale is stored.
    ///
    /// # Arguments
    ///
    /// * `method` - How the customer is paying
    /// * `cash_tendered` - Cash handed over, required for cash payments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cart is empty
    /// - The method is cash and no amount was tendered
    /// - The tendered cash does not cover the total
    pub fn settle(
        &self,
        method: PaymentMethod,
        cash_tendered: Option<Price>,
    ) -> Result<Payment, PosError> {
        if self.items.is_empty() {
            return Err(PosError::EmptyCart);
        }

        match method {
            PaymentMethod::Cash => {
                let tendered = cash_tendered.ok_or(PosError::CashRequired)?;
                if tendered < self.total {
                    return Err(PosError::insufficient_cash(tendered, self.total));
                }
                Ok(Payment {
                    method,
                    cash: tendered,
                    change: tendered - self.total,
                })
            }
            PaymentMethod::Card => Ok(Payment {
                method,
                cash: self.total,
                change: 0,
            }),
        }
    }

    /// Snapshot the cart and a validated payment into a sale draft
    pub fn to_draft(&self, payment: Payment) -> SaleDraft {
        SaleDraft {
            items: self.items.clone(),
            total: self.total,
            method: payment.method,
            cash: payment.cash,
            change: payment.change,
        }
    }

    /// Remove all line items and reset the total to zero
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cart_with_logo_and_cartolina() -> Cart {
        let mut cart = Cart::new();
        cart.add("Logo", 50, 2).unwrap();
        cart.add("Cartolina", 20, 1).unwrap();
        cart
    }

    #[test]
    fn test_add_accumulates_total() {
        let cart = cart_with_logo_and_cartolina();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total(), 120);
    }

    #[test]
    fn test_add_returns_the_line_item() {
        let mut cart = Cart::new();
        let item = cart.add("Logo", 50, 2).unwrap();
        assert_eq!(item.name, "Logo");
        assert_eq!(item.qty, 2);
        assert_eq!(item.price, 50);
        assert_eq!(item.total, 100);
    }

    #[test]
    fn test_add_same_product_twice_keeps_separate_lines() {
        let mut cart = Cart::new();
        cart.add("Logo", 50, 1).unwrap();
        cart.add("Logo", 50, 2).unwrap();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total(), 150);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();
        let error = cart.add("Logo", 50, 0).unwrap_err();
        assert_eq!(error, PosError::InvalidQuantity { qty: 0 });
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_add_line_total_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add("Logo", 50, 1).unwrap();
        let error = cart.add("Bulk", u64::MAX, 2).unwrap_err();
        assert_eq!(
            error,
            PosError::ArithmeticOverflow {
                operation: "line total".to_string()
            }
        );
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), 50);
    }

    #[test]
    fn test_add_cart_total_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add("Bulk", u64::MAX, 1).unwrap();
        let error = cart.add("Logo", 50, 1).unwrap_err();
        assert_eq!(
            error,
            PosError::ArithmeticOverflow {
                operation: "cart total".to_string()
            }
        );
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), u64::MAX);
    }

    #[test]
    fn test_settle_empty_cart_rejected() {
        let cart = Cart::new();
        let error = cart.settle(PaymentMethod::Cash, Some(100)).unwrap_err();
        assert_eq!(error, PosError::EmptyCart);
    }

    #[test]
    fn test_settle_cash_without_amount_rejected() {
        let cart = cart_with_logo_and_cartolina();
        let error = cart.settle(PaymentMethod::Cash, None).unwrap_err();
        assert_eq!(error, PosError::CashRequired);
    }

    #[test]
    fn test_settle_cash_short_rejected() {
        let cart = cart_with_logo_and_cartolina();
        let error = cart.settle(PaymentMethod::Cash, Some(119)).unwrap_err();
        assert_eq!(
            error,
            PosError::InsufficientCash {
                tendered: 119,
                total: 120
            }
        );
    }

    #[rstest]
    #[case::exact(120, 0)]
    #[case::with_change(150, 30)]
    fn test_settle_cash_covering_total(#[case] tendered: u64, #[case] expected_change: u64) {
        let cart = cart_with_logo_and_cartolina();
        let payment = cart.settle(PaymentMethod::Cash, Some(tendered)).unwrap();
        assert_eq!(payment.method, PaymentMethod::Cash);
        assert_eq!(payment.cash, tendered);
        assert_eq!(payment.change, expected_change);
    }

    #[rstest]
    #[case::no_amount(None)]
    #[case::ignored_amount(Some(999))]
    fn test_settle_card_charges_exact_total(#[case] cash_tendered: Option<u64>) {
        let cart = cart_with_logo_and_cartolina();
        let payment = cart.settle(PaymentMethod::Card, cash_tendered).unwrap();
        assert_eq!(payment.method, PaymentMethod::Card);
        assert_eq!(payment.cash, 120);
        assert_eq!(payment.change, 0);
    }

    #[test]
    fn test_to_draft_snapshots_items_and_payment() {
        let cart = cart_with_logo_and_cartolina();
        let payment = cart.settle(PaymentMethod::Cash, Some(150)).unwrap();
        let draft = cart.to_draft(payment);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.total, 120);
        assert_eq!(draft.method, PaymentMethod::Cash);
        assert_eq!(draft.cash, 150);
        assert_eq!(draft.change, 30);
    }

    #[test]
    fn test_clear_resets_cart() {
        let mut cart = cart_with_logo_and_cartolina();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
