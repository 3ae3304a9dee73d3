//! Transaction-related types for the point-of-sale register
//!
//! This module defines finalized sales, their line items, and the payment
//! method used to settle them. A sale starts as a [`SaleDraft`] produced by
//! checkout and becomes a [`Transaction`] once it receives its identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::PosError;
use super::product::Price;

/// Receipt identifier
///
/// A random UUID assigned when a sale is appended to the store. Receipt
/// ids are the only stable handle for looking up or deleting a stored
/// transaction.
pub type ReceiptId = Uuid;

/// How a sale was settled
///
/// Cash requires a tendered amount covering the total and yields change.
/// Card charges the exact total and never yields change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash handed over by the customer
    Cash,

    /// Card charged for the exact total
    Card,
}

impl FromStr for PaymentMethod {
    type Err = PosError;

    /// Parse operator input, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(PosError::invalid_payment_method(s.trim())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
        }
    }
}

/// One line of a sale
///
/// Captures the product name and unit price as they were at the time of
/// sale, so later catalog edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name at the time of sale
    pub name: String,

    /// Units sold (always at least 1)
    pub qty: u64,

    /// Unit price in whole pesos at the time of sale
    pub price: Price,

    /// Line total, `qty * price`
    pub total: Price,
}

/// A settled sale that has not yet been persisted
///
/// Produced by checkout once payment is validated. It carries everything a
/// stored transaction does except the receipt id and timestamp, which are
/// assigned at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    /// Line items in the order they were rung up
    pub items: Vec<LineItem>,

    /// Sum of all line totals
    pub total: Price,

    /// How the sale was settled
    pub method: PaymentMethod,

    /// Cash received (equals `total` for card payments)
    pub cash: Price,

    /// Change returned (always 0 for card payments)
    pub change: Price,
}

/// A finalized, stored sale
///
/// This is the record shape persisted to the transaction store, one JSON
/// object per line. Field names and order match the wire format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique receipt identifier
    pub receipt_id: ReceiptId,

    /// Local wall-clock time of the sale, `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,

    /// Line items in the order they were rung up
    pub items: Vec<LineItem>,

    /// Sum of all line totals
    pub total: Price,

    /// How the sale was settled
    pub method: PaymentMethod,

    /// Cash received (equals `total` for card payments)
    pub cash: Price,

    /// Change returned (always 0 for card payments)
    pub change: Price,
}

impl Transaction {
    /// Finalize a draft into a stored transaction
    ///
    /// Assigns a fresh random receipt id and stamps the current local
    /// time. Everything else is carried over from the draft unchanged.
    pub fn finalize(draft: SaleDraft) -> Self {
        Transaction {
            receipt_id: Uuid::new_v4(),
            datetime: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            items: draft.items,
            total: draft.total,
            method: draft.method,
            cash: draft.cash,
            change: draft.change,
        }
    }
}
