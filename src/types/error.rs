//! Error types for the point-of-sale register
//!
//! This module defines all error types that can occur while operating the
//! register. Errors are designed to be descriptive and user-friendly for
//! terminal output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Bad operator input (unknown product, zero
//!   quantity, short cash, bad credentials, etc.). These are reported and
//!   the operator is prompted again.
//! - **Store Errors**: Corrupt transaction records, file I/O failures.
//!   These are fatal and abort the session.
//! - **Arithmetic Errors**: Overflow in total calculations. Fatal.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for the register
///
/// This enum represents all possible errors that can occur while running
/// the register. Each variant includes relevant context to help diagnose
/// and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PosError {
    /// Login attempt with an unknown username or a wrong password
    ///
    /// This is a recoverable error - the login screen is shown again.
    /// The message deliberately does not say which of the two was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Product index out of range for the catalog
    ///
    /// This is a recoverable error - the operator is prompted again.
    #[error("No product at position {index}: catalog has {count} products")]
    ProductNotFound {
        /// Zero-based index that was requested
        index: usize,
        /// Number of products in the catalog
        count: usize,
    },

    /// Quantity must be at least one
    ///
    /// This is a recoverable error - the line item is rejected and the
    /// cart remains unchanged.
    #[error("Quantity must be at least 1, got {qty}")]
    InvalidQuantity {
        /// The rejected quantity
        qty: u64,
    },

    /// Checkout attempted with no items in the cart
    ///
    /// This is a recoverable error - nothing is charged or persisted.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product rename to an empty or whitespace-only name
    ///
    /// This is a recoverable error - the catalog remains unchanged.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Cash checkout without a tendered amount
    ///
    /// This is a recoverable error - the sale is not finalized.
    #[error("Cash payment requires a tendered amount")]
    CashRequired,

    /// Tendered cash does not cover the cart total
    ///
    /// This is a recoverable error - the sale is not finalized and the
    /// cart remains intact.
    #[error("Insufficient cash: tendered \u{20b1}{tendered}, total due \u{20b1}{total}")]
    InsufficientCash {
        /// Amount of cash handed over
        tendered: u64,
        /// Cart total that must be covered
        total: u64,
    },

    /// Payment method string that is neither cash nor card
    ///
    /// This is a recoverable error - the operator is prompted again.
    #[error("Unknown payment method '{input}': expected cash or card")]
    InvalidPaymentMethod {
        /// The rejected input
        input: String,
    },

    /// Input that should have been a non-negative whole number
    ///
    /// This is a recoverable error - the operator is prompted again.
    #[error("Not a whole number: '{input}'")]
    InvalidNumber {
        /// The rejected input
        input: String,
    },

    /// Menu or list selection outside the offered range
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Invalid selection: '{input}'")]
    InvalidSelection {
        /// The rejected input
        input: String,
    },

    /// No stored transaction carries the given receipt id
    ///
    /// This is a recoverable error - the store remains unchanged.
    #[error("No transaction with receipt id {receipt_id}")]
    ReceiptNotFound {
        /// The receipt id that was looked up
        receipt_id: Uuid,
    },

    /// A line in the transaction store could not be decoded
    ///
    /// This is a fatal error - the store is not trusted and no partial
    /// results are returned.
    #[error("Corrupt transaction record at line {line}: {message}")]
    CorruptRecord {
        /// One-based line number in the store file
        line: usize,
        /// Description of the decode failure
        message: String,
    },

    /// I/O error occurred while reading or writing the store
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// Totals are kept in whole pesos as u64; an overflowing operation is
    /// rejected rather than wrapped.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

// Conversion from io::Error to PosError
impl From<std::io::Error> for PosError {
    fn from(error: std::io::Error) -> Self {
        PosError::Io {
            message: error.to_string(),
        }
    }
}

impl PosError {
    /// Whether this error is recoverable operator input
    ///
    /// Validation errors are reported on screen and the operator is
    /// prompted again. Everything else (corrupt store, I/O, overflow)
    /// aborts the session.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            PosError::CorruptRecord { .. } | PosError::Io { .. } | PosError::ArithmeticOverflow { .. }
        )
    }

    /// Create a ProductNotFound error
    pub fn product_not_found(index: usize, count: usize) -> Self {
        PosError::ProductNotFound { index, count }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(qty: u64) -> Self {
        PosError::InvalidQuantity { qty }
    }

    /// Create an InsufficientCash error
    pub fn insufficient_cash(tendered: u64, total: u64) -> Self {
        PosError::InsufficientCash { tendered, total }
    }

    /// Create an InvalidPaymentMethod error
    pub fn invalid_payment_method(input: &str) -> Self {
        PosError::InvalidPaymentMethod {
            input: input.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(input: &str) -> Self {
        PosError::InvalidNumber {
            input: input.to_string(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(input: &str) -> Self {
        PosError::InvalidSelection {
            input: input.to_string(),
        }
    }

    /// Create a ReceiptNotFound error
    pub fn receipt_not_found(receipt_id: Uuid) -> Self {
        PosError::ReceiptNotFound { receipt_id }
    }

    /// Create a CorruptRecord error
    pub fn corrupt_record(line: usize, message: impl Into<String>) -> Self {
        PosError::CorruptRecord {
            line,
            message: message.into(),
        }
    }

    /// Create an Io error
    pub fn io(message: impl Into<String>) -> Self {
        PosError::Io {
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        PosError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}
