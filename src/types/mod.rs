//! Types module
//!
//! The data model shared by every layer of the register, split by concern:
//! - `product`: Catalog entries and the price alias
//! - `transaction`: Sales, line items, and payment methods
//! - `error`: Error types for the register

pub mod error;
pub mod product;
pub mod transaction;

pub use error::PosError;
pub use product::{Price, Product};
pub use transaction::{LineItem, PaymentMethod, ReceiptId, SaleDraft, Transaction};
