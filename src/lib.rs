//! Point-of-Sale Register Library
//!
//! # Overview
//!
//! This library provides a terminal point-of-sale register with a JSON
//! Lines transaction store, a product catalog, and role-gated workflows.
//!
//! # Architecture
//!
//! Leaf modules first, then the layers that drive them:
//!
//! - [`types`] - Core data types (Product, Transaction, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Register business logic:
//!   - [`core::register`] - Session orchestration over all components
//!   - [`core::catalog`] - Product listing and admin edits
//!   - [`core::cart`] - Line item accumulation and settlement
//!   - [`core::session`] - Credentials and the role gate
//! - [`io`] - The JSON Lines transaction store
//! - [`terminal`] - The interactive colored frontend
//!
//! # Roles
//!
//! Two operator roles are supported:
//!
//! - **Cashier**: Rings up products into a cart and settles with cash or card
//! - **Admin**: Reviews and deletes stored transactions, edits the catalog
//!
//! # The Store
//!
//! Every finalized sale is appended to a plain text file as one JSON
//! object per line. Reads load the whole file; a single undecodable line
//! fails the read rather than silently dropping history.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod terminal;
pub mod types;

pub use core::{Cart, Catalog, Credential, CredentialTable, Register, Role, SessionGate};
pub use io::TransactionLog;
pub use types::{
    LineItem, PaymentMethod, PosError, Price, Product, ReceiptId, SaleDraft, Transaction,
};
