//! Core business logic module
//!
//! This module contains the core point-of-sale components:
//! - `catalog` - Product listing and admin edit operations
//! - `cart` - Line item accumulation and payment settlement
//! - `session` - Operator credentials and the role gate
//! - `register` - Session orchestration over all of the above

pub mod cart;
pub mod catalog;
pub mod register;
pub mod session;

pub use cart::{Cart, Payment};
pub use catalog::Catalog;
pub use register::Register;
pub use session::{Credential, CredentialTable, Role, SessionGate};
