//! Session and role gate module
//!
//! This module provides login for the two operator roles. Credentials are
//! plain in-memory entries; this register is a training simulator and
//! makes no attempt at real credential security.
//!
//! Usernames match case-insensitively, passwords match exactly.

use tracing::{info, warn};

use crate::types::PosError;

/// Operator role granted by a successful login
///
/// The role decides which workflow the terminal runs: cashiers ring up
/// sales, admins manage stored transactions and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manages transaction history and the product catalog
    Admin,

    /// Rings up sales
    Cashier,
}

/// One username/password entry and the role it grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Login name, matched case-insensitively
    pub username: String,

    /// Password, matched exactly
    pub password: String,

    /// Role granted on a successful match
    pub role: Role,
}

impl Credential {
    /// Create a new credential entry
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Credential {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

/// The set of accepted logins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    /// Create a credential table from explicit entries
    pub fn new(entries: Vec<Credential>) -> Self {
        CredentialTable { entries }
    }

    /// Create the table seeded with the two demo operators
    ///
    /// # Returns
    ///
    /// A table accepting `admin`/`1234` as [`Role::Admin`] and
    /// `cashier`/`1234` as [`Role::Cashier`]
    pub fn seed() -> Self {
        CredentialTable::new(vec![
            Credential::new("admin", "1234", Role::Admin),
            Credential::new("cashier", "1234", Role::Cashier),
        ])
    }

    /// Find the entry matching a username, case-insensitively
    fn find(&self, username: &str) -> Option<&Credential> {
        self.entries
            .iter()
            .find(|entry| entry.username.eq_ignore_ascii_case(username))
    }
}

/// Validates operator logins against a credential table
pub struct SessionGate {
    credentials: CredentialTable,
}

impl SessionGate {
    /// Create a session gate over the given credential table
    pub fn new(credentials: CredentialTable) -> Self {
        SessionGate { credentials }
    }

    /// Check a username/password pair and return the granted role
    ///
    /// The username is matched case-insensitively, the password exactly.
    ///
    /// # Arguments
    ///
    /// * `username` - Login name as typed by the operator
    /// * `password` - Password as typed by the operator
    ///
    /// # Errors
    ///
    /// Returns `PosError::InvalidCredentials` when no entry matches. The
    /// error does not reveal whether the username or the password was
    /// wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Role, PosError> {
        match self.credentials.find(username) {
            Some(entry) if entry.password == password => {
                info!(username = %entry.username, role = ?entry.role, "operator logged in");
                Ok(entry.role)
            }
            _ => {
                warn!(username = %username, "rejected login attempt");
                Err(PosError::InvalidCredentials)
            }
        }
    }
}
