//! File-backed transaction store
//!
//! Persists finalized sales as JSON Lines: one complete JSON object per
//! line, appended in sale order. Delegates the line codec to the
//! json_format module.
//!
//! # Design
//!
//! The log keeps no in-memory cache: every read loads the whole file and
//! every delete rewrites it. Checkout, the common path, only appends.
//! Exactly one process may use a store file at a time; nothing locks the
//! file against a second writer.
//!
//! # Error Handling
//!
//! - A missing store file is not an error: reads create it empty
//! - Any undecodable line fails the whole read with its line number;
//!   no partial history is ever returned
//! - Appends never rewrite or reorder lines already in the file

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::io::json_format;
use crate::types::{PosError, ReceiptId, SaleDraft, Transaction};

/// File-backed append-only store of finalized sales
pub struct TransactionLog {
    path: PathBuf,
}

impl TransactionLog {
    /// Create a log over the given store file
    ///
    /// The file itself is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TransactionLog { path: path.into() }
    }

    /// Load every stored transaction, oldest first
    ///
    /// If the store file does not exist it is created empty and zero
    /// transactions are returned. Blank lines are skipped; any other
    /// undecodable line aborts the load.
    ///
    /// # Errors
    ///
    /// Returns `PosError::CorruptRecord` with the one-based line number
    /// of the first bad line, or `PosError::Io` on file system errors.
    pub fn load_all(&self) -> Result<Vec<Transaction>, PosError> {
        if !self.path.exists() {
            File::create(&self.path)?;
            debug!(path = %self.path.display(), "created empty transaction store");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;

        let mut transactions = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            transactions.push(json_format::parse_line(line, index + 1)?);
        }

        debug!(count = transactions.len(), "loaded transaction store");
        Ok(transactions)
    }

    /// Finalize a draft and append it to the store
    ///
    /// The draft receives its receipt id and timestamp here, then is
    /// written as one new line. Lines already in the file are never
    /// rewritten or reordered by an append.
    ///
    /// # Returns
    ///
    /// The stored transaction, including its assigned receipt id
    ///
    /// # Errors
    ///
    /// Returns `PosError::Io` if the line cannot be written.
    pub fn append(&self, draft: SaleDraft) -> Result<Transaction, PosError> {
        let transaction = Transaction::finalize(draft);
        let line = json_format::to_line(&transaction)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;

        info!(
            receipt_id = %transaction.receipt_id,
            total = transaction.total,
            method = %transaction.method,
            "recorded sale"
        );
        Ok(transaction)
    }

    /// Replace the entire store with the given transactions, in order
    ///
    /// # Errors
    ///
    /// Returns `PosError::Io` if the file cannot be rewritten.
    pub fn rewrite_all(&self, transactions: &[Transaction]) -> Result<(), PosError> {
        let mut file = File::create(&self.path)?;
        for transaction in transactions {
            writeln!(file, "{}", json_format::to_line(transaction)?)?;
        }
        Ok(())
    }

    /// Delete the transaction with the given receipt id
    ///
    /// Loads the store, removes the matching record, and rewrites the
    /// remaining records in their original order.
    ///
    /// # Returns
    ///
    /// The deleted transaction
    ///
    /// # Errors
    ///
    /// Returns `PosError::ReceiptNotFound` if no stored transaction
    /// carries the id; the store file is left untouched in that case.
    pub fn delete(&self, receipt_id: ReceiptId) -> Result<Transaction, PosError> {
        let mut transactions = self.load_all()?;

        let position = transactions
            .iter()
            .position(|t| t.receipt_id == receipt_id)
            .ok_or_else(|| PosError::receipt_not_found(receipt_id))?;

        let removed = transactions.remove(position);
        self.rewrite_all(&transactions)?;

        info!(receipt_id = %receipt_id, "deleted transaction");
        Ok(removed)
    }
}
