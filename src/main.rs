//! Point-of-Sale Register CLI
//!
//! Interactive terminal register for a small school supplies store.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --store /var/lib/pos/transactions.json
//! RUST_LOG=debug cargo run 2>register.log
//! ```
//!
//! The program shows a login screen, then the dashboard for the logged-in
//! role. Cashiers ring up sales; admins review history and edit products.
//! Sales are appended to the transaction store as they are finalized.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; stdout is
//! reserved for the interactive screens.
//!
//! # Exit Codes
//!
//! - 0: Operator exited normally
//! - 1: Fatal error (corrupt store, I/O failure, etc.)

use std::process;

use tracing_subscriber::EnvFilter;

use pos_register::cli;
use pos_register::core::{Catalog, CredentialTable, Register};
use pos_register::io::TransactionLog;
use pos_register::terminal;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    // Wire the register: seeded catalog and operators, file-backed store
    let log = TransactionLog::new(args.store);
    let mut register = Register::new(Catalog::seed(), CredentialTable::seed(), log);

    if let Err(e) = terminal::run(&mut register) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
