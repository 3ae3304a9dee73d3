//! Interactive terminal frontend
//!
//! Drives the register through a login loop and two role dashboards.
//! All state changes go through the [`Register`] facade; this module
//! only reads lines and paints screens.
//!
//! # Components
//!
//! - `prompt` - Line editor wrapper and input parsers
//! - `screen` - Colored rendering helpers
//! - `menu` - Static action tables with a shared render/dispatch loop
//! - `cashier` - Ring up sales and check out
//! - `admin` - Transaction history and catalog editing

mod admin;
mod cashier;
mod menu;
mod prompt;
mod screen;

use tracing::debug;

use crate::core::{Register, Role};
use crate::types::PosError;

use prompt::{Input, LineReader, Prompt};

/// Run the interactive register until the operator exits
///
/// Shows the login screen in a loop. A successful login enters the role's
/// dashboard; logging out returns here. Typing `exit` (or pressing
/// Ctrl-D) at the username prompt ends the program.
///
/// # Errors
///
/// Returns the first fatal error (corrupt store, I/O failure). Validation
/// errors never escape; they are reported on screen and the operator is
/// prompted again.
pub fn run(register: &mut Register) -> Result<(), PosError> {
    let mut prompt = Prompt::new()?;
    run_with(register, &mut prompt)
}

/// Login loop over any line source
fn run_with<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    loop {
        screen::header("School Supplies POS");
        screen::notice("Log in as admin/1234 or cashier/1234. Type 'exit' to quit.");

        let username = match prompt.line("Username: ")? {
            Input::Line(line) => line,
            Input::Cancelled => break,
        };
        if username.eq_ignore_ascii_case("exit") {
            break;
        }
        if username.is_empty() {
            continue;
        }

        let password = match prompt.line("Password: ")? {
            Input::Line(line) => line,
            Input::Cancelled => break,
        };

        match register.login(&username, &password) {
            Ok(Role::Admin) => {
                screen::success("Logged in as admin.");
                admin::run(register, prompt)?;
                debug!("admin logged out");
            }
            Ok(Role::Cashier) => {
                screen::success("Logged in as cashier.");
                cashier::run(register, prompt)?;
                debug!("cashier logged out");
            }
            Err(e) if e.is_validation() => screen::failure(&e),
            Err(e) => return Err(e),
        }
    }

    screen::notice("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::core::{Catalog, CredentialTable};
    use crate::io::TransactionLog;

    struct Script {
        lines: VecDeque<Input>,
    }

    impl Script {
        fn new(lines: &[&str]) -> Self {
            Script {
                lines: lines.iter().map(|line| Input::Line(line.to_string())).collect(),
            }
        }
    }

    impl LineReader for Script {
        fn line(&mut self, _prompt: &str) -> Result<Input, PosError> {
            Ok(self.lines.pop_front().unwrap_or(Input::Cancelled))
        }
    }

    fn register_in(dir: &TempDir) -> Register {
        let log = TransactionLog::new(dir.path().join("transactions.json"));
        Register::new(Catalog::seed(), CredentialTable::seed(), log)
    }

    #[rstest]
    #[case::lowercase("exit")]
    #[case::uppercase("EXIT")]
    fn test_exit_command_leaves_login_loop(#[case] command: &str) {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        let mut script = Script::new(&[command]);

        run_with(&mut register, &mut script).unwrap();
    }

    #[test]
    fn test_end_of_input_leaves_login_loop() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        let mut script = Script::new(&[]);

        run_with(&mut register, &mut script).unwrap();
    }

    #[test]
    fn test_rejected_login_reprompts_until_exit() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        let mut script = Script::new(&["admin", "wrong", "exit"]);

        run_with(&mut register, &mut script).unwrap();

        assert!(register.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_full_cashier_session_records_one_sale() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        let mut script = Script::new(&[
            "cashier", "1234", "1", "2", "2", "b", "2", "cash", "150", "3", "exit",
        ]);

        run_with(&mut register, &mut script).unwrap();

        assert!(register.cart().is_empty());
        let stored = register.transactions().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].total, 100);
        assert_eq!(stored[0].cash, 150);
        assert_eq!(stored[0].change, 50);
    }

    #[test]
    fn test_corrupt_store_ends_the_session() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("transactions.json");
        fs::write(&store, "not a record\n").unwrap();
        let log = TransactionLog::new(store);
        let mut register = Register::new(Catalog::seed(), CredentialTable::seed(), log);

        let mut script = Script::new(&["admin", "1234", "1"]);
        let error = run_with(&mut register, &mut script).unwrap_err();

        assert!(matches!(error, PosError::CorruptRecord { line: 1, .. }));
    }
}
