//! Admin workflow
//!
//! Reviews and deletes stored transactions, and edits the product
//! catalog. Corrupt-store errors are not caught here; they propagate and
//! end the session.

use crate::core::Register;
use crate::terminal::menu::Menu;
use crate::terminal::prompt::{self, Input, LineReader};
use crate::terminal::screen;
use crate::types::{PosError, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminAction {
    Transactions,
    EditCatalog,
    Logout,
}

const ADMIN_MENU: Menu<AdminAction> = Menu::new(
    "Admin Dashboard",
    &[
        ("View transactions", AdminAction::Transactions),
        ("Edit products", AdminAction::EditCatalog),
        ("Logout", AdminAction::Logout),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    Delete,
    Back,
}

const DETAIL_MENU: Menu<DetailAction> = Menu::new(
    "Transaction Details",
    &[
        ("Delete this transaction", DetailAction::Delete),
        ("Back", DetailAction::Back),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditAction {
    Rename,
    Reprice,
    Back,
}

const EDIT_MENU: Menu<EditAction> = Menu::new(
    "Edit Product",
    &[
        ("Change name", EditAction::Rename),
        ("Change price", EditAction::Reprice),
        ("Back", EditAction::Back),
    ],
);

/// Run the admin dashboard until logout
pub fn run<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    loop {
        match ADMIN_MENU.choose(prompt)? {
            Some(AdminAction::Transactions) => transactions(register, prompt)?,
            Some(AdminAction::EditCatalog) => edit_catalog(register, prompt)?,
            Some(AdminAction::Logout) | None => return Ok(()),
        }
    }
}

/// List stored transactions and open one for review
fn transactions<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    let transactions = register.transactions()?;

    screen::header("Transaction History");
    if transactions.is_empty() {
        screen::notice("No transactions recorded yet.");
        return Ok(());
    }
    for (number, transaction) in transactions.iter().enumerate() {
        screen::transaction_row(number + 1, transaction);
    }

    let input = match prompt.line("Transaction number ('b' to go back): ")? {
        Input::Line(line) => line,
        Input::Cancelled => return Ok(()),
    };
    if input.eq_ignore_ascii_case("b") {
        return Ok(());
    }

    match prompt::parse_selection(&input, transactions.len()) {
        Ok(index) => detail(register, prompt, &transactions[index]),
        Err(e) => {
            screen::failure(&e);
            Ok(())
        }
    }
}

/// Show one transaction and offer to delete it
fn detail<S: LineReader>(
    register: &mut Register,
    prompt: &mut S,
    transaction: &Transaction,
) -> Result<(), PosError> {
    let action = DETAIL_MENU.choose_with(prompt, || screen::transaction_detail(transaction))?;

    match action {
        Some(DetailAction::Delete) => {
            let confirmed = match prompt.line("Delete this transaction? (y/n): ")? {
                Input::Line(line) => line.eq_ignore_ascii_case("y"),
                Input::Cancelled => false,
            };
            if !confirmed {
                screen::notice("Delete cancelled.");
                return Ok(());
            }

            match register.delete_transaction(transaction.receipt_id) {
                Ok(_) => screen::success("Transaction deleted."),
                Err(e) if e.is_validation() => screen::failure(&e),
                Err(e) => return Err(e),
            }
            Ok(())
        }
        Some(DetailAction::Back) | None => Ok(()),
    }
}

/// Pick a product and rename or reprice it
fn edit_catalog<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    loop {
        screen::header("Edit Products");
        screen::products(register.products());

        let input = match prompt.line("Product number ('b' to go back): ")? {
            Input::Line(line) => line,
            Input::Cancelled => return Ok(()),
        };
        if input.eq_ignore_ascii_case("b") {
            return Ok(());
        }

        let index = match prompt::parse_selection(&input, register.products().len()) {
            Ok(index) => index,
            Err(e) => {
                screen::failure(&e);
                continue;
            }
        };
        screen::notice(format!(
            "Selected: {} - \u{20b1}{}",
            register.products()[index].name,
            register.products()[index].price
        ));

        match EDIT_MENU.choose(prompt)? {
            Some(EditAction::Rename) => {
                let name = match prompt.line("New name: ")? {
                    Input::Line(line) => line,
                    Input::Cancelled => continue,
                };
                match register.rename_product(index, &name) {
                    Ok(()) => screen::success("Product renamed."),
                    Err(e) if e.is_validation() => screen::failure(&e),
                    Err(e) => return Err(e),
                }
            }
            Some(EditAction::Reprice) => {
                let price_input = match prompt.line("New price: ")? {
                    Input::Line(line) => line,
                    Input::Cancelled => continue,
                };
                let price = match prompt::parse_amount(&price_input) {
                    Ok(price) => price,
                    Err(e) => {
                        screen::failure(&e);
                        continue;
                    }
                };
                match register.reprice_product(index, price) {
                    Ok(()) => screen::success("Price updated."),
                    Err(e) if e.is_validation() => screen::failure(&e),
                    Err(e) => return Err(e),
                }
            }
            Some(EditAction::Back) | None => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tempfile::TempDir;

    use super::*;
    use crate::core::{Catalog, CredentialTable};
    use crate::io::TransactionLog;
    use crate::types::PaymentMethod;

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

    #[test]
    fn test_confirmed_delete_removes_the_selected_sale() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        register.add_to_cart(0, 1).unwrap();
        register.checkout(PaymentMethod::Card, None).unwrap();
        register.add_to_cart(1, 1).unwrap();
        let second = register.checkout(PaymentMethod::Card, None).unwrap();

        let mut script = Script::new(&["1", "1", "y"]);
        transactions(&mut register, &mut script).unwrap();

        assert_eq!(register.transactions().unwrap(), vec![second]);
    }

    #[test]
    fn test_declined_delete_keeps_the_store_intact() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);
        register.add_to_cart(0, 1).unwrap();
        register.checkout(PaymentMethod::Card, None).unwrap();

        let mut script = Script::new(&["1", "1", "n"]);
        transactions(&mut register, &mut script).unwrap();

        assert_eq!(register.transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_catalog_renames_in_place() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);

        let mut script = Script::new(&["2", "1", "Sticker", "b"]);
        edit_catalog(&mut register, &mut script).unwrap();

        assert_eq!(register.products()[1].name, "Sticker");
        assert_eq!(register.products()[1].price, 50);
    }

    #[test]
    fn test_edit_catalog_reprices_in_place() {
        let dir = TempDir::new().unwrap();
        let mut register = register_in(&dir);

        let mut script = Script::new(&["3", "2", "25", "b"]);
        edit_catalog(&mut register, &mut script).unwrap();

        assert_eq!(register.products()[2].name, "Cartolina");
        assert_eq!(register.products()[2].price, 25);
    }
}
