//! Cashier workflow
//!
//! Rings up sales: pick products into the cart, then settle with cash or
//! card. Any sale still in the cart at logout is abandoned.

use std::str::FromStr;

use crate::core::Register;
use crate::terminal::menu::Menu;
use crate::terminal::prompt::{self, Input, LineReader};
use crate::terminal::screen;
use crate::types::{PaymentMethod, PosError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CashierAction {
    AddItem,
    Checkout,
    Logout,
}

const CASHIER_MENU: Menu<CashierAction> = Menu::new(
    "Cashier Dashboard",
    &[
        ("Add item to cart", CashierAction::AddItem),
        ("Checkout", CashierAction::Checkout),
        ("Logout", CashierAction::Logout),
    ],
);

/// Run the cashier dashboard until logout
pub fn run<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    loop {
        let action = CASHIER_MENU.choose_with(prompt, || {
            screen::products(register.products());
            screen::cart(register.cart().items(), register.cart().total());
        })?;

        match action {
            Some(CashierAction::AddItem) => add_item(register, prompt)?,
            Some(CashierAction::Checkout) => checkout(register, prompt)?,
            Some(CashierAction::Logout) | None => break,
        }
    }

    // Whatever was not checked out is not a sale
    register.clear_cart();
    Ok(())
}

/// Ring up products until the operator backs out with 'b' or Ctrl-D
fn add_item<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    loop {
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
        let name = register.products()[index].name.clone();

        let qty_input = match prompt.line(&format!("Quantity of {}: ", name))? {
            Input::Line(line) => line,
            Input::Cancelled => continue,
        };
        let qty = match prompt::parse_amount(&qty_input) {
            Ok(qty) => qty,
            Err(e) => {
                screen::failure(&e);
                continue;
            }
        };

        match register.add_to_cart(index, qty) {
            Ok(item) => screen::success(format!(
                "Added {} x{} = \u{20b1}{}",
                item.name, item.qty, item.total
            )),
            Err(e) if e.is_validation() => screen::failure(&e),
            Err(e) => return Err(e),
        }
    }
}

/// Settle the cart and record the sale
fn checkout<S: LineReader>(register: &mut Register, prompt: &mut S) -> Result<(), PosError> {
    if register.cart().is_empty() {
        screen::failure(&PosError::EmptyCart);
        return Ok(());
    }
    screen::cart(register.cart().items(), register.cart().total());

    let method_input = match prompt.line("Payment method (cash/card): ")? {
        Input::Line(line) => line,
        Input::Cancelled => return Ok(()),
    };
    let method = match PaymentMethod::from_str(&method_input) {
        Ok(method) => method,
        Err(e) => {
            screen::failure(&e);
            return Ok(());
        }
    };

    let cash_tendered = match method {
        PaymentMethod::Cash => {
            let cash_input = match prompt.line("Cash received: ")? {
                Input::Line(line) => line,
                Input::Cancelled => return Ok(()),
            };
            match prompt::parse_amount(&cash_input) {
                Ok(amount) => Some(amount),
                Err(e) => {
                    screen::failure(&e);
                    return Ok(());
                }
            }
        }
        PaymentMethod::Card => None,
    };

    match register.checkout(method, cash_tendered) {
        Ok(transaction) => {
            screen::success(format!("Sale recorded. Receipt {}", transaction.receipt_id));
            if transaction.method == PaymentMethod::Cash {
                screen::notice(format!("Change: \u{20b1}{}", transaction.change));
            }
        }
        Err(e) if e.is_validation() => screen::failure(&e),
        Err(e) => return Err(e),
    }
    Ok(())
}
