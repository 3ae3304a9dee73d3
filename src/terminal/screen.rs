//! Colored terminal rendering
//!
//! All printing goes through this module so the rest of the terminal
//! code stays free of formatting concerns. Colors degrade to plain text
//! automatically when stdout is not a tty.

use std::fmt::Display;

use colored::Colorize;

use crate::types::{LineItem, Price, Product, Transaction};

const HEADER_WIDTH: usize = 60;

/// Boxed section header with a centered, upper-cased title
pub fn header(title: &str) {
    let rule = "\u{2550}".repeat(HEADER_WIDTH);
    println!();
    println!("{}", format!("\u{2554}{}\u{2557}", rule).bright_cyan());
    println!(
        "{}",
        format!(" {:^width$}", title.to_uppercase(), width = HEADER_WIDTH)
            .bright_cyan()
            .bold()
    );
    println!("{}", format!("\u{255a}{}\u{255d}", rule).bright_cyan());
}

/// Green confirmation line
pub fn success(message: impl Display) {
    println!("{}", format!("\u{2714} {}", message).green());
}

/// Red error line
pub fn failure(message: impl Display) {
    println!("{}", format!("\u{2718} {}", message).red());
}

/// Yellow informational line
pub fn notice(message: impl Display) {
    println!("{}", format!("{}", message).yellow());
}

/// One numbered menu option
pub fn option(number: usize, label: &str) {
    println!("{} {}", format!("{}.", number).yellow(), label);
}

/// Numbered product listing with unit prices
pub fn products(products: &[Product]) {
    println!("{}", "--- Products ---".bright_cyan());
    for (number, product) in products.iter().enumerate() {
        println!("{}. {} - \u{20b1}{}", number + 1, product.name, product.price);
    }
}

/// Current cart contents and running total
pub fn cart(items: &[LineItem], total: Price) {
    println!("{}", "--- Cart ---".bright_magenta());
    if items.is_empty() {
        println!("{}", "(empty)".yellow());
        return;
    }
    for item in items {
        println!("{} x{} = \u{20b1}{}", item.name, item.qty, item.total);
    }
    println!("Total: \u{20b1}{}", total);
}

/// One row of the transaction history listing
pub fn transaction_row(number: usize, transaction: &Transaction) {
    println!(
        "{}. {}  {}  \u{20b1}{}",
        number,
        transaction.receipt_id,
        transaction.datetime,
        transaction.total
    );
}

/// Full view of one stored transaction
pub fn transaction_detail(transaction: &Transaction) {
    println!("Receipt ID: {}", transaction.receipt_id);
    println!("Date: {}", transaction.datetime);
    println!("Items:");
    for item in &transaction.items {
        println!(
            "  {} x{} @ \u{20b1}{} = \u{20b1}{}",
            item.name, item.qty, item.price, item.total
        );
    }
    println!("Total: \u{20b1}{}", transaction.total);
    println!("Payment: {}", transaction.method);
    println!(
        "Cash: \u{20b1}{}  Change: \u{20b1}{}",
        transaction.cash, transaction.change
    );
}
