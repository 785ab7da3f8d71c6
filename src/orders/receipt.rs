//! Order receipt rendering.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use super::Order;

/// Errors that can occur while writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The receipt could not be written to the output stream.
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// Write a textual receipt for an order: one row per cart line, then the
/// subtotal / tax / total summary.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn render(order: &Order, mut out: impl io::Write) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Unit Price", "Line Total"]);

    let mut subtotal = Decimal::ZERO;

    for line in &order.items {
        let line_total = line.game.price * Decimal::from(line.quantity);
        subtotal += line_total;

        builder.push_record([
            line.game.title.clone(),
            line.quantity.to_string(),
            format!("${}", line.game.price),
            format!("${line_total}"),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "Order #{}", order.id)?;
    writeln!(out, "{table}")?;

    let tax = order.total - subtotal;

    writeln!(out, " Subtotal: ${subtotal}")?;
    writeln!(out, "      Tax: ${tax}")?;
    writeln!(out, "    Total: ${}", order.total)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::cart::CartLine;
    use crate::orders::{Order, PaymentMethod, PaymentStatus, ShippingAddress};
    use crate::test::sample_game;

    use super::*;

    fn sample_order() -> Order {
        let mut priced = sample_game(1, Decimal::from(10));
        priced.title = "Hollow Manor".to_string();

        Order {
            id: "1700000000000".to_string(),
            items: vec![
                CartLine {
                    game: priced,
                    quantity: 2,
                },
                CartLine {
                    game: sample_game(2, Decimal::from(5)),
                    quantity: 1,
                },
            ],
            total: Decimal::new(2750, 2),
            shipping_address: ShippingAddress {
                full_name: "Jamie Doe".to_string(),
                email: "jamie@example.com".to_string(),
                address: "1 Arcade Way".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62704".to_string(),
            },
            payment_method: PaymentMethod::Card,
            payment_status: PaymentStatus::Completed,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn render_includes_lines_and_summary() -> TestResult {
        let mut out = Vec::new();

        render(&sample_order(), &mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Order #1700000000000"), "got {text}");
        assert!(text.contains("Hollow Manor"), "got {text}");
        assert!(text.contains("$20"), "line total, got {text}");
        assert!(text.contains("Subtotal: $25"), "got {text}");
        assert!(text.contains("Tax: $2.50"), "got {text}");
        assert!(text.contains("Total: $27.50"), "got {text}");

        Ok(())
    }

    #[test]
    fn render_handles_empty_orders() -> TestResult {
        let mut order = sample_order();
        order.items.clear();
        order.total = Decimal::ZERO;

        let mut out = Vec::new();

        render(&order, &mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Subtotal: $0"), "got {text}");

        Ok(())
    }
}
