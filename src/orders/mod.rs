//! Order ledger: append-only record of finalized purchases.

pub mod receipt;

use decimal_percentage::Percentage;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::CartLine;
use crate::storage::{Store, keys};

/// Flat sales tax applied to every order. Shipping is free.
fn sales_tax() -> Percentage {
    Percentage::from(0.1)
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card details were collected on the checkout form.
    Card,
}

/// Settlement state of an order's payment.
///
/// Always [`PaymentStatus::Completed`]: there is no payment gateway behind
/// the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment considered settled at creation time.
    Completed,
}

/// Shipping details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
}

/// A finalized purchase: a frozen snapshot of the cart plus shipping and
/// payment metadata. Never mutated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Time-derived identifier, stringified.
    pub id: String,
    /// The cart lines as they stood at checkout.
    pub items: Vec<CartLine>,
    /// Grand total: subtotal plus sales tax.
    pub total: Decimal,
    /// Where the order ships.
    pub shipping_address: ShippingAddress,
    /// How it was paid.
    pub payment_method: PaymentMethod,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// When the order was placed.
    pub created_at: Timestamp,
}

/// Append-only collection of finalized orders.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    store: Store,
}

impl OrderLedger {
    /// Create a ledger over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All orders in insertion order. Callers wanting most-recent-first
    /// reverse explicitly.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        self.store.read(keys::ORDERS)
    }

    /// Look an order up by id, as the confirmation view does.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Order> {
        self.list().into_iter().find(|order| order.id == id)
    }

    /// Create an order from a cart snapshot and append it. This is the
    /// ledger's sole write operation; there is no update or delete.
    pub fn create(&self, items: Vec<CartLine>, shipping_address: ShippingAddress) -> Order {
        let subtotal: Decimal = items
            .iter()
            .map(|line| line.game.price * Decimal::from(line.quantity))
            .sum();

        let total = subtotal + sales_tax() * subtotal;
        let now = Timestamp::now();

        let order = Order {
            // Time-derived with no collision check: two orders in the same
            // millisecond share an id. Known limitation.
            id: now.as_millisecond().to_string(),
            items,
            total,
            shipping_address,
            payment_method: PaymentMethod::Card,
            payment_status: PaymentStatus::Completed,
            created_at: now,
        };

        let mut orders = self.list();
        orders.push(order.clone());
        self.store.write(keys::ORDERS, &orders);

        info!(order_id = %order.id, total = %order.total, "order placed");

        order
    }
}
