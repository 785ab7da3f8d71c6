//! Checkout flow: form validation and order placement.

use thiserror::Error;

use crate::accounts::Session;
use crate::cart::CartService;
use crate::forms::{FieldErrors, required_fields};
use crate::orders::{Order, OrderLedger, ShippingAddress};

/// Shipping and payment details collected on the checkout page, one string
/// per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
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
    /// Card number. Collected, presence-checked, never charged.
    pub card_number: String,
    /// Name on the card.
    pub card_name: String,
    /// Card expiry.
    pub expiry_date: String,
    /// Card security code.
    pub cvv: String,
}

impl CheckoutForm {
    /// Prefill the contact fields from the signed-in session, as the
    /// checkout page does on entry.
    pub fn prefill(&mut self, session: &Session) {
        self.email = session.email.clone();
        self.full_name = session.username.clone();
    }

    /// Required-field validation. Card fields are checked for presence
    /// only; there is no format validation behind them.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        required_fields([
            ("fullName", self.full_name.as_str()),
            ("email", self.email.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zipCode", self.zip_code.as_str()),
            ("cardNumber", self.card_number.as_str()),
            ("cardName", self.card_name.as_str()),
            ("expiryDate", self.expiry_date.as_str()),
            ("cvv", self.cvv.as_str()),
        ])
    }

    fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
        }
    }
}

/// Checkout failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was entered with nothing in the cart; the caller redirects
    /// away before accepting input.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more required fields are blank.
    #[error("required fields are missing")]
    Validation(FieldErrors),
}

/// Run the checkout sequence: guard against an empty cart, validate the
/// form, write the order, clear the cart, and hand back the order whose id
/// keys the confirmation view.
///
/// The order write and the cart clear are two independent storage writes
/// with nothing transactional between them; a crash in the gap duplicates
/// exactly as much state as the original.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] or [`CheckoutError::Validation`]
/// without touching storage.
pub fn place_order(
    cart: &CartService,
    ledger: &OrderLedger,
    form: &CheckoutForm,
) -> Result<Order, CheckoutError> {
    let lines = cart.list();

    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let errors = form.validate();

    if !errors.is_empty() {
        return Err(CheckoutError::Validation(errors));
    }

    let order = ledger.create(lines, form.shipping_address());

    cart.clear();

    Ok(order)
}
