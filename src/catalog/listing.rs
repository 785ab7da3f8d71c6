//! Listing form for putting a game up for sale.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::forms::{FieldErrors, required_fields};

use super::models::{Category, Condition, GameDraft};

/// Raw form state for a new listing, one string per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    /// Display title.
    pub title: String,
    /// Seller-written description.
    pub description: String,
    /// Asking price.
    pub price: String,
    /// Original retail price.
    pub original_price: String,
    /// Advertised discount percentage.
    pub discount: String,
    /// Cover image URL or inline-encoded bytes.
    pub image: String,
    /// Genre, by sidebar label.
    pub category: String,
    /// Comma-separated platform list.
    pub platforms: String,
    /// Average review rating.
    pub rating: String,
    /// Number of reviews behind the rating.
    pub review_count: String,
    /// Physical condition, by sidebar label.
    pub condition: String,
    /// Seller display name; falls back to the session identity when blank.
    pub seller: String,
}

/// Failures turning a listing form into a catalog draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// One or more required fields are blank.
    #[error("listing form is incomplete")]
    Incomplete(FieldErrors),

    /// A numeric field did not parse.
    #[error("invalid number in field {0}")]
    InvalidNumber(&'static str),

    /// The category label is not one of the fixed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The condition label is not one of the fixed set.
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}

impl ListingForm {
    /// Required-field validation, same shape as the checkout form's.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        required_fields([
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("price", self.price.as_str()),
            ("category", self.category.as_str()),
            ("platforms", self.platforms.as_str()),
            ("condition", self.condition.as_str()),
        ])
    }

    /// Discount implied by the two price fields, as recomputed when the
    /// original-price input loses focus.
    ///
    /// Purely informational: the stored discount is whatever the seller
    /// submits, and nothing else ever derives it.
    #[must_use]
    pub fn derived_discount(&self) -> Option<u32> {
        let price: Decimal = self.price.trim().parse().ok()?;
        let original: Decimal = self.original_price.trim().parse().ok()?;

        if original <= price || original.is_zero() {
            return None;
        }

        let fraction = Percentage::from((original - price) / original);
        let points = (fraction * Decimal::ONE_HUNDRED).round();

        points.to_u32()
    }

    /// Turn the form into a catalog draft.
    ///
    /// Mirrors the submit handling of the sell page: the original price
    /// falls back to the asking price, discount and review count to 0, and
    /// a blank seller to `fallback_seller` (the session identity).
    ///
    /// # Errors
    ///
    /// Returns a [`ListingError`] when required fields are blank, a numeric
    /// field does not parse, or a label is unknown.
    pub fn into_draft(self, fallback_seller: &str) -> Result<GameDraft, ListingError> {
        let errors = self.validate();

        if !errors.is_empty() {
            return Err(ListingError::Incomplete(errors));
        }

        let price: Decimal = self
            .price
            .trim()
            .parse()
            .map_err(|_| ListingError::InvalidNumber("price"))?;

        let original_price = parse_or(&self.original_price, price, "originalPrice")?;
        let discount = parse_or(&self.discount, 0u32, "discount")?;
        let rating = parse_or(&self.rating, Decimal::new(45, 1), "rating")?;
        let review_count = parse_or(&self.review_count, 0u32, "reviewCount")?;

        let category = Category::from_label(self.category.trim())
            .ok_or_else(|| ListingError::UnknownCategory(self.category.trim().to_string()))?;

        let condition = Condition::from_label(self.condition.trim())
            .ok_or_else(|| ListingError::UnknownCondition(self.condition.trim().to_string()))?;

        let platforms: Vec<String> = self
            .platforms
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        let seller = if self.seller.trim().is_empty() {
            fallback_seller.to_string()
        } else {
            self.seller.trim().to_string()
        };

        let image = if self.image.trim().is_empty() {
            None
        } else {
            Some(self.image.trim().to_string())
        };

        Ok(GameDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            original_price,
            discount,
            image,
            category,
            platforms,
            rating,
            review_count,
            condition,
            seller,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: &str,
    default: T,
    field: &'static str,
) -> Result<T, ListingError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(default);
    }

    trimmed
        .parse()
        .map_err(|_| ListingError::InvalidNumber(field))
}
