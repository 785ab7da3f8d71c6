//! Catalog models.

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry. Clock-derived at creation time and kept
/// strictly increasing within the collection, so it doubles as a creation
/// ordering.
pub type GameId = i64;

/// Genre of a listed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Action games.
    Action,
    /// Role-playing games.
    #[serde(rename = "RPG")]
    Rpg,
    /// Adventure games.
    Adventure,
    /// Sports games.
    Sports,
    /// Racing games.
    Racing,
    /// Horror games.
    Horror,
    /// Puzzle games.
    Puzzle,
    /// Strategy games.
    Strategy,
}

impl Category {
    /// Every category, in sidebar order.
    pub const ALL: [Self; 8] = [
        Self::Action,
        Self::Rpg,
        Self::Adventure,
        Self::Sports,
        Self::Racing,
        Self::Horror,
        Self::Puzzle,
        Self::Strategy,
    ];

    /// Label as shown in the sidebar and persisted in storage.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Rpg => "RPG",
            Self::Adventure => "Adventure",
            Self::Sports => "Sports",
            Self::Racing => "Racing",
            Self::Horror => "Horror",
            Self::Puzzle => "Puzzle",
            Self::Strategy => "Strategy",
        }
    }

    /// Parse a sidebar label back into a category.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical condition of a pre-owned copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Practically indistinguishable from new.
    #[serde(rename = "Like New")]
    LikeNew,
    /// Light wear only.
    Excellent,
    /// Noticeable wear, fully functional.
    #[serde(rename = "Very Good")]
    VeryGood,
    /// Heavier wear, fully functional.
    Good,
}

impl Condition {
    /// Every condition, best first.
    pub const ALL: [Self; 4] = [Self::LikeNew, Self::Excellent, Self::VeryGood, Self::Good];

    /// Label as shown in the sidebar and persisted in storage.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LikeNew => "Like New",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
        }
    }

    /// Parse a sidebar label back into a condition.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listed game.
///
/// `discount` is informational: it is whatever the seller entered and is
/// never reconciled against `price`/`original_price` on persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique identifier, monotonic by creation order.
    pub id: GameId,
    /// Display title.
    pub title: String,
    /// Seller-written description.
    pub description: String,
    /// Asking price.
    pub price: Decimal,
    /// Original retail price.
    pub original_price: Decimal,
    /// Advertised discount percentage.
    pub discount: u32,
    /// Cover image URL or inline-encoded bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Genre.
    pub category: Category,
    /// Platforms the copy runs on; never empty.
    pub platforms: Vec<String>,
    /// Average review rating, 0–5.
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Physical condition.
    pub condition: Condition,
    /// Seller display name.
    pub seller: String,
    /// When the listing was created. Absent only in records written before
    /// the field existed; the repository backfills it on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Game {
    /// Merge an update into this record. The id is immutable.
    pub fn apply(&mut self, update: GameUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }

        if let Some(description) = update.description {
            self.description = description;
        }

        if let Some(price) = update.price {
            self.price = price;
        }

        if let Some(original_price) = update.original_price {
            self.original_price = original_price;
        }

        if let Some(discount) = update.discount {
            self.discount = discount;
        }

        if let Some(image) = update.image {
            self.image = Some(image);
        }

        if let Some(category) = update.category {
            self.category = category;
        }

        if let Some(platforms) = update.platforms {
            self.platforms = platforms;
        }

        if let Some(rating) = update.rating {
            self.rating = rating;
        }

        if let Some(review_count) = update.review_count {
            self.review_count = review_count;
        }

        if let Some(condition) = update.condition {
            self.condition = condition;
        }

        if let Some(seller) = update.seller {
            self.seller = seller;
        }
    }
}

/// Fields of a new listing before the repository assigns id and creation
/// stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDraft {
    /// Display title.
    pub title: String,
    /// Seller-written description.
    pub description: String,
    /// Asking price.
    pub price: Decimal,
    /// Original retail price.
    pub original_price: Decimal,
    /// Advertised discount percentage.
    pub discount: u32,
    /// Cover image URL or inline-encoded bytes.
    pub image: Option<String>,
    /// Genre.
    pub category: Category,
    /// Platforms the copy runs on.
    pub platforms: Vec<String>,
    /// Average review rating, 0–5.
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Physical condition.
    pub condition: Condition,
    /// Seller display name.
    pub seller: String,
}

impl GameDraft {
    /// Promote the draft into a full record.
    #[must_use]
    pub fn into_game(self, id: GameId, created_at: Timestamp) -> Game {
        Game {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            discount: self.discount,
            image: self.image,
            category: self.category,
            platforms: self.platforms,
            rating: self.rating,
            review_count: self.review_count,
            condition: self.condition,
            seller: self.seller,
            created_at: Some(created_at),
        }
    }
}

/// One entry of the bundled default dataset. Carries a fixed id; the
/// repository stamps the creation time at seeding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSeed {
    /// Fixed identifier from the bundled dataset.
    pub id: GameId,
    /// Display title.
    pub title: String,
    /// Seller-written description.
    pub description: String,
    /// Asking price.
    pub price: Decimal,
    /// Original retail price.
    pub original_price: Decimal,
    /// Advertised discount percentage.
    pub discount: u32,
    /// Cover image URL or inline-encoded bytes.
    #[serde(default)]
    pub image: Option<String>,
    /// Genre.
    pub category: Category,
    /// Platforms the copy runs on.
    pub platforms: Vec<String>,
    /// Average review rating, 0–5.
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Physical condition.
    pub condition: Condition,
    /// Seller display name.
    pub seller: String,
}

impl GameSeed {
    /// Promote the seed entry into a full record.
    #[must_use]
    pub fn into_game(self, created_at: Timestamp) -> Game {
        Game {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            discount: self.discount,
            image: self.image,
            category: self.category,
            platforms: self.platforms,
            rating: self.rating,
            review_count: self.review_count,
            condition: self.condition,
            seller: self.seller,
            created_at: Some(created_at),
        }
    }
}

/// Partial update merged into an existing record by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameUpdate {
    /// New title, if changing.
    pub title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New asking price, if changing.
    pub price: Option<Decimal>,
    /// New original retail price, if changing.
    pub original_price: Option<Decimal>,
    /// New advertised discount, if changing.
    pub discount: Option<u32>,
    /// New cover image, if changing.
    pub image: Option<String>,
    /// New genre, if changing.
    pub category: Option<Category>,
    /// New platform set, if changing.
    pub platforms: Option<Vec<String>>,
    /// New rating, if changing.
    pub rating: Option<Decimal>,
    /// New review count, if changing.
    pub review_count: Option<u32>,
    /// New condition, if changing.
    pub condition: Option<Condition>,
    /// New seller name, if changing.
    pub seller: Option<String>,
}
