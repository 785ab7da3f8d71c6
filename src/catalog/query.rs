//! Catalog query pipeline: filter, sort, paginate.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::models::{Category, Condition, Game};

/// Number of games shown per page.
pub const PAGE_SIZE: usize = 9;

/// Fixed price bands offered by the filter sidebar.
///
/// The boundary inclusivity is uneven on purpose: a game priced exactly 20
/// belongs to the 20–40 band, exactly 40 stays in it, and exactly 60 stays
/// in the 40–60 band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// price < 20
    Under20,
    /// 20 <= price <= 40
    From20To40,
    /// 40 < price <= 60
    From40To60,
    /// price > 60
    Over60,
}

impl PriceBand {
    /// Every band, in sidebar order.
    pub const ALL: [Self; 4] = [
        Self::Under20,
        Self::From20To40,
        Self::From40To60,
        Self::Over60,
    ];

    /// Label as shown in the sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Under20 => "Under $20",
            Self::From20To40 => "$20 - $40",
            Self::From40To60 => "$40 - $60",
            Self::Over60 => "Over $60",
        }
    }

    /// Parse a sidebar label back into a band.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    fn contains(self, price: Decimal) -> bool {
        let twenty = Decimal::from(20);
        let forty = Decimal::from(40);
        let sixty = Decimal::from(60);

        match self {
            Self::Under20 => price < twenty,
            Self::From20To40 => price >= twenty && price <= forty,
            Self::From40To60 => price > forty && price <= sixty,
            Self::Over60 => price > sixty,
        }
    }
}

/// Sort modes for the browse view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order, untouched.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
    /// Best rated first.
    Rating,
    /// Most recently listed first.
    Newest,
}

/// Filter, sort and pagination parameters for one browse view.
///
/// Every filter and sort mutator resets the requested page back to 1;
/// only [`CatalogQuery::set_page`] leaves the rest of the state alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    search: String,
    category: Option<Category>,
    platform: Option<String>,
    condition: Option<Condition>,
    price_band: Option<PriceBand>,
    sort: SortOrder,
    page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            platform: None,
            condition: None,
            price_band: None,
            sort: SortOrder::Featured,
            page: 1,
        }
    }
}

impl CatalogQuery {
    /// A query matching everything: no filters, featured order, page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search. Empty means "match everything".
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Filter to one category, or `None` for all categories.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.page = 1;
    }

    /// Filter to one platform, or `None` for all platforms.
    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
        self.page = 1;
    }

    /// Filter to one condition, or `None` for all conditions.
    pub fn set_condition(&mut self, condition: Option<Condition>) {
        self.condition = condition;
        self.page = 1;
    }

    /// Filter to one price band, or `None` for all prices.
    pub fn set_price_band(&mut self, price_band: Option<PriceBand>) {
        self.price_band = price_band;
        self.page = 1;
    }

    /// Change the sort mode.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Request a page. Pages are 1-based; requests below 1 clamp to 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Currently requested page.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current sort mode.
    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    fn matches(&self, game: &Game) -> bool {
        self.matches_search(game)
            && self.category.is_none_or(|c| game.category == c)
            && self
                .platform
                .as_ref()
                .is_none_or(|p| game.platforms.iter().any(|candidate| candidate == p))
            && self.condition.is_none_or(|c| game.condition == c)
            && self.price_band.is_none_or(|b| b.contains(game.price))
    }

    fn matches_search(&self, game: &Game) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();

        game.title.to_lowercase().contains(&needle)
            || game.category.label().to_lowercase().contains(&needle)
            || game.seller.to_lowercase().contains(&needle)
    }
}

/// One page of results plus the figures the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    /// Games on the requested page, in display order.
    pub games: Vec<Game>,
    /// Number of games matching the filters across all pages.
    pub total_count: usize,
    /// Number of pages the matches span.
    pub total_pages: usize,
}

/// Run the filter, sort and pagination pipeline over a catalog.
///
/// The filters are conjunctive and independent, so their application order
/// does not change the outcome. The input is never mutated; running the
/// same query twice yields the same page.
#[must_use]
pub fn query(games: &[Game], params: &CatalogQuery) -> QueryPage {
    let mut matches: Vec<Game> = games
        .iter()
        .filter(|game| params.matches(game))
        .cloned()
        .collect();

    sort_games(&mut matches, params.sort);

    let total_count = matches.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE);

    let start = (params.page.max(1) - 1) * PAGE_SIZE;

    let games: Vec<Game> = matches.into_iter().skip(start).take(PAGE_SIZE).collect();

    QueryPage {
        games,
        total_count,
        total_pages,
    }
}

fn sort_games(games: &mut [Game], sort: SortOrder) {
    match sort {
        SortOrder::Featured => {}
        SortOrder::PriceLowHigh => games.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighLow => games.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Rating => games.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOrder::Newest => games.sort_by(newest_first),
    }
}

fn newest_first(a: &Game, b: &Game) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(a_at), Some(b_at)) => b_at.cmp(&a_at),
        // Either stamp missing: the id is creation-ordered, compare that.
        _ => b.id.cmp(&a.id),
    }
}
