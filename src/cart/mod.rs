//! Shopping cart engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::models::{Game, GameId};
use crate::storage::{Store, keys};

/// One cart entry: a game snapshot plus a quantity.
///
/// The snapshot is taken when the game is added; later catalog edits never
/// reach into the cart, and the captured price is what the totals use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The game as it looked at add-time.
    #[serde(flatten)]
    pub game: Game,
    /// How many copies, always at least 1.
    pub quantity: u32,
}

/// Quantity-keyed set of games selected for purchase.
///
/// Every operation reads and rewrites the whole cart collection; there are
/// no partial updates.
#[derive(Debug, Clone)]
pub struct CartService {
    store: Store,
}

impl CartService {
    /// Create a cart service over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Current cart lines, insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CartLine> {
        self.store.read(keys::CART)
    }

    /// Add one copy of a game. An existing line for the same id gets its
    /// quantity bumped; otherwise a new line captures the game's fields.
    pub fn add(&self, game: &Game) {
        let mut lines = self.list();

        if let Some(line) = lines.iter_mut().find(|line| line.game.id == game.id) {
            line.quantity += 1;
        } else {
            lines.push(CartLine {
                game: game.clone(),
                quantity: 1,
            });
        }

        self.save(&lines);
    }

    /// Delete the line for `id` if present; no-op otherwise.
    pub fn remove(&self, id: GameId) {
        let mut lines = self.list();

        lines.retain(|line| line.game.id != id);
        self.save(&lines);
    }

    /// Set a line's quantity to exactly `quantity`. Zero behaves as
    /// [`CartService::remove`]; an unknown id is a no-op.
    pub fn set_quantity(&self, id: GameId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        let mut lines = self.list();

        if let Some(line) = lines.iter_mut().find(|line| line.game.id == id) {
            line.quantity = quantity;
        }

        self.save(&lines);
    }

    /// Empty the cart by deleting the whole collection.
    pub fn clear(&self) {
        self.store.remove(keys::CART);
    }

    /// Cart subtotal over the captured line prices, not a fresh catalog
    /// lookup.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.list()
            .iter()
            .map(|line| line.game.price * Decimal::from(line.quantity))
            .sum()
    }

    /// Total number of copies across all lines, as shown on the cart
    /// badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.list().iter().map(|line| line.quantity).sum()
    }

    fn save(&self, lines: &[CartLine]) {
        self.store.write(keys::CART, lines);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, sample_game};

    use super::*;

    #[test]
    fn adding_a_game_creates_a_line_with_quantity_one() {
        let ctx = TestContext::new();
        let game = sample_game(1, Decimal::from(10));

        ctx.cart.add(&game);

        let lines = ctx.cart.list();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[0].game.id, 1);
    }

    #[test]
    fn adding_the_same_game_increments_instead_of_duplicating() {
        let ctx = TestContext::new();
        let game = sample_game(1, Decimal::from(10));

        ctx.cart.add(&game);
        ctx.cart.add(&game);
        ctx.cart.add(&game);

        let lines = ctx.cart.list();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn item_count_sums_quantities_and_list_counts_distinct_ids() {
        let ctx = TestContext::new();
        let a = sample_game(1, Decimal::from(10));
        let b = sample_game(2, Decimal::from(5));

        // Three adds of A, two of B: the badge shows 5, the cart shows 2
        // lines.
        ctx.cart.add(&a);
        ctx.cart.add(&a);
        ctx.cart.add(&a);
        ctx.cart.add(&b);
        ctx.cart.add(&b);

        assert_eq!(ctx.cart.item_count(), 5);
        assert_eq!(ctx.cart.list().len(), 2);
    }

    #[test]
    fn lines_snapshot_the_game_at_add_time() -> TestResult {
        let ctx = TestContext::new();

        let draft = crate::test::sample_draft("Snapshot", Decimal::from(10));
        let game = ctx.catalog.add(draft);

        ctx.cart.add(&game);

        ctx.catalog.update(
            game.id,
            crate::catalog::models::GameUpdate {
                price: Some(Decimal::from(99)),
                title: Some("Repriced".to_string()),
                ..Default::default()
            },
        )?;

        let lines = ctx.cart.list();

        assert_eq!(lines[0].game.price, Decimal::from(10));
        assert_eq!(lines[0].game.title, "Snapshot");
        assert_eq!(ctx.cart.total(), Decimal::from(10));

        Ok(())
    }

    #[test]
    fn remove_deletes_only_that_line() {
        let ctx = TestContext::new();
        let a = sample_game(1, Decimal::from(10));
        let b = sample_game(2, Decimal::from(5));

        ctx.cart.add(&a);
        ctx.cart.add(&b);
        ctx.cart.remove(1);

        let lines = ctx.cart.list();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].game.id, 2);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let ctx = TestContext::new();

        ctx.cart.add(&sample_game(1, Decimal::from(10)));
        ctx.cart.remove(42);

        assert_eq!(ctx.cart.list().len(), 1);
    }

    #[test]
    fn set_quantity_overwrites_rather_than_increments() {
        let ctx = TestContext::new();
        let game = sample_game(1, Decimal::from(10));

        ctx.cart.add(&game);
        ctx.cart.set_quantity(1, 7);
        ctx.cart.set_quantity(1, 4);

        assert_eq!(ctx.cart.item_count(), 4);
    }

    #[test]
    fn set_quantity_zero_is_equivalent_to_remove() {
        let ctx = TestContext::new();
        let game = sample_game(1, Decimal::from(10));

        ctx.cart.add(&game);
        ctx.cart.set_quantity(1, 0);

        assert!(ctx.cart.list().is_empty());
        assert_eq!(ctx.cart.total(), Decimal::ZERO);
        assert_eq!(ctx.cart.item_count(), 0);
    }

    #[test]
    fn set_quantity_unknown_id_is_a_noop() {
        let ctx = TestContext::new();

        ctx.cart.add(&sample_game(1, Decimal::from(10)));
        ctx.cart.set_quantity(42, 3);

        assert_eq!(ctx.cart.item_count(), 1);
    }

    #[test]
    fn total_multiplies_captured_price_by_quantity() {
        let ctx = TestContext::new();
        let a = sample_game(1, Decimal::from(10));
        let b = sample_game(2, Decimal::from(5));

        ctx.cart.add(&a);
        ctx.cart.add(&a);
        ctx.cart.add(&b);

        // 10 * 2 + 5 * 1
        assert_eq!(ctx.cart.total(), Decimal::from(25));
    }

    #[test]
    fn clear_empties_the_cart() {
        let ctx = TestContext::new();

        ctx.cart.add(&sample_game(1, Decimal::from(10)));
        ctx.cart.clear();

        assert!(ctx.cart.list().is_empty());
        assert_eq!(ctx.cart.total(), Decimal::ZERO);
    }

    #[test]
    fn cart_line_flattens_the_snapshot_in_storage() -> TestResult {
        let line = CartLine {
            game: sample_game(1, Decimal::from(10)),
            quantity: 2,
        };

        let raw = serde_json::to_string(&line)?;

        // The persisted shape is the game record with a quantity alongside,
        // not a nested object.
        assert!(raw.contains("\"quantity\":2"), "got {raw}");
        assert!(!raw.contains("\"game\""), "got {raw}");

        Ok(())
    }
}
