//! Inventory and recipe builders, plus the stock ledger that models
//! consumption as orders are sold.

use crate::{
    config::InventoryPolicy,
    core::money::{from_cents, to_cents},
    entities::{inventory_item, menu_item, order_item, recipe_ingredient},
};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

const OPENING_STOCK: (i64, i64) = (500, 2_000);
const RESTOCK_PRICE: (f64, f64) = (5.0, 50.0);
const INGREDIENTS_PER_RECIPE: (usize, usize) = (2, 5);
const UNITS_PER_SERVING: (i64, i64) = (1, 3);

/// Builds one inventory row per name with a random safety stock and restock cost.
///
/// The quantities are a floor; [`provision_stock`] tops them up once demand
/// is known.
pub fn build_inventory<R: Rng>(names: &[String], rng: &mut R) -> Vec<inventory_item::Model> {
    (1_i64..)
        .zip(names)
        .map(|(id, name)| inventory_item::Model {
            id,
            name: name.clone(),
            quantity: rng.gen_range(OPENING_STOCK.0..=OPENING_STOCK.1),
            restock_price: from_cents(to_cents(
                rng.gen_range(RESTOCK_PRICE.0..=RESTOCK_PRICE.1),
            )),
        })
        .collect()
}

/// Gives every base menu item 2-5 distinct ingredients, 1-3 units each.
/// Modifiers get no recipe.
pub fn build_recipes<R: Rng>(
    menu: &[menu_item::Model],
    inventory: &[inventory_item::Model],
    rng: &mut R,
) -> Vec<recipe_ingredient::Model> {
    let mut recipes = Vec::new();
    if inventory.is_empty() {
        return recipes;
    }

    for item in menu.iter().filter(|item| !item.is_mod) {
        let count = rng
            .gen_range(INGREDIENTS_PER_RECIPE.0..=INGREDIENTS_PER_RECIPE.1)
            .min(inventory.len());
        let mut chosen = rand::seq::index::sample(rng, inventory.len(), count).into_vec();
        chosen.sort_unstable();
        for index in chosen {
            recipes.push(recipe_ingredient::Model {
                menu_item_id: item.id,
                inventory_item_id: inventory[index].id,
                quantity_used: rng.gen_range(UNITS_PER_SERVING.0..=UNITS_PER_SERVING.1),
            });
        }
    }
    debug!("Built {} recipe edges", recipes.len());
    recipes
}

/// Raises each opening quantity by the units the sold lines will consume,
/// scaled by a cover factor drawn from `cover`.
///
/// A cover of at least 1.0 means stock outlasts the window; below 1.0 some
/// ingredients run out before it ends.
pub fn provision_stock<R: Rng>(
    inventory: &mut [inventory_item::Model],
    recipes: &[recipe_ingredient::Model],
    lines: &[order_item::Model],
    cover: (f64, f64),
    rng: &mut R,
) {
    let mut servings: HashMap<i64, i64> = HashMap::new();
    for line in lines {
        *servings.entry(line.menu_item_id).or_default() += 1;
    }
    let mut demand: HashMap<i64, i64> = HashMap::new();
    for edge in recipes {
        let sold = servings.get(&edge.menu_item_id).copied().unwrap_or(0);
        *demand.entry(edge.inventory_item_id).or_default() += sold * edge.quantity_used;
    }

    for item in inventory.iter_mut() {
        let needed = demand.get(&item.id).copied().unwrap_or(0);
        let factor = rng.gen_range(cover.0..=cover.1);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let top_up = (needed as f64 * factor).ceil() as i64;
        item.quantity += top_up;
    }
    debug!("Provisioned {} inventory items for {} lines", inventory.len(), lines.len());
}

/// One decrement of one inventory item caused by one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockMovement {
    /// Order that consumed the stock
    pub order_id: i64,
    /// Inventory item decremented
    pub inventory_item_id: i64,
    /// Units removed
    pub amount: i64,
}

/// Running stock levels.
#[derive(Debug, Clone)]
pub struct StockLedger {
    on_hand: BTreeMap<i64, i64>,
    recipes: HashMap<i64, Vec<(i64, i64)>>,
    policy: InventoryPolicy,
}

impl StockLedger {
    /// Opens a ledger at the given stock levels.
    #[must_use]
    pub fn new(
        inventory: &[inventory_item::Model],
        recipes: &[recipe_ingredient::Model],
        policy: InventoryPolicy,
    ) -> Self {
        let on_hand = inventory.iter().map(|i| (i.id, i.quantity)).collect();
        let mut by_item: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for edge in recipes {
            by_item
                .entry(edge.menu_item_id)
                .or_default()
                .push((edge.inventory_item_id, edge.quantity_used));
        }
        Self {
            on_hand,
            recipes: by_item,
            policy,
        }
    }

    /// Removes the ingredients for `units` servings of `menu_item_id`.
    ///
    /// Under [`InventoryPolicy::Clamp`] stock stops at zero and the movement
    /// records only what was actually removed; a fully depleted ingredient
    /// produces no movement. Under [`InventoryPolicy::AllowNegative`] the full
    /// amount is always removed.
    pub fn consume(&mut self, order_id: i64, menu_item_id: i64, units: i64) -> Vec<StockMovement> {
        let Some(recipe) = self.recipes.get(&menu_item_id) else {
            return Vec::new();
        };

        let mut movements = Vec::with_capacity(recipe.len());
        for &(inventory_item_id, per_serving) in recipe {
            let Some(quantity) = self.on_hand.get_mut(&inventory_item_id) else {
                continue;
            };
            let wanted = per_serving * units;
            let amount = match self.policy {
                InventoryPolicy::Clamp => wanted.min((*quantity).max(0)),
                InventoryPolicy::AllowNegative => wanted,
            };
            if amount == 0 {
                continue;
            }
            *quantity -= amount;
            movements.push(StockMovement {
                order_id,
                inventory_item_id,
                amount,
            });
        }
        movements
    }

    /// Consumes one serving per order line, in line order.
    pub fn replay(&mut self, lines: &[order_item::Model]) -> Vec<StockMovement> {
        lines
            .iter()
            .flat_map(|line| self.consume(line.order_id, line.menu_item_id, 1))
            .collect()
    }

    /// Units currently on hand for an inventory item.
    #[must_use]
    pub fn quantity(&self, inventory_item_id: i64) -> Option<i64> {
        self.on_hand.get(&inventory_item_id).copied()
    }

    /// The opening rows with their quantities replaced by the current levels.
    #[must_use]
    pub fn closing_inventory(&self, opening: &[inventory_item::Model]) -> Vec<inventory_item::Model> {
        opening
            .iter()
            .map(|item| inventory_item::Model {
                quantity: self.quantity(item.id).unwrap_or(item.quantity),
                ..item.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{seeded_rng, two_item_menu};

    fn stock(id: i64, quantity: i64) -> inventory_item::Model {
        inventory_item::Model {
            id,
            name: format!("Ingredient {id}"),
            quantity,
            restock_price: 1.0,
        }
    }

    fn edge(menu_item_id: i64, inventory_item_id: i64, quantity_used: i64) -> recipe_ingredient::Model {
        recipe_ingredient::Model {
            menu_item_id,
            inventory_item_id,
            quantity_used,
        }
    }

    #[test]
    fn test_build_inventory_ranges() {
        let names: Vec<String> = (0..25).map(|i| format!("Item {i}")).collect();
        let inventory = build_inventory(&names, &mut seeded_rng(1));
        assert_eq!(inventory.len(), 25);
        assert_eq!(inventory[0].id, 1);
        for item in &inventory {
            assert!((500..=2_000).contains(&item.quantity));
            assert!((5.0..=50.0).contains(&item.restock_price));
        }
    }

    fn line(id: i64, order_id: i64, menu_item_id: i64) -> order_item::Model {
        order_item::Model {
            id,
            order_id,
            menu_item_id,
            price: 1.0,
        }
    }

    #[test]
    fn test_provision_stock_covers_demand() {
        let mut inventory = vec![stock(1, 500), stock(2, 500), stock(3, 500)];
        let recipes = vec![edge(1, 1, 2), edge(1, 2, 3), edge(2, 2, 1)];
        // 1_000 servings of item 1, 400 of item 2, none touching ingredient 3
        let lines: Vec<order_item::Model> = (1..=1_400)
            .map(|i| line(i, i, if i <= 1_000 { 1 } else { 2 }))
            .collect();

        provision_stock(&mut inventory, &recipes, &lines, (1.1, 1.5), &mut seeded_rng(4));
        assert!((500 + 2_200..=500 + 3_000).contains(&inventory[0].quantity));
        assert!((500 + 3_740..=500 + 5_100).contains(&inventory[1].quantity));
        assert_eq!(inventory[2].quantity, 500);

        let mut ledger = StockLedger::new(&inventory, &recipes, InventoryPolicy::Clamp);
        let movements = ledger.replay(&lines);
        assert_eq!(movements.len(), 1_000 * 2 + 400);
        assert!(inventory.iter().all(|i| ledger.quantity(i.id).unwrap() >= 500));
    }

    #[test]
    fn test_zero_cover_keeps_safety_stock() {
        let mut inventory = vec![stock(1, 500)];
        let lines = vec![line(1, 1, 1)];
        provision_stock(&mut inventory, &[edge(1, 1, 3)], &lines, (0.0, 0.0), &mut seeded_rng(4));
        assert_eq!(inventory[0].quantity, 500);
    }

    #[test]
    fn test_replay_consumes_each_line() {
        let mut ledger = StockLedger::new(&[stock(1, 100)], &[edge(1, 1, 2)], InventoryPolicy::Clamp);
        let lines = vec![line(1, 1, 1), line(2, 1, 2), line(3, 2, 1)];

        let movements = ledger.replay(&lines);
        assert_eq!(
            movements,
            vec![
                StockMovement { order_id: 1, inventory_item_id: 1, amount: 2 },
                StockMovement { order_id: 2, inventory_item_id: 1, amount: 2 },
            ]
        );
        assert_eq!(ledger.quantity(1), Some(96));
    }

    #[test]
    fn test_build_recipes_only_for_base_items() {
        let mut menu = two_item_menu();
        menu[1].is_mod = true;
        let names: Vec<String> = (0..10).map(|i| format!("Item {i}")).collect();
        let inventory = build_inventory(&names, &mut seeded_rng(1));

        let recipes = build_recipes(&menu, &inventory, &mut seeded_rng(2));
        assert!((2..=5).contains(&recipes.len()));
        assert!(recipes.iter().all(|r| r.menu_item_id == menu[0].id));
        assert!(recipes.iter().all(|r| (1..=3).contains(&r.quantity_used)));

        let mut ingredients: Vec<i64> = recipes.iter().map(|r| r.inventory_item_id).collect();
        ingredients.dedup();
        assert_eq!(ingredients.len(), recipes.len());
    }

    #[test]
    fn test_build_recipes_small_inventory() {
        let menu = two_item_menu();
        let inventory = vec![stock(1, 10)];
        let recipes = build_recipes(&menu, &inventory, &mut seeded_rng(2));
        assert_eq!(recipes.len(), 2);
        assert!(build_recipes(&menu, &[], &mut seeded_rng(2)).is_empty());
    }

    #[test]
    fn test_consume_decrements_per_serving() {
        let mut ledger = StockLedger::new(
            &[stock(1, 100), stock(2, 100)],
            &[edge(1, 1, 2), edge(1, 2, 3)],
            InventoryPolicy::Clamp,
        );

        let movements = ledger.consume(7, 1, 2);
        assert_eq!(
            movements,
            vec![
                StockMovement { order_id: 7, inventory_item_id: 1, amount: 4 },
                StockMovement { order_id: 7, inventory_item_id: 2, amount: 6 },
            ]
        );
        assert_eq!(ledger.quantity(1), Some(96));
        assert_eq!(ledger.quantity(2), Some(94));
    }

    #[test]
    fn test_consume_without_recipe_is_noop() {
        let mut ledger = StockLedger::new(&[stock(1, 5)], &[], InventoryPolicy::Clamp);
        assert!(ledger.consume(1, 99, 1).is_empty());
        assert_eq!(ledger.quantity(1), Some(5));
    }

    #[test]
    fn test_clamp_policy_floors_at_zero() {
        let mut ledger = StockLedger::new(&[stock(1, 3)], &[edge(1, 1, 2)], InventoryPolicy::Clamp);

        assert_eq!(ledger.consume(1, 1, 1)[0].amount, 2);
        // only one unit left
        assert_eq!(ledger.consume(2, 1, 1)[0].amount, 1);
        assert!(ledger.consume(3, 1, 1).is_empty());
        assert_eq!(ledger.quantity(1), Some(0));
    }

    #[test]
    fn test_allow_negative_policy_backorders() {
        let mut ledger = StockLedger::new(
            &[stock(1, 3)],
            &[edge(1, 1, 2)],
            InventoryPolicy::AllowNegative,
        );
        ledger.consume(1, 1, 1);
        ledger.consume(2, 1, 1);
        assert_eq!(ledger.quantity(1), Some(-1));
    }

    #[test]
    fn test_closing_inventory_reflects_consumption() {
        let opening = vec![stock(1, 10), stock(2, 10)];
        let mut ledger = StockLedger::new(&opening, &[edge(1, 2, 1)], InventoryPolicy::Clamp);
        ledger.consume(1, 1, 4);

        let closing = ledger.closing_inventory(&opening);
        assert_eq!(closing[0].quantity, 10);
        assert_eq!(closing[1].quantity, 6);
        assert_eq!(closing[1].name, opening[1].name);
    }
}
