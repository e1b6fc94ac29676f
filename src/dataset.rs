//! The complete generated dataset and the pipeline that builds it.
//!
//! Generation is pure computation: one seeded random source is threaded
//! through every builder in a fixed order, so the same configuration always
//! yields the same dataset. Nothing here touches the filesystem.

use crate::{
    config::SeederConfig,
    core::{
        calendar::DayRange,
        catalog::build_menu,
        distributor::Distributor,
        inventory::{StockLedger, StockMovement, build_inventory, build_recipes, provision_stock},
        people::{build_customers, build_employees, credit_loyalty},
        report::RunSummary,
    },
    entities::{customer, employee, inventory_item, menu_item, order, order_item, recipe_ingredient},
    errors::Result,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Every table of one run plus its summary.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The generation window
    pub range: DayRange,
    /// Base items followed by add-ons
    pub menu_items: Vec<menu_item::Model>,
    /// Inventory at opening stock, sized to the window's demand
    pub inventory: Vec<inventory_item::Model>,
    /// Recipe edges of the base items
    pub recipes: Vec<recipe_ingredient::Model>,
    /// Customers with loyalty balances credited
    pub customers: Vec<customer::Model>,
    /// Staff
    pub employees: Vec<employee::Model>,
    /// Orders in time order
    pub orders: Vec<order::Model>,
    /// Order lines grouped by order
    pub order_items: Vec<order_item::Model>,
    /// Inventory decrements caused by the orders
    pub stock_movements: Vec<StockMovement>,
    /// Inventory after every movement is applied
    pub closing_inventory: Vec<inventory_item::Model>,
    /// Aggregate figures
    pub summary: RunSummary,
}

impl Dataset {
    /// Generates a dataset from the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the catalog is
    /// empty. No partial dataset is produced.
    pub fn generate(config: &SeederConfig) -> Result<Self> {
        let generator = &config.generator;
        generator.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(generator.seed);

        let menu_items = build_menu(&config.catalog, &mut rng)?;
        let mut inventory = build_inventory(&config.catalog.inventory, &mut rng);
        let recipes = build_recipes(&menu_items, &inventory, &mut rng);
        let mut customers = build_customers(generator.customers, &mut rng);
        let employees = build_employees(generator.employees, &mut rng);

        let distributor = Distributor::new(generator, &menu_items)?;
        let distribution = distributor.run(&mut rng);
        credit_loyalty(&mut customers, &distribution.orders);

        provision_stock(
            &mut inventory,
            &recipes,
            &distribution.lines,
            generator.stock_cover,
            &mut rng,
        );
        let mut ledger = StockLedger::new(&inventory, &recipes, generator.inventory_policy);
        let stock_movements = if generator.consume_inventory {
            ledger.replay(&distribution.lines)
        } else {
            Vec::new()
        };

        let range = *distributor.range();
        let summary = RunSummary::new(generator, &range, &distribution, stock_movements.len());
        let closing_inventory = ledger.closing_inventory(&inventory);
        info!(
            "Generated {} orders totalling {} cents",
            summary.orders, summary.revenue_cents
        );

        Ok(Self {
            range,
            menu_items,
            inventory,
            recipes,
            customers,
            employees,
            orders: distribution.orders,
            order_items: distribution.lines,
            stock_movements,
            closing_inventory,
            summary,
        })
    }

    /// Name of the first base item, used by the ingredient-count query.
    #[must_use]
    pub fn featured_item(&self) -> &str {
        self.menu_items
            .iter()
            .find(|item| !item.is_mod)
            .or_else(|| self.menu_items.first())
            .map_or("", |item| item.name.as_str())
    }
}
